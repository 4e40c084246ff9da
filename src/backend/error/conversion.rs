/**
 * Error Conversion
 *
 * Turns a `BackendError` into a JSON response of the form
 * `{"error": "...", "status": 401}`. Internal failures are logged in full
 * here and reach the client only as a generic message.
 */

use axum::response::{IntoResponse, Json, Response};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!(error = %self, "Internal server error");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
