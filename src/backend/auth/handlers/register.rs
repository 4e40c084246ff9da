/**
 * Register Handler
 *
 * `POST /register` decodes `{email, password}`, runs the registration flow,
 * and answers `{token}`.
 *
 * # Errors
 *
 * * `400 Bad Request` - Validator rejected the input, or the body is missing,
 *   not JSON, or lacks a field
 * * `409 Conflict` - Email already registered
 * * `500 Internal Server Error` - Hashing, storage or signing failed
 *
 * # Example Request
 *
 * ```http
 * POST /register HTTP/1.1
 * Content-Type: application/json
 *
 * {"email": "hi@x.im", "password": "123456"}
 * ```
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::auth::identity::Credentials;
use crate::backend::auth::handlers::types::{AuthRequest, TokenResponse};
use crate::backend::error::BackendError;
use crate::backend::extract::AppJson;
use crate::backend::server::state::AppRegisterController;

pub async fn register(
    State(controller): State<Arc<AppRegisterController>>,
    AppJson(request): AppJson<AuthRequest>,
) -> Result<Json<TokenResponse>, BackendError> {
    let credentials = Credentials::from(request);
    tracing::info!("Register request for: {}", credentials.email);

    let token = controller
        .register(&credentials.email, &credentials.password)
        .await?;

    Ok(Json(token.into()))
}
