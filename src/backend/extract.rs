/**
 * Request Extractors
 *
 * `AppJson` decodes a JSON body like `axum::Json`, but its rejection is a
 * `BackendError`, so a missing content type, malformed JSON or a missing
 * field answer with the same `{"error", "status"}` body as every other
 * failure.
 */

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;

/// JSON request body with `BackendError` rejections
#[derive(Debug, Clone)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(AppJson(value))
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        BackendError::bad_request(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, StatusCode};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct SignupBody {
        email: String,
    }

    async fn extract(content_type: Option<&str>, body: &'static str) -> Result<AppJson<SignupBody>, BackendError> {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(value) = content_type {
            builder = builder.header(header::CONTENT_TYPE, value);
        }
        let request = builder.body(Body::from(body)).unwrap();
        AppJson::<SignupBody>::from_request(request, &()).await
    }

    #[tokio::test]
    async fn test_valid_body_decodes() {
        let AppJson(body) = extract(Some("application/json"), r#"{"email":"a@x.im"}"#)
            .await
            .unwrap();
        assert_eq!(body.email, "a@x.im");
    }

    #[tokio::test]
    async fn test_rejections_are_bad_requests() {
        let cases = [
            (Some("application/json"), "{}"),
            (Some("application/json"), "{not json"),
            (None, r#"{"email":"a@x.im"}"#),
        ];

        for (content_type, body) in cases {
            let error = extract(content_type, body).await.unwrap_err();
            assert_eq!(error.status_code(), StatusCode::BAD_REQUEST, "{}", body);
            assert!(!error.message().is_empty());
        }
    }
}
