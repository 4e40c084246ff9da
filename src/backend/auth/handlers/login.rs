/**
 * Login Handler
 *
 * `POST /login` decodes `{email, password}`, runs the login flow, and
 * answers `{token}`.
 *
 * # Security
 *
 * - Unknown email and wrong password both answer 401 with the same body
 * - Passwords are never logged or returned in responses
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::auth::identity::Credentials;
use crate::backend::auth::handlers::types::{AuthRequest, TokenResponse};
use crate::backend::error::BackendError;
use crate::backend::extract::AppJson;
use crate::backend::server::state::AppLoginController;

pub async fn login(
    State(controller): State<Arc<AppLoginController>>,
    AppJson(request): AppJson<AuthRequest>,
) -> Result<Json<TokenResponse>, BackendError> {
    let credentials = Credentials::from(request);
    tracing::info!("Login request for: {}", credentials.email);

    let token = controller
        .login(&credentials.email, &credentials.password)
        .await?;

    Ok(Json(token.into()))
}
