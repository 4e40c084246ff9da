/**
 * Authentication Request/Response Types
 */

use serde::{Deserialize, Serialize};

use crate::auth::identity::Credentials;
use crate::auth::tokens::SessionToken;

/// Body of `POST /register` and `POST /login`
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AuthRequest {
    pub email: String,
    pub password: String,
}

impl From<AuthRequest> for Credentials {
    fn from(request: AuthRequest) -> Self {
        Credentials::new(request.email, request.password)
    }
}

/// Successful authentication response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenResponse {
    pub token: String,
}

impl From<SessionToken> for TokenResponse {
    fn from(token: SessionToken) -> Self {
        Self {
            token: token.into_string(),
        }
    }
}
