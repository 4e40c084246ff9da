/**
 * User Identity and Records
 *
 * The core never constructs identifiers itself. Stores assign them, and the
 * token layer only needs to print and parse them to carry a subject claim.
 */

use std::fmt::{Debug, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Bounds an identifier type needs to flow through the core.
///
/// `Display` and `FromStr` must round-trip: the token subject is written with
/// one and read back with the other.
pub trait UserId: Clone + Eq + Debug + Display + FromStr + Send + Sync + 'static {}

impl<T> UserId for T where T: Clone + Eq + Debug + Display + FromStr + Send + Sync + 'static {}

/// Raw login or registration input
#[derive(Clone, Deserialize, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// A user as the store hands it to the core
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUser<ID> {
    /// Identifier assigned by the store
    pub id: ID,
    /// Email the user registered with
    pub email: String,
    /// Encoded password hash (bcrypt)
    pub hashed_password: String,
}
