/**
 * Credential Validators
 *
 * Pure predicates over raw email and password strings, injected at
 * composition time. Controllers never hard-code policy; they only ask the
 * injected validators.
 */

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Predicate over a raw email
pub type EmailValidator = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Predicate over a raw password
pub type PasswordValidator = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Minimum password length under [`ValidationPolicy::Standard`]
pub const STANDARD_MIN_PASSWORD_LEN: usize = 8;

/// Email and password predicates used by both controllers
#[derive(Clone)]
pub struct Validators {
    pub email: EmailValidator,
    pub password: PasswordValidator,
}

impl Validators {
    pub fn new(
        email: impl Fn(&str) -> bool + Send + Sync + 'static,
        password: impl Fn(&str) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            email: Arc::new(email),
            password: Arc::new(password),
        }
    }

    /// Accepts everything
    pub fn permissive() -> Self {
        Self::new(|_| true, |_| true)
    }

    pub fn standard() -> Self {
        Self::new(is_plausible_email, |password| {
            password.chars().count() >= STANDARD_MIN_PASSWORD_LEN
        })
    }

    pub fn accepts_email(&self, email: &str) -> bool {
        (self.email)(email)
    }

    pub fn accepts_password(&self, password: &str) -> bool {
        (self.password)(password)
    }
}

impl fmt::Debug for Validators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validators").finish_non_exhaustive()
    }
}

/// Named validator policies selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationPolicy {
    /// No-op policy: every email and password is accepted
    Permissive,
    /// Basic email shape and a minimum password length
    Standard,
}

impl ValidationPolicy {
    pub fn validators(self) -> Validators {
        match self {
            Self::Permissive => Validators::permissive(),
            Self::Standard => Validators::standard(),
        }
    }
}

impl FromStr for ValidationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "standard" => Ok(Self::Standard),
            other => Err(format!(
                "unknown validation policy '{}' (expected 'permissive' or 'standard')",
                other
            )),
        }
    }
}

impl fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Permissive => f.write_str("permissive"),
            Self::Standard => f.write_str("standard"),
        }
    }
}

/// Shape check only: one `@`, a non-empty local part, a dotted domain, no whitespace.
pub fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
