//! Property-based tests for validators and session tokens
//!
//! Uses proptest to generate random inputs and verify properties

use std::sync::Arc;
use std::time::Duration;

use generic_auth::auth::tokens::{SigningKey, TokenAlgorithm, TokenKeys, TokenProvider, TokenVerifier};
use generic_auth::auth::validators::{is_plausible_email, Validators, STANDARD_MIN_PASSWORD_LEN};
use generic_auth::shared::error::AuthError;
use proptest::prelude::*;

fn keys(secret: &str) -> Arc<TokenKeys> {
    Arc::new(TokenKeys::new(
        SigningKey::new("prop-kid", secret),
        TokenAlgorithm::Hs256,
        Duration::from_secs(300),
    ))
}

proptest! {
    #[test]
    fn test_permissive_accepts_anything(email in ".*", password in ".*") {
        let validators = Validators::permissive();
        prop_assert!(validators.accepts_email(&email));
        prop_assert!(validators.accepts_password(&password));
    }

    #[test]
    fn test_standard_password_length(password in ".{0,20}") {
        let accepted = Validators::standard().accepts_password(&password);
        prop_assert_eq!(accepted, password.chars().count() >= STANDARD_MIN_PASSWORD_LEN);
    }

    #[test]
    fn test_well_formed_emails_accepted(
        local in "[a-z0-9._+-]{1,16}",
        host in "[a-z0-9-]{1,16}",
        tld in "[a-z]{2,6}",
    ) {
        let email = format!("{}@{}.{}", local, host, tld);
        prop_assert!(is_plausible_email(&email));
    }

    #[test]
    fn test_emails_without_at_rejected(email in "[^@]*") {
        prop_assert!(!is_plausible_email(&email));
    }

    #[test]
    fn test_token_round_trips_any_id(id in any::<u64>()) {
        let keys = keys("prop secret");
        let token = TokenProvider::new(Arc::clone(&keys)).issue(&id).unwrap();
        let verified: u64 = TokenVerifier::new(keys).verify(token.as_str()).unwrap();
        prop_assert_eq!(verified, id);
    }

    #[test]
    fn test_token_rejected_under_other_secret(id in any::<u32>(), other in "[a-z]{8,16}") {
        prop_assume!(other != "prop secret");
        let token = TokenProvider::new(keys("prop secret")).issue(&id).unwrap();
        let result = TokenVerifier::<u32>::new(keys(&other)).verify(token.as_str());
        let rejected = matches!(result, Err(AuthError::InvalidToken { .. }));
        prop_assert!(rejected, "expected InvalidToken, got {:?}", result);
    }
}
