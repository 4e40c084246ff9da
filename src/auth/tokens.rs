/**
 * Session Tokens
 *
 * Stateless JWT session tokens. A token carries the subject identity, its
 * issue time and its expiry, and is signed with one process-wide HMAC key
 * named by a key id (`kid`) in the JWT header.
 *
 * # Validity
 *
 * A token is accepted only when all of these hold:
 * - the header `kid` equals the configured key id
 * - the signature verifies under the configured secret and algorithm
 * - the current time is strictly before `exp`
 *
 * Expiry is checked against an injectable [`Clock`] rather than inside
 * jsonwebtoken, so the window has no leeway and tests control time.
 */

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use jsonwebtoken::{decode, decode_header, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::auth::identity::UserId;
use crate::shared::error::AuthError;

/// Key id used by the reference composition
pub const DEFAULT_KEY_ID: &str = "auth-jwt";

/// Symmetric signing secret plus the key id that names it
#[derive(Clone)]
pub struct SigningKey {
    kid: String,
    secret: Vec<u8>,
}

impl SigningKey {
    pub fn new(kid: impl Into<String>, secret: impl AsRef<[u8]>) -> Self {
        Self {
            kid: kid.into(),
            secret: secret.as_ref().to_vec(),
        }
    }

    pub fn kid(&self) -> &str {
        &self.kid
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("kid", &self.kid)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// HMAC digest used to sign tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenAlgorithm {
    #[default]
    Hs256,
    Hs384,
    Hs512,
}

impl TokenAlgorithm {
    fn jwt(self) -> Algorithm {
        match self {
            Self::Hs256 => Algorithm::HS256,
            Self::Hs384 => Algorithm::HS384,
            Self::Hs512 => Algorithm::HS512,
        }
    }
}

impl FromStr for TokenAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HS256" => Ok(Self::Hs256),
            "HS384" => Ok(Self::Hs384),
            "HS512" => Ok(Self::Hs512),
            other => Err(format!(
                "unsupported token algorithm '{}' (expected HS256, HS384 or HS512)",
                other
            )),
        }
    }
}

impl fmt::Display for TokenAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hs256 => f.write_str("HS256"),
            Self::Hs384 => f.write_str("HS384"),
            Self::Hs512 => f.write_str("HS512"),
        }
    }
}

/// Source of the current time in Unix seconds
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> i64;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user identifier in its `Display` form
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Signed session token handed to clients
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for SessionToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<SessionToken> for String {
    fn from(token: SessionToken) -> Self {
        token.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionToken({} bytes)", self.0.len())
    }
}

/// Immutable signing material shared by the provider and the verifier
pub struct TokenKeys {
    key: SigningKey,
    algorithm: TokenAlgorithm,
    ttl: Duration,
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    pub fn new(key: SigningKey, algorithm: TokenAlgorithm, ttl: Duration) -> Self {
        let encoding = EncodingKey::from_secret(&key.secret);
        let decoding = DecodingKey::from_secret(&key.secret);
        Self {
            key,
            algorithm,
            ttl,
            encoding,
            decoding,
        }
    }

    pub fn kid(&self) -> &str {
        self.key.kid()
    }

    pub fn algorithm(&self) -> TokenAlgorithm {
        self.algorithm
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl fmt::Debug for TokenKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenKeys")
            .field("key", &self.key)
            .field("algorithm", &self.algorithm)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

/// Issues signed session tokens
#[derive(Clone)]
pub struct TokenProvider {
    keys: Arc<TokenKeys>,
    clock: Arc<dyn Clock>,
}

impl TokenProvider {
    pub fn new(keys: Arc<TokenKeys>) -> Self {
        Self {
            keys,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Create a token for a user
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the user store
    ///
    /// # Returns
    /// Signed token expiring `ttl` after now
    pub fn issue<ID: UserId>(&self, id: &ID) -> Result<SessionToken, AuthError> {
        let iat = self.clock.now();
        let ttl = i64::try_from(self.keys.ttl().as_secs()).unwrap_or(i64::MAX);
        let claims = Claims {
            sub: id.to_string(),
            iat,
            exp: iat.saturating_add(ttl),
        };

        let mut header = Header::new(self.keys.algorithm.jwt());
        header.kid = Some(self.keys.kid().to_string());

        encode(&header, &claims, &self.keys.encoding)
            .map(SessionToken)
            .map_err(|e| AuthError::signing(e.to_string()))
    }
}

impl fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenProvider")
            .field("keys", &self.keys)
            .finish_non_exhaustive()
    }
}

/// Verifies session tokens and recovers the subject identity
pub struct TokenVerifier<ID> {
    keys: Arc<TokenKeys>,
    clock: Arc<dyn Clock>,
    validation: Validation,
    _id: PhantomData<fn() -> ID>,
}

impl<ID: UserId> TokenVerifier<ID> {
    pub fn new(keys: Arc<TokenKeys>) -> Self {
        let mut validation = Validation::new(keys.algorithm.jwt());
        // exp is compared against our own clock in verify_claims
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            keys,
            clock: Arc::new(SystemClock),
            validation,
            _id: PhantomData,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Verify a token and return the identity it was issued for
    pub fn verify(&self, token: &str) -> Result<ID, AuthError> {
        let claims = self.verify_claims(token)?;
        claims
            .sub
            .parse::<ID>()
            .map_err(|_| AuthError::invalid_token("subject is not a valid user id"))
    }

    /// Verify key id, signature and expiry, returning the decoded claims
    pub fn verify_claims(&self, token: &str) -> Result<Claims, AuthError> {
        let header = decode_header(token)
            .map_err(|e| AuthError::invalid_token(format!("malformed header: {}", e)))?;

        match header.kid.as_deref() {
            Some(kid) if kid == self.keys.kid() => {}
            Some(kid) => {
                return Err(AuthError::invalid_token(format!("unknown key id '{}'", kid)));
            }
            None => return Err(AuthError::invalid_token("missing key id")),
        }

        let data = decode::<Claims>(token, &self.keys.decoding, &self.validation)
            .map_err(|e| AuthError::invalid_token(e.to_string()))?;

        if self.clock.now() >= data.claims.exp {
            return Err(AuthError::ExpiredToken);
        }

        Ok(data.claims)
    }
}

impl<ID> Clone for TokenVerifier<ID> {
    fn clone(&self) -> Self {
        Self {
            keys: Arc::clone(&self.keys),
            clock: Arc::clone(&self.clock),
            validation: self.validation.clone(),
            _id: PhantomData,
        }
    }
}

impl<ID> fmt::Debug for TokenVerifier<ID> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("keys", &self.keys)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::sync::atomic::{AtomicI64, Ordering};

    /// Clock pinned to a settable instant
    #[derive(Debug, Default)]
    pub(crate) struct ManualClock(AtomicI64);

    impl ManualClock {
        pub(crate) fn at(now: i64) -> Arc<Self> {
            Arc::new(Self(AtomicI64::new(now)))
        }

        pub(crate) fn set(&self, now: i64) {
            self.0.store(now, Ordering::SeqCst);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> i64 {
            self.0.load(Ordering::SeqCst)
        }
    }

    const SECRET: &str = "test secret that is long enough for hmac";
    const T0: i64 = 1_750_000_000;

    fn keys(kid: &str, ttl_secs: u64) -> Arc<TokenKeys> {
        Arc::new(TokenKeys::new(
            SigningKey::new(kid, SECRET),
            TokenAlgorithm::Hs256,
            Duration::from_secs(ttl_secs),
        ))
    }

    fn pair(clock: Arc<ManualClock>) -> (TokenProvider, TokenVerifier<u64>) {
        let keys = keys(DEFAULT_KEY_ID, 3600);
        (
            TokenProvider::new(Arc::clone(&keys)).with_clock(clock.clone()),
            TokenVerifier::new(keys).with_clock(clock),
        )
    }

    #[test]
    fn test_issue_then_verify_recovers_identity() {
        let (provider, verifier) = pair(ManualClock::at(T0));
        let token = provider.issue(&42u64).unwrap();

        assert!(!token.as_str().is_empty());
        assert_eq!(verifier.verify(token.as_str()).unwrap(), 42);
    }

    #[test]
    fn test_claims_carry_issue_and_expiry() {
        let (provider, verifier) = pair(ManualClock::at(T0));
        let token = provider.issue(&7u64).unwrap();

        let claims = verifier.verify_claims(token.as_str()).unwrap();
        assert_eq!(
            claims,
            Claims {
                sub: "7".to_string(),
                iat: T0,
                exp: T0 + 3600,
            }
        );
    }

    #[test]
    fn test_same_inputs_differ_only_by_time() {
        let clock = ManualClock::at(T0);
        let (provider, _) = pair(clock.clone());

        let first = provider.issue(&1u64).unwrap();
        let again = provider.issue(&1u64).unwrap();
        assert_eq!(first, again);

        clock.set(T0 + 1);
        let later = provider.issue(&1u64).unwrap();
        assert_ne!(first, later);
    }

    #[test]
    fn test_token_expires_at_exp() {
        let clock = ManualClock::at(T0);
        let (provider, verifier) = pair(clock.clone());
        let token = provider.issue(&9u64).unwrap();

        clock.set(T0 + 3599);
        assert_eq!(verifier.verify(token.as_str()).unwrap(), 9);

        clock.set(T0 + 3600);
        assert_eq!(verifier.verify(token.as_str()), Err(AuthError::ExpiredToken));

        clock.set(T0 + 90_000);
        assert_eq!(verifier.verify(token.as_str()), Err(AuthError::ExpiredToken));
    }

    #[test]
    fn test_tampered_token_is_invalid() {
        let (provider, verifier) = pair(ManualClock::at(T0));
        let token = provider.issue(&5u64).unwrap().into_string();

        let dots: Vec<usize> = token.match_indices('.').map(|(i, _)| i).collect();
        // one position inside each of header, payload and signature
        let positions = [dots[0] / 2, (dots[0] + dots[1]) / 2, (dots[1] + token.len()) / 2];

        for position in positions {
            let mut bytes = token.clone().into_bytes();
            bytes[position] = if bytes[position] == b'A' { b'B' } else { b'A' };
            let tampered = String::from_utf8(bytes).unwrap();

            assert_matches!(
                verifier.verify(&tampered),
                Err(AuthError::InvalidToken { .. }),
                "tampering byte {} should invalidate the token",
                position
            );
        }
    }

    #[test]
    fn test_other_key_id_is_rejected_even_with_same_secret() {
        let clock = ManualClock::at(T0);
        let foreign = TokenProvider::new(keys("retired-key", 3600)).with_clock(clock.clone());
        let (_, verifier) = pair(clock);

        let token = foreign.issue(&3u64).unwrap();
        assert_matches!(
            verifier.verify(token.as_str()),
            Err(AuthError::InvalidToken { ref reason }) if reason.contains("retired-key")
        );
    }

    #[test]
    fn test_other_secret_is_rejected() {
        let clock = ManualClock::at(T0);
        let other = Arc::new(TokenKeys::new(
            SigningKey::new(DEFAULT_KEY_ID, "a completely different secret"),
            TokenAlgorithm::Hs256,
            Duration::from_secs(3600),
        ));
        let forger = TokenProvider::new(other).with_clock(clock.clone());
        let (_, verifier) = pair(clock);

        let token = forger.issue(&3u64).unwrap();
        assert_matches!(verifier.verify(token.as_str()), Err(AuthError::InvalidToken { .. }));
    }

    #[test]
    fn test_other_algorithm_is_rejected() {
        let clock = ManualClock::at(T0);
        let hs512 = Arc::new(TokenKeys::new(
            SigningKey::new(DEFAULT_KEY_ID, SECRET),
            TokenAlgorithm::Hs512,
            Duration::from_secs(3600),
        ));
        let provider = TokenProvider::new(hs512).with_clock(clock.clone());
        let (_, verifier) = pair(clock);

        let token = provider.issue(&3u64).unwrap();
        assert_matches!(verifier.verify(token.as_str()), Err(AuthError::InvalidToken { .. }));
    }

    #[test]
    fn test_garbage_is_invalid() {
        let (_, verifier) = pair(ManualClock::at(T0));
        for garbage in ["", "invalid.token.here", "a.b", "not a token at all"] {
            assert_matches!(verifier.verify(garbage), Err(AuthError::InvalidToken { .. }));
        }
    }

    #[test]
    fn test_unparseable_subject_is_invalid() {
        let clock = ManualClock::at(T0);
        let keys = keys(DEFAULT_KEY_ID, 3600);
        let provider = TokenProvider::new(Arc::clone(&keys)).with_clock(clock.clone());
        let verifier: TokenVerifier<u64> = TokenVerifier::new(keys).with_clock(clock);

        let token = provider.issue(&"not-a-number".to_string()).unwrap();
        assert_matches!(
            verifier.verify(token.as_str()),
            Err(AuthError::InvalidToken { ref reason }) if reason.contains("subject")
        );
    }

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("hs256".parse(), Ok(TokenAlgorithm::Hs256));
        assert_eq!("HS512".parse(), Ok(TokenAlgorithm::Hs512));
        assert!("RS256".parse::<TokenAlgorithm>().is_err());
        assert_eq!(TokenAlgorithm::default().to_string(), "HS256");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let debug = format!("{:?}", SigningKey::new("k1", "super-secret-value"));
        assert!(debug.contains("k1"));
        assert!(!debug.contains("super-secret-value"));
    }
}
