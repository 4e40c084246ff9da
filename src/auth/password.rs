/**
 * Password Hashing
 *
 * One-way hashing of plaintext passwords and verification against stored
 * hashes. The reference implementation wraps bcrypt, which salts every call:
 * two hashes of one password differ, yet both verify.
 *
 * Controllers call bcrypt through [`hash_blocking`] and [`verify_blocking`],
 * which run it on tokio's blocking pool rather than a runtime worker.
 */

use std::sync::Arc;

use thiserror::Error;

/// Failure inside the password primitive
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Produces a salted one-way hash of a plaintext password
pub trait PasswordHasher: Send + Sync + 'static {
    fn hash(&self, plaintext: &str) -> Result<String, PasswordError>;
}

/// Checks a plaintext password against a stored hash.
///
/// A mismatch is `Ok(false)`. Only a malformed hash is an error.
pub trait PasswordVerifier: Send + Sync + 'static {
    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, PasswordError>;
}

/// bcrypt-backed hasher and verifier
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// # Arguments
    /// * `cost` - bcrypt work factor (4..=31)
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        Ok(bcrypt::hash(plaintext, self.cost)?)
    }
}

impl PasswordVerifier for BcryptPasswordHasher {
    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, PasswordError> {
        Ok(bcrypt::verify(plaintext, hash)?)
    }
}

/// Hash `plaintext` on the blocking thread pool
pub async fn hash_blocking<H: PasswordHasher>(
    hasher: &Arc<H>,
    plaintext: &str,
) -> Result<String, PasswordError> {
    let hasher = Arc::clone(hasher);
    let plaintext = plaintext.to_owned();
    tokio::task::spawn_blocking(move || hasher.hash(&plaintext)).await?
}

/// Verify `plaintext` against `hash` on the blocking thread pool
pub async fn verify_blocking<V: PasswordVerifier>(
    verifier: &Arc<V>,
    plaintext: &str,
    hash: &str,
) -> Result<bool, PasswordError> {
    let verifier = Arc::clone(verifier);
    let plaintext = plaintext.to_owned();
    let hash = hash.to_owned();
    tokio::task::spawn_blocking(move || verifier.verify(&plaintext, &hash)).await?
}
