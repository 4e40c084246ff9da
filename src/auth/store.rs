/**
 * User Store Contract
 *
 * The core reaches persistence only through [`UserStore`]. Implementations
 * own their records and their concurrency discipline; the one hard
 * requirement is that `create_user` is an atomic create-if-absent.
 */

use std::future::Future;
use std::sync::Mutex;

use thiserror::Error;

use crate::auth::identity::{StoredUser, UserId};

/// Failures reported by a user store
#[derive(Debug, Error)]
pub enum StoreError {
    /// `create_user` found an existing record with the same email
    #[error("Email already registered: {email}")]
    Duplicate { email: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Any other backend-specific failure
    #[error("Store error: {0}")]
    Backend(String),
}

/// Lookup/create contract the controllers depend on.
///
/// # Contract
///
/// - `find_user` returns `Ok(None)` for an unknown email; absence is not an error.
/// - `create_user` must reject a duplicate email with [`StoreError::Duplicate`]
///   atomically. Two concurrent registrations for one email can both pass the
///   controller's existence check, so the store is the only place that can
///   guarantee a single account.
pub trait UserStore: Send + Sync + 'static {
    /// Identifier type this store assigns
    type Id: UserId;

    fn find_user(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<StoredUser<Self::Id>>, StoreError>> + Send;

    fn create_user(
        &self,
        email: &str,
        hashed_password: &str,
    ) -> impl Future<Output = Result<StoredUser<Self::Id>, StoreError>> + Send;
}

type IdGenerator<ID> = Box<dyn Fn(usize) -> ID + Send + Sync>;

/// In-process store for tests and embedders that bring their own persistence.
///
/// Identifiers come from a generator that receives the number of users
/// already stored.
pub struct MemoryUserStore<ID> {
    users: Mutex<Vec<StoredUser<ID>>>,
    next_id: IdGenerator<ID>,
}

impl<ID: UserId> MemoryUserStore<ID> {
    pub fn new(next_id: impl Fn(usize) -> ID + Send + Sync + 'static) -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            next_id: Box::new(next_id),
        }
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.users.lock().map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<StoredUser<ID>>>, StoreError> {
        self.users
            .lock()
            .map_err(|_| StoreError::Backend("user list lock poisoned".to_string()))
    }
}

impl MemoryUserStore<uuid::Uuid> {
    /// Store that assigns random v4 UUIDs
    pub fn with_uuids() -> Self {
        Self::new(|_| uuid::Uuid::new_v4())
    }
}

impl<ID: UserId> UserStore for MemoryUserStore<ID> {
    type Id = ID;

    async fn find_user(&self, email: &str) -> Result<Option<StoredUser<ID>>, StoreError> {
        let users = self.lock()?;
        Ok(users.iter().find(|user| user.email == email).cloned())
    }

    async fn create_user(
        &self,
        email: &str,
        hashed_password: &str,
    ) -> Result<StoredUser<ID>, StoreError> {
        let mut users = self.lock()?;
        if users.iter().any(|user| user.email == email) {
            return Err(StoreError::Duplicate {
                email: email.to_string(),
            });
        }

        let user = StoredUser {
            id: (self.next_id)(users.len()),
            email: email.to_string(),
            hashed_password: hashed_password.to_string(),
        };
        users.push(user.clone());
        Ok(user)
    }
}
