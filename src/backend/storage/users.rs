/**
 * JSON User Store
 *
 * Persists users to a single `users.json` file. Every access runs under one
 * mutex, and creation re-reads the file inside the critical section, which
 * makes `create_user` an atomic create-if-absent for this process.
 */

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::auth::identity::StoredUser;
use crate::auth::store::{StoreError, UserStore};
use crate::backend::storage::{read_collection, write_collection};

/// User as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// User email address
    pub email: String,
    /// Hashed password (bcrypt)
    pub hashed_password: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

impl From<UserRecord> for StoredUser<Uuid> {
    fn from(record: UserRecord) -> Self {
        StoredUser {
            id: record.id,
            email: record.email,
            hashed_password: record.hashed_password,
        }
    }
}

#[derive(Debug)]
pub struct JsonUserStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonUserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// All stored records
    pub async fn all(&self) -> Result<Vec<UserRecord>, StoreError> {
        let _guard = self.lock.lock().await;
        read_collection(&self.path).await
    }
}

impl UserStore for JsonUserStore {
    type Id = Uuid;

    async fn find_user(&self, email: &str) -> Result<Option<StoredUser<Uuid>>, StoreError> {
        let _guard = self.lock.lock().await;
        let records: Vec<UserRecord> = read_collection(&self.path).await?;
        Ok(records
            .into_iter()
            .find(|record| record.email == email)
            .map(StoredUser::from))
    }

    async fn create_user(
        &self,
        email: &str,
        hashed_password: &str,
    ) -> Result<StoredUser<Uuid>, StoreError> {
        let _guard = self.lock.lock().await;

        let mut records: Vec<UserRecord> = read_collection(&self.path).await?;
        if records.iter().any(|record| record.email == email) {
            return Err(StoreError::Duplicate {
                email: email.to_string(),
            });
        }

        let record = UserRecord {
            id: Uuid::new_v4(),
            email: email.to_string(),
            hashed_password: hashed_password.to_string(),
            created_at: Utc::now(),
        };
        records.push(record.clone());
        write_collection(&self.path, &records).await?;

        tracing::debug!("Stored user {} in {}", record.id, self.path.display());
        Ok(record.into())
    }
}
