//! JSON File Storage
//!
//! Both stores keep their whole collection as one JSON array on disk. A
//! missing file reads as an empty collection; parent directories are created
//! on first write. Writes go to a sibling `.tmp` file that is then renamed over
//! the collection, so an interrupted write never leaves a truncated file.

/// User persistence
pub mod users;

/// Recipe persistence
pub mod recipes;

pub use recipes::JsonRecipeStore;
pub use users::{JsonUserStore, UserRecord};

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::store::StoreError;

/// Read a JSON array, treating a missing file as empty
pub(crate) async fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    match tokio::fs::read(path).await {
        Ok(bytes) if bytes.is_empty() => Ok(Vec::new()),
        Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}

/// Write a JSON array, creating parent directories as needed
pub(crate) async fn write_collection<T: Serialize>(path: &Path, items: &[T]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let bytes = serde_json::to_vec_pretty(items)?;

    let tmp = temp_path(path);
    tokio::fs::write(&tmp, bytes).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}

/// `users.json` -> `users.json.tmp`, in the same directory
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let items: Vec<String> = read_collection(&dir.path().join("absent.json")).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("items.json");

        write_collection(&path, &["a".to_string(), "b".to_string()]).await.unwrap();
        let items: Vec<String> = read_collection(&path).await.unwrap();
        assert_eq!(items, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_rewrite_replaces_file_and_leaves_no_temp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");

        write_collection(&path, &["old".to_string(), "longer old entry".to_string()])
            .await
            .unwrap();
        write_collection(&path, &["new".to_string()]).await.unwrap();

        let items: Vec<String> = read_collection(&path).await.unwrap();
        assert_eq!(items, vec!["new"]);
        assert!(!temp_path(&path).exists());
    }

    #[tokio::test]
    async fn test_interrupted_write_keeps_previous_collection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        write_collection(&path, &["kept".to_string()]).await.unwrap();

        // a crash after writing half of the temp file, before the rename
        tokio::fs::write(temp_path(&path), b"[\"partial").await.unwrap();

        let items: Vec<String> = read_collection(&path).await.unwrap();
        assert_eq!(items, vec!["kept"]);

        write_collection(&path, &["next".to_string()]).await.unwrap();
        let items: Vec<String> = read_collection(&path).await.unwrap();
        assert_eq!(items, vec!["next"]);
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let path = Path::new("/data/users.json");
        assert_eq!(temp_path(path), PathBuf::from("/data/users.json.tmp"));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        tokio::fs::write(&path, b"{not json").await.unwrap();

        let result: Result<Vec<String>, _> = read_collection(&path).await;
        assert!(matches!(result, Err(StoreError::Serialization(_))));
    }
}
