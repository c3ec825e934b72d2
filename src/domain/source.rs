use crate::domain::models::CommitRecord;
use anyhow::Result;
use async_trait::async_trait;

/// Supplier of commit records, ordered children before parents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommitSource: Send + Sync {
    async fn load_commits(&self) -> Result<Vec<CommitRecord>>;

    // Human readable origin, used in logs and error messages
    fn describe(&self) -> String;
}
