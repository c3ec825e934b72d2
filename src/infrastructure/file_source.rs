use super::records::parse_records;
use crate::domain::models::CommitRecord;
use crate::domain::source::CommitSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tracing::debug;

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CommitSource for FileSource {
    async fn load_commits(&self) -> Result<Vec<CommitRecord>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let records = parse_records(&content)
            .with_context(|| format!("Invalid commit records in {}", self.path.display()))?;
        debug!(path = %self.path.display(), commits = records.len(), "loaded commit records");
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

pub struct StdinSource;

#[async_trait]
impl CommitSource for StdinSource {
    async fn load_commits(&self) -> Result<Vec<CommitRecord>> {
        let mut content = String::new();
        tokio::io::stdin()
            .read_to_string(&mut content)
            .await
            .context("Failed to read commit records from stdin")?;
        let records = parse_records(&content).context("Invalid commit records on stdin")?;
        debug!(commits = records.len(), "loaded commit records from stdin");
        Ok(records)
    }

    fn describe(&self) -> String {
        "<stdin>".to_string()
    }
}
