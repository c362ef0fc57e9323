pub mod json;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::models::Lead;

pub use json::JsonLeadStore;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("lead file {path} is corrupt: {source}")]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("lead file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Append-only collection of completed bookings.
pub trait LeadStore: Send + Sync {
    fn append(&self, lead: Lead) -> Result<(), StorageError>;
    fn load_all(&self) -> Result<Vec<Lead>, StorageError>;
}

/// Creates the data directory if needed and opens the lead file inside it.
pub fn init_store(data_dir: &Path, file_name: &str) -> anyhow::Result<JsonLeadStore> {
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("failed to create data directory {}", data_dir.display()))?;

    Ok(JsonLeadStore::new(data_dir.join(file_name)))
}
