use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::models::Lead;

use super::{LeadStore, StorageError};

/// Leads kept as one pretty-printed JSON array, rewritten in full on every append.
pub struct JsonLeadStore {
    path: PathBuf,
    // Serializes load-modify-save so concurrent appends in this process can't drop leads.
    write_lock: Mutex<()>,
}

impl JsonLeadStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_leads(&self) -> Result<Vec<Lead>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_str(&raw).map_err(|source| StorageError::CorruptStore {
            path: self.path.clone(),
            source,
        })
    }

    fn write_leads(&self, leads: &[Lead]) -> Result<(), StorageError> {
        let body = serde_json::to_string_pretty(leads).map_err(|e| self.io_error(e.into()))?;

        // Write beside the target and rename so readers never see a partial file.
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, body).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))
    }
}

impl LeadStore for JsonLeadStore {
    fn append(&self, lead: Lead) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut leads = self.read_leads()?;
        leads.push(lead);
        self.write_leads(&leads)?;

        tracing::debug!(path = %self.path.display(), total = leads.len(), "lead file rewritten");
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<Lead>, StorageError> {
        self.read_leads()
    }
}
