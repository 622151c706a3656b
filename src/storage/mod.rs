//! Storage layer for paysplit
//!
//! The budget lives in a flat key-value store as a single JSON document.
//! `Storage` bundles the store with the audit logger so services can write
//! through and record each change in one place.

pub mod budget;
pub mod file_io;
pub mod store;

pub use budget::{
    export_filename, export_to, import_from, load, preserve_corrupt, save, try_load,
    CORRUPT_STATE_KEY, STATE_KEY,
};
pub use file_io::{read_text, write_text_atomic};
pub use store::{FileStore, KeyValueStore, MemoryStore};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::PaysplitPaths;
use crate::config::settings::Settings;
use crate::error::PaysplitError;

/// Main storage coordinator
pub struct Storage {
    paths: Option<PaysplitPaths>,
    store: Box<dyn KeyValueStore>,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Open file-backed storage under the configured directories
    pub fn new(paths: PaysplitPaths, settings: &Settings) -> Result<Self, PaysplitError> {
        paths.ensure_directories()?;

        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            store: Box::new(FileStore::new(paths.data_dir())),
            audit,
            paths: Some(paths),
        })
    }

    /// Storage that lives only in memory, without an audit log
    pub fn in_memory() -> Self {
        Self::with_store(Box::new(MemoryStore::new()))
    }

    /// Storage over any key-value store, without paths or an audit log
    pub fn with_store(store: Box<dyn KeyValueStore>) -> Self {
        Self {
            paths: None,
            store,
            audit: None,
        }
    }

    /// Paths configuration, if file-backed
    pub fn paths(&self) -> Option<&PaysplitPaths> {
        self.paths.as_ref()
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Record an audit entry if auditing is enabled
    pub fn log(&self, entry: &AuditEntry) -> Result<(), PaysplitError> {
        match &self.audit {
            Some(logger) => logger.log(entry),
            None => Ok(()),
        }
    }

    /// Whether a budget document has been written yet
    pub fn has_budget(&self) -> Result<bool, PaysplitError> {
        Ok(self.store.get(STATE_KEY)?.is_some())
    }
}
