//! Storage layer for the allowance tracker
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The whole ledger lives in one document; every save overwrites
//! it completely. Exactly one interactive session is assumed — concurrent
//! access to the same document is unsupported.

pub mod document;
pub mod file_io;

pub use document::LedgerDocument;
pub use file_io::{read_json, write_json_atomic};

use crate::config::paths::AllowancePaths;
use crate::error::AllowanceResult;

/// Storage coordinator bound to the resolved application paths
pub struct Storage {
    paths: AllowancePaths,
}

impl Storage {
    pub fn new(paths: AllowancePaths) -> AllowanceResult<Self> {
        paths.ensure_directories()?;
        Ok(Self { paths })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &AllowancePaths {
        &self.paths
    }

    /// Load the ledger document
    ///
    /// The load path is total: a missing file or a parse failure both
    /// degrade to the default document rather than surfacing an error.
    pub fn load(&self) -> LedgerDocument {
        read_json(self.paths.ledger_file()).unwrap_or_default()
    }

    /// Save the ledger document, reporting any failure to the caller
    pub fn save(&self, document: &LedgerDocument) -> AllowanceResult<()> {
        write_json_atomic(self.paths.ledger_file(), document)
    }

    /// Save the ledger document, swallowing failures
    ///
    /// The auto-save path: the in-memory session continues either way.
    pub fn save_silent(&self, document: &LedgerDocument) {
        let _ = self.save(document);
    }
}
