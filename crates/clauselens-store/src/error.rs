//! Error types for the record store

use clauselens_domain::{AnalysisStatus, RecordId, StatusError};

/// Record-store failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No record with this id visible to the caller
    #[error("record not found: {0}")]
    NotFound(RecordId),

    /// Record exists but belongs to another owner
    #[error("record {id} is not owned by '{owner}'")]
    OwnerMismatch {
        /// Record id
        id: RecordId,
        /// Owner the caller filtered by
        owner: String,
    },

    /// Record already reached a terminal status; no further mutation
    #[error("record {id} is terminal ({status:?}) and cannot be updated")]
    TerminalRecord {
        /// Record id
        id: RecordId,
        /// Terminal status the record holds
        status: AnalysisStatus,
    },

    /// Patch would perform an illegal status transition
    #[error(transparent)]
    IllegalTransition(#[from] StatusError),

    /// Record rejected at creation
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// Storage backend failure
    #[error("storage backend failure: {0}")]
    Backend(String),
}
