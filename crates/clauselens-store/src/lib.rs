//! ClauseLens Store - record persistence contract
//!
//! The orchestrator consumes exactly two operations: create a record at
//! submission and update it once to a terminal status, always scoped by
//! owner. [`MemoryStore`] is the in-process implementation; remote
//! backends implement the same trait.

#![warn(unreachable_pub)]

pub mod error;
pub mod memory;
pub mod patch;

use async_trait::async_trait;
use clauselens_domain::{AnalysisRecord, RecordId};

// Re-exports for convenience
pub use error::StoreError;
pub use memory::MemoryStore;
pub use patch::RecordPatch;

/// Record persistence seam consumed by the orchestrator
///
/// Every mutation is scoped by (record id, owner id); records are
/// independent, so no cross-record coordination is required.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persist a freshly created record (status must be `Analyzing`)
    async fn create(&self, record: AnalysisRecord) -> Result<AnalysisRecord, StoreError>;

    /// Apply the single terminal patch to a record owned by `owner_filter`
    async fn update(
        &self,
        id: RecordId,
        patch: RecordPatch,
        owner_filter: &str,
    ) -> Result<AnalysisRecord, StoreError>;

    /// Fetch a record owned by `owner_filter`
    async fn get(&self, id: RecordId, owner_filter: &str) -> Result<AnalysisRecord, StoreError>;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
