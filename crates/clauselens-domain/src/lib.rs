//! ClauseLens Domain - records, clause assessments, risk aggregation
//!
//! The data model shared by every ClauseLens crate:
//! - Analysis records and their lifecycle status machine
//! - Per-clause risk assessments
//! - Document comparison results
//! - The pure risk aggregator

#![warn(unreachable_pub)]

pub mod aggregate;
pub mod status;
pub mod types;

// Re-exports for convenience
pub use aggregate::{aggregate, RiskSummary};
pub use status::{allowed_transitions, validate_transition, StatusError};
pub use types::{
    AnalysisRecord, AnalysisStatus, ClauseAssessment, ClauseRisk, ComparisonResult,
    ExtractedIdentifiers, RecordId, RiskDifference, RiskVerdict,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
