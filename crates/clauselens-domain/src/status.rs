//! Record-status state machine
//!
//! A record moves `Pending -> Analyzing -> {Analyzed, Error}`. Terminal
//! states allow no further transitions; a new submission always creates a
//! new record rather than reviving an old one.

use crate::types::AnalysisStatus;

/// Illegal status transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("illegal status transition: {from:?} -> {to:?}")]
pub struct StatusError {
    /// Current status
    pub from: AnalysisStatus,
    /// Requested status
    pub to: AnalysisStatus,
}

/// Validates a status transition.
pub fn validate_transition(
    from: AnalysisStatus,
    to: AnalysisStatus,
) -> Result<(), StatusError> {
    if allowed(from, to) {
        Ok(())
    } else {
        Err(StatusError { from, to })
    }
}

/// Statuses reachable in one step from `from`
#[must_use]
pub fn allowed_transitions(from: AnalysisStatus) -> Vec<AnalysisStatus> {
    use AnalysisStatus::*;
    match from {
        Pending => vec![Analyzing],
        Analyzing => vec![Analyzed, Error],
        Analyzed => vec![],
        Error => vec![],
    }
}

fn allowed(from: AnalysisStatus, to: AnalysisStatus) -> bool {
    allowed_transitions(from).into_iter().any(|s| s == to)
}
