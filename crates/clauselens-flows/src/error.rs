//! Error types for flow invocation
//!
//! Every boundary-crossing outcome of one reasoning call:
//! - input rejected before any network activity
//! - the call itself failed at the transport level
//! - the reply does not match its declared contract

use crate::client::TransportError;
use clauselens_schema::ContractViolation;

/// One reasoning call failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    /// Input rejected; no call was issued
    #[error("input rejected: {0}")]
    InvalidInput(ContractViolation),

    /// Transport-level failure
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The call succeeded but the reply violates its contract; never
    /// retried automatically
    #[error("output schema violation: {0}")]
    OutputSchemaViolation(ContractViolation),
}

impl FlowError {
    /// Check whether retrying could ever help
    ///
    /// Only transport failures are retry candidates; contract violations
    /// on either boundary are hard failures.
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clauselens_schema::Boundary;

    fn violation(boundary: Boundary) -> ContractViolation {
        ContractViolation {
            contract: "clause-detection.output".to_string(),
            boundary,
            detail: "missing field".to_string(),
        }
    }

    #[test]
    fn only_transport_is_retryable() {
        assert!(FlowError::Transport(TransportError::new("comparison", "timeout")).is_retryable());
        assert!(!FlowError::InvalidInput(violation(Boundary::Input)).is_retryable());
        assert!(!FlowError::OutputSchemaViolation(violation(Boundary::Output)).is_retryable());
    }
}
