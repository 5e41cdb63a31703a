//! Error taxonomy for the orchestration layer
//!
//! Every boundary-crossing failure of an analysis or comparison:
//! - bad or too-short input, rejected before any record or call
//! - identical comparison inputs, rejected before any call
//! - transport failure of the reasoning service
//! - contractually wrong reply (never retried)
//! - persistence failure of the record store
//!
//! All variants are recovered at the service boundary into the stable
//! `{success, error}` response shape; none escape as a fault.

use clauselens_flows::FlowError;
use clauselens_store::StoreError;

/// Orchestration failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// Bad or too-short input; no record created, no network activity
    #[error("validation failed: {0}")]
    Validation(String),

    /// Comparison inputs identical after trimming; zero calls issued
    #[error("documents are identical after trimming")]
    IdenticalDocuments,

    /// The reasoning-service call itself failed
    #[error("reasoning transport failure: {0}")]
    Transport(String),

    /// The call succeeded but the reply violates its declared contract
    #[error("output schema violation in '{capability}': {detail}")]
    OutputSchemaViolation {
        /// Contract that was violated
        capability: String,
        /// Validator detail
        detail: String,
    },

    /// Record store failure
    #[error("persistence failure: {0}")]
    Persistence(#[from] StoreError),
}

impl From<FlowError> for AnalysisError {
    fn from(err: FlowError) -> Self {
        match err {
            FlowError::InvalidInput(violation) => Self::Validation(violation.to_string()),
            FlowError::Transport(transport) => Self::Transport(transport.to_string()),
            FlowError::OutputSchemaViolation(violation) => Self::OutputSchemaViolation {
                capability: violation.contract,
                detail: violation.detail,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clauselens_flows::TransportError;
    use clauselens_schema::{Boundary, ContractViolation};

    #[test]
    fn flow_error_kinds_preserved() {
        let transport: AnalysisError =
            FlowError::Transport(TransportError::new("comparison", "timeout")).into();
        assert!(matches!(transport, AnalysisError::Transport(_)));

        let schema: AnalysisError = FlowError::OutputSchemaViolation(ContractViolation {
            contract: "clause-detection.output".to_string(),
            boundary: Boundary::Output,
            detail: "missing clauses".to_string(),
        })
        .into();
        assert!(matches!(
            schema,
            AnalysisError::OutputSchemaViolation { ref capability, .. }
                if capability == "clause-detection.output"
        ));
    }
}
