//! Error types for schema contracts
//!
//! Distinguishes the boundary a violation occurred on: input violations
//! reject a call before any network activity, output violations mean the
//! service replied with well-formed but contractually wrong data.

/// Which side of a capability call a value was checked on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Value supplied by the caller, checked before the call is issued
    Input,
    /// Value returned by the service, checked before it is surfaced
    Output,
}

impl std::fmt::Display for Boundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Output => write!(f, "output"),
        }
    }
}

/// A value failed its declared shape
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("contract '{contract}' violated at {boundary} boundary: {detail}")]
pub struct ContractViolation {
    /// Contract name
    pub contract: String,
    /// Boundary the violation occurred on
    pub boundary: Boundary,
    /// Validator detail
    pub detail: String,
}

impl ContractViolation {
    /// Check whether this violation occurred on the output boundary
    #[inline]
    #[must_use]
    pub fn is_output(&self) -> bool {
        self.boundary == Boundary::Output
    }
}

/// Contract construction failed
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// Deriving the JSON schema from the Rust type failed
    #[error("schema derivation failed for '{contract}': {detail}")]
    SchemaDerivation {
        /// Contract name
        contract: String,
        /// Underlying detail
        detail: String,
    },

    /// Compiling the derived schema failed
    #[error("schema compilation failed for '{contract}': {detail}")]
    Compile {
        /// Contract name
        contract: String,
        /// Underlying detail
        detail: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_display_names_boundary() {
        let violation = ContractViolation {
            contract: "clause-detection.output".to_string(),
            boundary: Boundary::Output,
            detail: "missing field".to_string(),
        };
        let text = violation.to_string();
        assert!(text.contains("output boundary"));
        assert!(violation.is_output());
    }
}
