//! Reasoning-service transport seam
//!
//! The orchestration layer never talks to a wire protocol directly; it
//! calls a [`ReasoningClient`] passed in at construction. Retry, backoff,
//! timeout, and cancellation policy all live behind this trait, not in
//! the invoker.

use async_trait::async_trait;
use serde_json::Value;

/// The reasoning-service call itself failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("transport failure calling '{capability}': {message}")]
pub struct TransportError {
    /// Capability being invoked
    pub capability: String,
    /// Transport-level detail
    pub message: String,
}

impl TransportError {
    /// Create transport error for a capability
    #[must_use]
    pub fn new(capability: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            capability: capability.into(),
            message: message.into(),
        }
    }
}

/// One named external reasoning operation
///
/// Implementations issue exactly one call per `call` invocation; payloads
/// are already schema-checked by the invoker on both sides.
#[async_trait]
pub trait ReasoningClient: Send + Sync {
    /// Issue one call to the named capability
    async fn call(&self, capability: &str, input: Value) -> Result<Value, TransportError>;
}
