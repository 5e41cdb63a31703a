//! Flow invoker
//!
//! Wraps one reasoning-service call with pre/post schema validation:
//! validate input (no call issued on failure), issue exactly one call,
//! validate the reply before surfacing it. No retries, no queuing; that
//! policy belongs to the caller or the transport collaborator.

use crate::capability::Capability;
use crate::client::ReasoningClient;
use crate::error::FlowError;
use clauselens_schema::Boundary;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Schema-validated single-call invoker
#[derive(Clone)]
pub struct FlowInvoker {
    client: Arc<dyn ReasoningClient>,
}

impl std::fmt::Debug for FlowInvoker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowInvoker").finish_non_exhaustive()
    }
}

impl FlowInvoker {
    /// Create invoker over a transport client
    #[must_use]
    pub fn new(client: Arc<dyn ReasoningClient>) -> Self {
        Self { client }
    }

    /// Invoke one capability
    ///
    /// Side effect: exactly one outbound call per invocation, and none at
    /// all when the input violates its contract.
    pub async fn invoke<I, O>(
        &self,
        capability: &Capability<I, O>,
        input: &I,
    ) -> Result<O, FlowError>
    where
        I: Serialize + DeserializeOwned + JsonSchema + Sync,
        O: Serialize + DeserializeOwned + JsonSchema,
    {
        let payload = capability
            .input
            .encode(input)
            .map_err(FlowError::InvalidInput)?;
        capability
            .input
            .check(&payload, Boundary::Input)
            .map_err(FlowError::InvalidInput)?;

        tracing::debug!(capability = capability.name(), "issuing reasoning call");
        let raw = self.client.call(capability.name(), payload).await?;

        capability
            .output
            .decode(&raw, Boundary::Output)
            .map_err(|violation| {
                tracing::error!(
                    capability = capability.name(),
                    %violation,
                    "reasoning reply violated its contract"
                );
                FlowError::OutputSchemaViolation(violation)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Capabilities;
    use crate::client::TransportError;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use serde_json::{json, Value};

    /// Replies with a fixed value and counts calls
    struct FixedClient {
        reply: Result<Value, TransportError>,
        calls: Mutex<usize>,
    }

    impl FixedClient {
        fn new(reply: Result<Value, TransportError>) -> Self {
            Self {
                reply,
                calls: Mutex::new(0),
            }
        }

        fn call_count(&self) -> usize {
            *self.calls.lock()
        }
    }

    #[async_trait]
    impl ReasoningClient for FixedClient {
        async fn call(&self, _capability: &str, _input: Value) -> Result<Value, TransportError> {
            *self.calls.lock() += 1;
            self.reply.clone()
        }
    }

    fn detection_input() -> crate::capability::ClauseDetectionInput {
        crate::capability::ClauseDetectionInput {
            document_text: "This agreement...".to_string(),
        }
    }

    #[tokio::test]
    async fn invoke_validates_and_decodes() {
        let client = Arc::new(FixedClient::new(Ok(json!({"clauses": []}))));
        let invoker = FlowInvoker::new(client.clone());
        let caps = Capabilities::declare().unwrap();

        let output = invoker
            .invoke(&caps.clause_detection, &detection_input())
            .await
            .unwrap();

        assert!(output.clauses.is_empty());
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn transport_failure_maps_to_transport_kind() {
        let client = Arc::new(FixedClient::new(Err(TransportError::new(
            "clause-detection",
            "connection reset",
        ))));
        let invoker = FlowInvoker::new(client.clone());
        let caps = Capabilities::declare().unwrap();

        let err = invoker
            .invoke(&caps.clause_detection, &detection_input())
            .await
            .unwrap_err();

        assert!(matches!(err, FlowError::Transport(_)));
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn contract_breaking_reply_is_hard_failure_after_one_call() {
        // Well-formed JSON, wrong shape: the call "succeeded" at the
        // transport level but must not be surfaced or retried.
        let client = Arc::new(FixedClient::new(Ok(json!({"verdict": "fine"}))));
        let invoker = FlowInvoker::new(client.clone());
        let caps = Capabilities::declare().unwrap();

        let err = invoker
            .invoke(&caps.clause_detection, &detection_input())
            .await
            .unwrap_err();

        assert!(matches!(err, FlowError::OutputSchemaViolation(_)));
        assert!(!err.is_retryable());
        assert_eq!(client.call_count(), 1);
    }
}
