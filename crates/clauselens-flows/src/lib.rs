//! ClauseLens Flows - reasoning capabilities and the schema-validated invoker
//!
//! Declares the five reasoning capabilities with their typed contracts
//! and wraps the transport client in a [`FlowInvoker`] that validates
//! both sides of every call.
//!
//! # Example
//!
//! ```rust,ignore
//! use clauselens_flows::{Capabilities, FlowInvoker, ClauseDetectionInput};
//!
//! # async fn example(client: std::sync::Arc<dyn clauselens_flows::ReasoningClient>)
//! # -> Result<(), Box<dyn std::error::Error>> {
//! let caps = Capabilities::declare()?;
//! let invoker = FlowInvoker::new(client);
//!
//! let output = invoker
//!     .invoke(&caps.clause_detection, &ClauseDetectionInput {
//!         document_text: "This agreement...".into(),
//!     })
//!     .await?;
//! println!("{} clauses", output.clauses.len());
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod capability;
pub mod client;
pub mod error;
pub mod invoker;

// Re-exports for convenience
pub use capability::{
    Capabilities, Capability, ClauseDetectionInput, ClauseDetectionOutput, ComparisonInput,
    DefinitionInput, DefinitionOutput, QuestionInput, QuestionOutput, TranslationFields,
    TranslationInput,
};
pub use client::{ReasoningClient, TransportError};
pub use error::FlowError;
pub use invoker::FlowInvoker;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
