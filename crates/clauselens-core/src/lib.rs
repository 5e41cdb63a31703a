//! ClauseLens Core - analysis orchestration
//!
//! The orchestration pipeline that:
//! - Drives a document through validate -> persist -> invoke -> aggregate
//! - Fans out three concurrent calls for document comparison and joins
//!   them all-or-nothing
//! - Short-circuits same-language translation
//! - Maps every failure to a stable response envelope
//!
//! # Example
//!
//! ```rust,ignore
//! use clauselens_core::{AnalysisRequest, AnalysisService, OrchestratorConfig};
//!
//! # async fn example(
//! #     client: std::sync::Arc<dyn clauselens_flows::ReasoningClient>,
//! #     store: std::sync::Arc<dyn clauselens_store::RecordStore>,
//! # ) -> Result<(), Box<dyn std::error::Error>> {
//! let service = AnalysisService::new(client, store, OrchestratorConfig::new())?;
//!
//! let response = service
//!     .analyze(AnalysisRequest {
//!         owner_id: "user-1".into(),
//!         label: "NDA draft".into(),
//!         document_text: "This agreement...".into(),
//!     })
//!     .await;
//! assert!(response.success);
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod assist;
pub mod comparison;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod response;
pub mod service;
pub mod translation;

// Re-exports for convenience
pub use assist::AssistAdapter;
pub use comparison::{ComparisonBundle, ComparisonOrchestrator, DocumentAnalysis};
pub use config::{CapabilityConfig, OrchestratorConfig};
pub use error::AnalysisError;
pub use orchestrator::{AnalysisOrchestrator, AnalysisRequest};
pub use response::ApiResponse;
pub use service::AnalysisService;
pub use translation::TranslationAdapter;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with ClauseLens Core
    pub use crate::{
        AnalysisError, AnalysisRequest, AnalysisService, ApiResponse, ComparisonBundle,
        OrchestratorConfig,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
