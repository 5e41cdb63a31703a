//! Orchestrator configuration
//!
//! Explicit configuration value passed into constructors; never an
//! ambient global, so the state machine can be tested with substitutable
//! fakes.

use serde::{Deserialize, Serialize};

/// Reasoning-capability configuration
///
/// Its presence is a precondition of every analysis: a submission is
/// rejected before any record is created when no model is configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapabilityConfig {
    /// Reasoning model identifier handed to the transport
    pub model: String,
    /// Source language of analysis output (translation short-circuit)
    pub source_language: String,
}

impl CapabilityConfig {
    /// Check that a model is configured
    #[inline]
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.model.trim().is_empty()
    }
}

impl Default for CapabilityConfig {
    fn default() -> Self {
        Self {
            model: "standard".to_string(),
            source_language: "en".to_string(),
        }
    }
}

/// Orchestrator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrchestratorConfig {
    /// Minimum document length in characters, after trimming
    pub min_document_chars: usize,
    /// Reasoning-capability configuration
    pub capability: CapabilityConfig,
}

impl OrchestratorConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With minimum document length
    #[inline]
    #[must_use]
    pub fn with_min_document_chars(mut self, min: usize) -> Self {
        self.min_document_chars = min;
        self
    }

    /// With model identifier
    #[inline]
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.capability.model = model.into();
        self
    }

    /// With source language
    #[inline]
    #[must_use]
    pub fn with_source_language(mut self, language: impl Into<String>) -> Self {
        self.capability.source_language = language.into();
        self
    }
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            min_document_chars: 50,
            capability: CapabilityConfig::default(),
        }
    }
}
