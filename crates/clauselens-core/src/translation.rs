//! Translation adapter
//!
//! Single-call adapter over the translation capability with an identity
//! short-circuit: when the target language equals the source language the
//! fields come back unchanged and no external call is issued.

use crate::error::AnalysisError;
use clauselens_flows::{Capabilities, FlowInvoker, TranslationFields, TranslationInput};
use std::sync::Arc;

/// Translates the three user-facing result fields
pub struct TranslationAdapter {
    invoker: FlowInvoker,
    capabilities: Arc<Capabilities>,
    source_language: String,
}

impl std::fmt::Debug for TranslationAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationAdapter")
            .field("source_language", &self.source_language)
            .finish_non_exhaustive()
    }
}

impl TranslationAdapter {
    /// Create adapter; `source_language` is the language analysis output
    /// is produced in
    #[must_use]
    pub fn new(
        invoker: FlowInvoker,
        capabilities: Arc<Capabilities>,
        source_language: impl Into<String>,
    ) -> Self {
        Self {
            invoker,
            capabilities,
            source_language: source_language.into(),
        }
    }

    /// Translate result fields into `target_language`
    ///
    /// Identity when target equals source (case-insensitive): no call is
    /// issued and the fields are returned unchanged.
    pub async fn translate(
        &self,
        fields: TranslationFields,
        target_language: &str,
    ) -> Result<TranslationFields, AnalysisError> {
        if target_language.eq_ignore_ascii_case(&self.source_language) {
            tracing::debug!(
                language = target_language,
                "translation short-circuit: target equals source"
            );
            return Ok(fields);
        }

        let translated = self
            .invoker
            .invoke(
                &self.capabilities.translation,
                &TranslationInput {
                    fields,
                    target_language: target_language.to_string(),
                },
            )
            .await?;
        Ok(translated)
    }
}
