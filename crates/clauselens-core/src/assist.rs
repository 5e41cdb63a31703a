//! Definition and question-answering adapters
//!
//! Thin single-call adapters over the glossary and follow-up capabilities.
//! Each checks its own preconditions before issuing the call; neither
//! touches the record store.

use crate::error::AnalysisError;
use clauselens_flows::{
    Capabilities, DefinitionInput, DefinitionOutput, FlowInvoker, QuestionInput, QuestionOutput,
};
use std::sync::Arc;

/// Glossary and follow-up Q&A over an analyzed document
pub struct AssistAdapter {
    invoker: FlowInvoker,
    capabilities: Arc<Capabilities>,
}

impl std::fmt::Debug for AssistAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssistAdapter").finish_non_exhaustive()
    }
}

impl AssistAdapter {
    /// Create adapter over its collaborators
    #[must_use]
    pub fn new(invoker: FlowInvoker, capabilities: Arc<Capabilities>) -> Self {
        Self {
            invoker,
            capabilities,
        }
    }

    /// Explain one legal term in plain language
    pub async fn define(&self, term: &str) -> Result<DefinitionOutput, AnalysisError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(AnalysisError::Validation("term is empty".to_string()));
        }
        let output = self
            .invoker
            .invoke(
                &self.capabilities.definition,
                &DefinitionInput {
                    term: term.to_string(),
                },
            )
            .await?;
        Ok(output)
    }

    /// Answer a follow-up question about a document
    pub async fn ask(
        &self,
        document_text: &str,
        question: &str,
    ) -> Result<QuestionOutput, AnalysisError> {
        if document_text.trim().is_empty() {
            return Err(AnalysisError::Validation(
                "document text is empty".to_string(),
            ));
        }
        let question = question.trim();
        if question.is_empty() {
            return Err(AnalysisError::Validation("question is empty".to_string()));
        }
        let output = self
            .invoker
            .invoke(
                &self.capabilities.question_answering,
                &QuestionInput {
                    document_text: document_text.to_string(),
                    question: question.to_string(),
                },
            )
            .await?;
        Ok(output)
    }
}
