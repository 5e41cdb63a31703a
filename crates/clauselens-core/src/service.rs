//! Request surface
//!
//! Bundles the orchestrators and adapters behind one service whose every
//! operation answers the stable [`ApiResponse`] envelope.

use crate::assist::AssistAdapter;
use crate::comparison::{ComparisonBundle, ComparisonOrchestrator};
use crate::config::OrchestratorConfig;
use crate::orchestrator::{AnalysisOrchestrator, AnalysisRequest};
use crate::response::ApiResponse;
use crate::translation::TranslationAdapter;
use clauselens_domain::AnalysisRecord;
use clauselens_flows::{
    Capabilities, DefinitionOutput, FlowInvoker, QuestionOutput, ReasoningClient,
    TranslationFields,
};
use clauselens_schema::ContractError;
use clauselens_store::RecordStore;
use std::sync::Arc;

/// The ClauseLens request surface
pub struct AnalysisService {
    orchestrator: AnalysisOrchestrator,
    comparison: ComparisonOrchestrator,
    translation: TranslationAdapter,
    assist: AssistAdapter,
}

impl std::fmt::Debug for AnalysisService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisService").finish_non_exhaustive()
    }
}

impl AnalysisService {
    /// Assemble the service from its collaborators
    ///
    /// Compiles every capability contract once; fails only when a
    /// declared schema cannot be compiled.
    pub fn new(
        client: Arc<dyn ReasoningClient>,
        store: Arc<dyn RecordStore>,
        config: OrchestratorConfig,
    ) -> Result<Self, ContractError> {
        let capabilities = Arc::new(Capabilities::declare()?);
        let invoker = FlowInvoker::new(client);
        let source_language = config.capability.source_language.clone();

        Ok(Self {
            orchestrator: AnalysisOrchestrator::new(
                invoker.clone(),
                Arc::clone(&capabilities),
                store,
                config,
            ),
            comparison: ComparisonOrchestrator::new(invoker.clone(), Arc::clone(&capabilities)),
            translation: TranslationAdapter::new(
                invoker.clone(),
                Arc::clone(&capabilities),
                source_language,
            ),
            assist: AssistAdapter::new(invoker, capabilities),
        })
    }

    /// Submit one document for analysis
    pub async fn analyze(&self, request: AnalysisRequest) -> ApiResponse<AnalysisRecord> {
        ApiResponse::from_result(self.orchestrator.run(request).await)
    }

    /// Compare two documents
    pub async fn compare(&self, text_a: &str, text_b: &str) -> ApiResponse<ComparisonBundle> {
        ApiResponse::from_result(self.comparison.compare(text_a, text_b).await)
    }

    /// Translate result fields
    pub async fn translate(
        &self,
        fields: TranslationFields,
        target_language: &str,
    ) -> ApiResponse<TranslationFields> {
        ApiResponse::from_result(self.translation.translate(fields, target_language).await)
    }

    /// Explain one legal term
    pub async fn define(&self, term: &str) -> ApiResponse<DefinitionOutput> {
        ApiResponse::from_result(self.assist.define(term).await)
    }

    /// Answer a follow-up question about a document
    pub async fn ask(&self, document_text: &str, question: &str) -> ApiResponse<QuestionOutput> {
        ApiResponse::from_result(self.assist.ask(document_text, question).await)
    }
}
