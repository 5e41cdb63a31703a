//! Analysis orchestrator
//!
//! Drives one document through the full lifecycle:
//! validate -> create record -> invoke clause detection -> aggregate ->
//! terminal update. Within one `run` the steps are strictly sequential;
//! concurrent `run` invocations are fully independent.

use crate::config::OrchestratorConfig;
use crate::error::AnalysisError;
use clauselens_domain::{aggregate, AnalysisRecord};
use clauselens_flows::{Capabilities, ClauseDetectionInput, FlowInvoker};
use clauselens_store::{RecordPatch, RecordStore};
use std::sync::Arc;

/// One analysis submission
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Owner identifier; scopes every record mutation
    pub owner_id: String,
    /// Document label shown to the user
    pub label: String,
    /// Full document text
    pub document_text: String,
}

/// The analysis lifecycle state machine
///
/// Collaborators are passed in explicitly so the state machine can run
/// against substitutable fakes.
pub struct AnalysisOrchestrator {
    invoker: FlowInvoker,
    capabilities: Arc<Capabilities>,
    store: Arc<dyn RecordStore>,
    config: OrchestratorConfig,
}

impl std::fmt::Debug for AnalysisOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisOrchestrator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AnalysisOrchestrator {
    /// Create orchestrator over its collaborators
    #[must_use]
    pub fn new(
        invoker: FlowInvoker,
        capabilities: Arc<Capabilities>,
        store: Arc<dyn RecordStore>,
        config: OrchestratorConfig,
    ) -> Self {
        Self {
            invoker,
            capabilities,
            store,
            config,
        }
    }

    /// Get configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Run one analysis
    ///
    /// # Lifecycle
    /// 1. Preconditions; violation returns before any record or call.
    /// 2. Create the record as `Analyzing`; a create failure aborts the
    ///    whole operation (never invoke without a tracking record).
    /// 3. Invoke clause detection; on failure the record is best-effort
    ///    moved to `Error` and the failure is returned either way.
    /// 4. Aggregate and attempt the terminal `Analyzed` update.
    /// 5. A failing terminal update is logged, not escalated: the caller
    ///    still receives the in-memory result (the stored record may
    ///    remain stuck at `Analyzing` - an accepted reconciliation gap).
    pub async fn run(&self, request: AnalysisRequest) -> Result<AnalysisRecord, AnalysisError> {
        self.check_preconditions(&request)?;

        let record = AnalysisRecord::analyzing(&request.owner_id, &request.label);
        let record = self.store.create(record).await?;
        tracing::info!(record_id = %record.id, label = %record.label, "analysis started");

        let detection = self
            .invoker
            .invoke(
                &self.capabilities.clause_detection,
                &ClauseDetectionInput {
                    document_text: request.document_text,
                },
            )
            .await;

        let output = match detection {
            Ok(output) => output,
            Err(flow_err) => {
                let analysis_err = AnalysisError::from(flow_err);
                tracing::error!(record_id = %record.id, error = %analysis_err, "analysis failed");
                let patch = RecordPatch::Errored {
                    error_detail: analysis_err.to_string(),
                };
                // Best effort: the caller gets the original failure even
                // when this update cannot be persisted.
                if let Err(store_err) = self
                    .store
                    .update(record.id, patch, &record.owner_id)
                    .await
                {
                    tracing::warn!(
                        record_id = %record.id,
                        error = %store_err,
                        "could not persist failure status"
                    );
                }
                return Err(analysis_err);
            }
        };

        let summary = aggregate(&output.clauses);
        tracing::info!(
            record_id = %record.id,
            clause_count = output.clauses.len(),
            high_count = summary.high_count,
            verdict = ?summary.overall,
            "analysis completed"
        );

        let patch = RecordPatch::Analyzed {
            risk_level: summary.overall,
            clause_count: output.clauses.len(),
            high_risk_clause_count: summary.high_count,
            clauses: output.clauses,
            identifiers: output.identifiers,
        };

        // The in-memory result is authoritative for the caller; counts
        // come from the aggregator, so applying the patch locally cannot
        // violate the record invariants.
        let mut analyzed = record.clone();
        patch.clone().apply(&mut analyzed)?;

        match self.store.update(record.id, patch, &record.owner_id).await {
            Ok(stored) => Ok(stored),
            Err(store_err) => {
                tracing::warn!(
                    record_id = %record.id,
                    error = %store_err,
                    "terminal update failed; stored record may remain Analyzing"
                );
                Ok(analyzed)
            }
        }
    }

    fn check_preconditions(&self, request: &AnalysisRequest) -> Result<(), AnalysisError> {
        let trimmed = request.document_text.trim();
        if trimmed.is_empty() {
            return Err(AnalysisError::Validation(
                "document text is empty".to_string(),
            ));
        }
        let length = trimmed.chars().count();
        if length < self.config.min_document_chars {
            return Err(AnalysisError::Validation(format!(
                "document too short: {length} characters, minimum {}",
                self.config.min_document_chars
            )));
        }
        if !self.config.capability.is_configured() {
            return Err(AnalysisError::Validation(
                "reasoning capability is not configured".to_string(),
            ));
        }
        Ok(())
    }
}
