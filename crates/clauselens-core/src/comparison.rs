//! Comparison orchestrator
//!
//! Fans out three independent reasoning calls - compare(A,B), detect(A),
//! detect(B) - and joins them with fail-fast, all-or-nothing semantics:
//! the rendered comparison depends referentially on both per-document
//! analyses, so partial success is never surfaced.

use crate::error::AnalysisError;
use clauselens_domain::{
    aggregate, ClauseAssessment, ComparisonResult, ExtractedIdentifiers, RiskVerdict,
};
use clauselens_flows::{Capabilities, ClauseDetectionInput, ComparisonInput, FlowInvoker};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Aggregated per-document view produced during a comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAnalysis {
    /// Document-level verdict
    pub risk_level: RiskVerdict,
    /// Total detected clauses
    pub clause_count: usize,
    /// High-risk clauses
    pub high_risk_clause_count: usize,
    /// Assessments in detection order
    pub clauses: Vec<ClauseAssessment>,
    /// Extracted parties and dates
    pub identifiers: ExtractedIdentifiers,
}

impl DocumentAnalysis {
    fn from_detection(clauses: Vec<ClauseAssessment>, identifiers: ExtractedIdentifiers) -> Self {
        let summary = aggregate(&clauses);
        Self {
            risk_level: summary.overall,
            clause_count: clauses.len(),
            high_risk_clause_count: summary.high_count,
            clauses,
            identifiers,
        }
    }
}

/// Everything one comparison call produces, atomically
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonBundle {
    /// Cross-document comparison
    pub comparison: ComparisonResult,
    /// Analysis of document A
    pub analysis_a: DocumentAnalysis,
    /// Analysis of document B
    pub analysis_b: DocumentAnalysis,
}

/// Three-way fan-out/fan-in comparison
pub struct ComparisonOrchestrator {
    invoker: FlowInvoker,
    capabilities: Arc<Capabilities>,
}

impl std::fmt::Debug for ComparisonOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComparisonOrchestrator").finish_non_exhaustive()
    }
}

impl ComparisonOrchestrator {
    /// Create orchestrator over its collaborators
    #[must_use]
    pub fn new(invoker: FlowInvoker, capabilities: Arc<Capabilities>) -> Self {
        Self {
            invoker,
            capabilities,
        }
    }

    /// Compare two documents
    ///
    /// Precondition: the trimmed texts must differ; identical documents
    /// are rejected with zero external calls. The three calls start
    /// concurrently with no ordering dependency; the join short-circuits
    /// on the first error and suppresses the other branches' results.
    pub async fn compare(
        &self,
        text_a: &str,
        text_b: &str,
    ) -> Result<ComparisonBundle, AnalysisError> {
        let a = text_a.trim();
        let b = text_b.trim();
        if a.is_empty() || b.is_empty() {
            return Err(AnalysisError::Validation(
                "both documents must be non-empty".to_string(),
            ));
        }
        if a == b {
            return Err(AnalysisError::IdenticalDocuments);
        }

        tracing::info!(len_a = a.len(), len_b = b.len(), "comparison started");

        let comparison_input = ComparisonInput {
            text_a: a.to_string(),
            text_b: b.to_string(),
        };
        let detection_a_input = ClauseDetectionInput {
            document_text: a.to_string(),
        };
        let detection_b_input = ClauseDetectionInput {
            document_text: b.to_string(),
        };

        let compare_call = self
            .invoker
            .invoke(&self.capabilities.comparison, &comparison_input);
        let detect_a = self
            .invoker
            .invoke(&self.capabilities.clause_detection, &detection_a_input);
        let detect_b = self
            .invoker
            .invoke(&self.capabilities.clause_detection, &detection_b_input);

        // Structured join: all three settle or the first error wins.
        let (comparison, output_a, output_b) =
            futures::future::try_join3(compare_call, detect_a, detect_b)
                .await
                .map_err(|flow_err| {
                    let err = AnalysisError::from(flow_err);
                    tracing::error!(
                        error = %err,
                        "comparison branch failed; discarding all branches"
                    );
                    err
                })?;

        Ok(ComparisonBundle {
            comparison,
            analysis_a: DocumentAnalysis::from_detection(output_a.clauses, output_a.identifiers),
            analysis_b: DocumentAnalysis::from_detection(output_b.clauses, output_b.identifiers),
        })
    }
}
