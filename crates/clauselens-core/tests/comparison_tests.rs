//! Comparison fan-out/fan-in integration tests
//!
//! The three branches have no ordering dependency; the join is fail-fast
//! and all-or-nothing.

use clauselens_core::{AnalysisError, ComparisonOrchestrator};
use clauselens_domain::{ClauseRisk, RiskVerdict};
use clauselens_flows::{Capabilities, FlowInvoker, TransportError};
use clauselens_test_utils::{comparison_reply, detection_reply, ScriptedClient};
use std::sync::Arc;

fn orchestrator(client: Arc<ScriptedClient>) -> ComparisonOrchestrator {
    let capabilities = Arc::new(Capabilities::declare().unwrap());
    ComparisonOrchestrator::new(FlowInvoker::new(client), capabilities)
}

const DOC_A: &str = "This mutual NDA binds Acme Corp and Beta LLC to confidentiality.";
const DOC_B: &str = "This mutual NDA binds Acme Corp and Beta LLC, with arbitration.";

#[tokio::test]
async fn identical_documents_rejected_with_zero_calls() {
    let client = Arc::new(ScriptedClient::new());
    let orch = orchestrator(client.clone());

    let err = orch
        .compare(DOC_A, &format!("  {DOC_A}\n"))
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::IdenticalDocuments));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn empty_document_rejected_with_zero_calls() {
    let client = Arc::new(ScriptedClient::new());
    let orch = orchestrator(client.clone());

    let err = orch.compare(DOC_A, "   ").await.unwrap_err();
    assert!(matches!(err, AnalysisError::Validation(_)));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn all_branches_succeeding_yields_full_bundle() {
    let client = Arc::new(ScriptedClient::new());
    client.enqueue("comparison", Ok(comparison_reply()));
    client.enqueue(
        "clause-detection",
        Ok(detection_reply(&[ClauseRisk::High, ClauseRisk::Low])),
    );
    client.enqueue("clause-detection", Ok(detection_reply(&[ClauseRisk::Low])));
    let orch = orchestrator(client.clone());

    let bundle = orch.compare(DOC_A, DOC_B).await.unwrap();

    assert_eq!(bundle.comparison.added_clauses, vec!["Arbitration"]);
    assert_eq!(bundle.analysis_a.risk_level, RiskVerdict::High);
    assert_eq!(bundle.analysis_a.high_risk_clause_count, 1);
    assert_eq!(bundle.analysis_b.risk_level, RiskVerdict::Low);
    assert_eq!(bundle.analysis_b.clause_count, 1);

    assert_eq!(client.calls_to("comparison"), 1);
    assert_eq!(client.calls_to("clause-detection"), 2);
}

#[tokio::test]
async fn one_failing_branch_suppresses_both_successful_branches() {
    let client = Arc::new(ScriptedClient::new());
    client.enqueue("comparison", Ok(comparison_reply()));
    client.enqueue("clause-detection", Ok(detection_reply(&[ClauseRisk::Low])));
    client.enqueue(
        "clause-detection",
        Err(TransportError::new("clause-detection", "branch down")),
    );
    let orch = orchestrator(client.clone());

    let err = orch.compare(DOC_A, DOC_B).await.unwrap_err();

    // Two branches succeeded, but nothing of them is surfaced
    assert!(matches!(err, AnalysisError::Transport(_)));
    assert_eq!(client.call_count(), 3);
}

#[tokio::test]
async fn contract_breaking_comparison_reply_fails_the_whole_operation() {
    let client = Arc::new(ScriptedClient::new());
    client.enqueue("comparison", Ok(serde_json::json!({"unexpected": true})));
    client.repeat("clause-detection", Ok(detection_reply(&[ClauseRisk::Low])));
    let orch = orchestrator(client);

    let err = orch.compare(DOC_A, DOC_B).await.unwrap_err();
    assert!(matches!(err, AnalysisError::OutputSchemaViolation { .. }));
}
