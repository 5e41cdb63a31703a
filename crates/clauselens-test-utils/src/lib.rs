//! Testing utilities for the ClauseLens workspace
//!
//! Shared fakes and fixtures: a scripted reasoning client that records
//! every call, stores that fail on demand, and clause builders.

#![allow(missing_docs)]

use async_trait::async_trait;
use clauselens_core::{AnalysisService, OrchestratorConfig};
use clauselens_domain::{
    AnalysisRecord, ClauseAssessment, ClauseRisk, ComparisonResult, ExtractedIdentifiers, RecordId,
};
use clauselens_flows::{ClauseDetectionOutput, ReasoningClient, TransportError};
use clauselens_store::{MemoryStore, RecordPatch, RecordStore, StoreError};
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

/// Reasoning client that replays scripted replies and records every call.
///
/// Replies queued with [`ScriptedClient::enqueue`] are consumed in order
/// per capability; [`ScriptedClient::repeat`] installs a fallback used
/// once the queue is drained.
#[derive(Default)]
pub struct ScriptedClient {
    queues: Mutex<HashMap<String, VecDeque<Result<Value, TransportError>>>>,
    repeats: Mutex<HashMap<String, Result<Value, TransportError>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&self, capability: &str, reply: Result<Value, TransportError>) {
        self.queues
            .lock()
            .entry(capability.to_string())
            .or_default()
            .push_back(reply);
    }

    pub fn repeat(&self, capability: &str, reply: Result<Value, TransportError>) {
        self.repeats.lock().insert(capability.to_string(), reply);
    }

    /// Total calls issued, across all capabilities
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Calls issued to one capability
    pub fn calls_to(&self, capability: &str) -> usize {
        self.calls.lock().iter().filter(|c| *c == capability).count()
    }
}

#[async_trait]
impl ReasoningClient for ScriptedClient {
    async fn call(&self, capability: &str, _input: Value) -> Result<Value, TransportError> {
        self.calls.lock().push(capability.to_string());
        if let Some(reply) = self
            .queues
            .lock()
            .get_mut(capability)
            .and_then(VecDeque::pop_front)
        {
            return reply;
        }
        if let Some(reply) = self.repeats.lock().get(capability) {
            return reply.clone();
        }
        Err(TransportError::new(
            capability,
            "no scripted reply for this capability",
        ))
    }
}

/// Store that can be told to refuse creates or updates
///
/// Wraps a [`MemoryStore`] so tests can observe what was (and was not)
/// persisted around the injected failure.
#[derive(Debug, Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    fail_create: Mutex<bool>,
    fail_update: Mutex<bool>,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_create(&self, fail: bool) {
        *self.fail_create.lock() = fail;
    }

    pub fn fail_update(&self, fail: bool) {
        *self.fail_update.lock() = fail;
    }

    pub fn inner(&self) -> &MemoryStore {
        &self.inner
    }
}

#[async_trait]
impl RecordStore for FlakyStore {
    async fn create(&self, record: AnalysisRecord) -> Result<AnalysisRecord, StoreError> {
        if *self.fail_create.lock() {
            return Err(StoreError::Backend("create refused by test store".to_string()));
        }
        self.inner.create(record).await
    }

    async fn update(
        &self,
        id: RecordId,
        patch: RecordPatch,
        owner_filter: &str,
    ) -> Result<AnalysisRecord, StoreError> {
        if *self.fail_update.lock() {
            return Err(StoreError::Backend("update refused by test store".to_string()));
        }
        self.inner.update(id, patch, owner_filter).await
    }

    async fn get(&self, id: RecordId, owner_filter: &str) -> Result<AnalysisRecord, StoreError> {
        self.inner.get(id, owner_filter).await
    }
}

pub fn clause_with_risk(risk: ClauseRisk) -> ClauseAssessment {
    ClauseAssessment::new("Liability", "The party shall be liable...", risk)
        .with_summary("Liability allocation")
        .with_reason("Scope of exposure")
        .with_recommendation("Review with counsel")
}

pub fn detection_reply(risks: &[ClauseRisk]) -> Value {
    let output = ClauseDetectionOutput {
        clauses: risks.iter().copied().map(clause_with_risk).collect(),
        identifiers: ExtractedIdentifiers {
            parties: vec!["Acme Corp".to_string(), "Beta LLC".to_string()],
            dates: vec!["2026-01-01".to_string()],
        },
    };
    serde_json::to_value(output).expect("detection output serializes")
}

pub fn comparison_reply() -> Value {
    serde_json::to_value(ComparisonResult {
        summary_diff: "Document B adds an arbitration clause".to_string(),
        summary_a: "Standard mutual NDA".to_string(),
        summary_b: "Mutual NDA with arbitration".to_string(),
        added_clauses: vec!["Arbitration".to_string()],
        removed_clauses: vec![],
        risk_differences: vec![],
    })
    .expect("comparison result serializes")
}

/// A valid submission body comfortably above the 50-character floor
pub fn long_document() -> String {
    "This agreement is entered into by and between Acme Corp and Beta LLC, \
     effective as of the date of last signature below."
        .to_string()
}

/// A 40-character submission body, below the 50-character floor
pub fn short_document() -> String {
    "Brief two-party agreement, nothing more.".to_string()
}

pub fn setup_service(
    client: Arc<ScriptedClient>,
    store: Arc<dyn RecordStore>,
) -> AnalysisService {
    AnalysisService::new(client, store, OrchestratorConfig::new())
        .expect("capability contracts compile")
}
