//! Core types for the ClauseLens domain
//!
//! Defines the fundamental records of an analysis:
//! - Analysis records and their lifecycle status
//! - Per-clause risk assessments
//! - Document comparison results

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique analysis record identifier (ULID for sortability)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(pub Ulid);

impl RecordId {
    /// Generate new record ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of an analysis record
///
/// `Pending` exists only before persistence; a stored record is always
/// `Analyzing` or terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalysisStatus {
    /// Accepted but not yet persisted
    Pending,
    /// Persisted, reasoning call in flight
    Analyzing,
    /// Terminal: analysis completed
    Analyzed,
    /// Terminal: analysis failed
    Error,
}

impl AnalysisStatus {
    /// Check whether this status is terminal
    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Analyzed | Self::Error)
    }
}

/// Risk level of a single clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ClauseRisk {
    /// Low risk
    Low,
    /// Medium risk
    Medium,
    /// High risk
    High,
}

/// Document-level risk verdict
///
/// `NotAvailable` is the verdict for records with no clauses and for
/// records that never reached `Analyzed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum RiskVerdict {
    /// At least one high-risk clause
    High,
    /// No high-risk clause, at least one medium
    Medium,
    /// Clauses detected, none above low
    Low,
    /// No verdict (empty clause set or non-analyzed record)
    #[serde(rename = "N/A")]
    NotAvailable,
}

impl Default for RiskVerdict {
    fn default() -> Self {
        Self::NotAvailable
    }
}

/// One detected contract clause with its assessment
///
/// Immutable once produced; `clause_type` is a free-text category label
/// and is not required to be unique within a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClauseAssessment {
    /// Free-text category label (e.g. "Termination", "Indemnity")
    pub clause_type: String,
    /// Verbatim source excerpt
    pub clause_text: String,
    /// Plain-language summary
    pub summary: String,
    /// Assessed risk level
    pub risk_level: ClauseRisk,
    /// Why this risk level was assigned
    pub risk_reason: String,
    /// Suggested action for the reader
    pub recommendation: String,
}

impl ClauseAssessment {
    /// Create new clause assessment
    #[must_use]
    pub fn new(
        clause_type: impl Into<String>,
        clause_text: impl Into<String>,
        risk_level: ClauseRisk,
    ) -> Self {
        Self {
            clause_type: clause_type.into(),
            clause_text: clause_text.into(),
            summary: String::new(),
            risk_level,
            risk_reason: String::new(),
            recommendation: String::new(),
        }
    }

    /// With summary
    #[inline]
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// With risk reason
    #[inline]
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.risk_reason = reason.into();
        self
    }

    /// With recommendation
    #[inline]
    #[must_use]
    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = recommendation.into();
        self
    }
}

/// Identifiers extracted from the document alongside its clauses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExtractedIdentifiers {
    /// Party names found in the document
    pub parties: Vec<String>,
    /// Dates found in the document
    pub dates: Vec<String>,
}

/// One analysis record
///
/// Created once at submission with status `Analyzing`, mutated exactly
/// once more to a terminal status, never mutated after that (deletion is
/// an out-of-scope collaborator concern).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    /// Record identifier
    pub id: RecordId,
    /// Owner identifier (scopes every mutation)
    pub owner_id: String,
    /// Document label shown to the user
    pub label: String,
    /// Lifecycle status
    pub status: AnalysisStatus,
    /// Document-level verdict; meaningful only when status is `Analyzed`
    pub risk_level: RiskVerdict,
    /// Total detected clauses
    pub clause_count: usize,
    /// High-risk clauses (invariant: `high_risk_clause_count <= clause_count`)
    pub high_risk_clause_count: usize,
    /// Clause assessments in detection order
    pub clauses: Vec<ClauseAssessment>,
    /// Parties and dates extracted from the document
    pub identifiers: ExtractedIdentifiers,
    /// Failure detail; set only when status is `Error`
    pub error_detail: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Terminal timestamp
    pub finished_at: Option<DateTime<Utc>>,
}

impl AnalysisRecord {
    /// Create a fresh record in the `Analyzing` state
    #[must_use]
    pub fn analyzing(owner_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: RecordId::new(),
            owner_id: owner_id.into(),
            label: label.into(),
            status: AnalysisStatus::Analyzing,
            risk_level: RiskVerdict::NotAvailable,
            clause_count: 0,
            high_risk_clause_count: 0,
            clauses: Vec::new(),
            identifiers: ExtractedIdentifiers::default(),
            error_detail: None,
            created_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Check the count invariant
    #[inline]
    #[must_use]
    pub fn counts_consistent(&self) -> bool {
        self.high_risk_clause_count <= self.clause_count
    }
}

/// Risk difference for a clause present in both compared documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RiskDifference {
    /// Clause label present in both documents
    pub clause_label: String,
    /// Risk in document A
    pub risk_a: ClauseRisk,
    /// Risk in document B
    pub risk_b: ClauseRisk,
    /// Reason given for document A
    pub reason_a: String,
    /// Reason given for document B
    pub reason_b: String,
}

/// Result of comparing two documents
///
/// Produced atomically by the comparison capability; never partially
/// populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// Narrative of the differences between the documents
    pub summary_diff: String,
    /// Summary of document A
    pub summary_a: String,
    /// Summary of document B
    pub summary_b: String,
    /// Clause labels present only in document B
    pub added_clauses: Vec<String>,
    /// Clause labels present only in document A
    pub removed_clauses: Vec<String>,
    /// Clauses present in both with differing risk
    pub risk_differences: Vec<RiskDifference>,
}
