//! Terminal record patches
//!
//! A record is mutated exactly once after creation, to one of the two
//! terminal statuses. The patch carries everything that terminal write
//! needs; applying it validates the status transition and stamps the
//! terminal timestamp.

use crate::error::StoreError;
use chrono::Utc;
use clauselens_domain::{
    validate_transition, AnalysisRecord, AnalysisStatus, ClauseAssessment, ExtractedIdentifiers,
    RiskVerdict,
};

/// The single terminal mutation of an analysis record
#[derive(Debug, Clone)]
pub enum RecordPatch {
    /// Analysis completed
    Analyzed {
        /// Document-level verdict
        risk_level: RiskVerdict,
        /// Total detected clauses
        clause_count: usize,
        /// High-risk clauses
        high_risk_clause_count: usize,
        /// Assessments in detection order
        clauses: Vec<ClauseAssessment>,
        /// Extracted parties and dates
        identifiers: ExtractedIdentifiers,
    },
    /// Analysis failed
    Errored {
        /// Captured failure message
        error_detail: String,
    },
}

impl RecordPatch {
    /// Status this patch moves the record to
    #[inline]
    #[must_use]
    pub fn target_status(&self) -> AnalysisStatus {
        match self {
            Self::Analyzed { .. } => AnalysisStatus::Analyzed,
            Self::Errored { .. } => AnalysisStatus::Error,
        }
    }

    /// Apply this patch to a record
    ///
    /// Refuses terminal records and illegal transitions; on success the
    /// record carries its terminal timestamp.
    pub fn apply(self, record: &mut AnalysisRecord) -> Result<(), StoreError> {
        if record.status.is_terminal() {
            return Err(StoreError::TerminalRecord {
                id: record.id,
                status: record.status,
            });
        }
        validate_transition(record.status, self.target_status())?;

        match self {
            Self::Analyzed {
                risk_level,
                clause_count,
                high_risk_clause_count,
                clauses,
                identifiers,
            } => {
                if high_risk_clause_count > clause_count {
                    return Err(StoreError::InvalidRecord(format!(
                        "high-risk count {high_risk_clause_count} exceeds clause count {clause_count}"
                    )));
                }
                record.status = AnalysisStatus::Analyzed;
                record.risk_level = risk_level;
                record.clause_count = clause_count;
                record.high_risk_clause_count = high_risk_clause_count;
                record.clauses = clauses;
                record.identifiers = identifiers;
            }
            Self::Errored { error_detail } => {
                record.status = AnalysisStatus::Error;
                record.error_detail = Some(error_detail);
            }
        }
        record.finished_at = Some(Utc::now());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clauselens_domain::ClauseRisk;

    fn analyzed_patch() -> RecordPatch {
        RecordPatch::Analyzed {
            risk_level: RiskVerdict::High,
            clause_count: 1,
            high_risk_clause_count: 1,
            clauses: vec![ClauseAssessment::new("Indemnity", "...", ClauseRisk::High)],
            identifiers: ExtractedIdentifiers::default(),
        }
    }

    #[test]
    fn analyzed_patch_completes_record() {
        let mut record = AnalysisRecord::analyzing("owner", "doc");
        analyzed_patch().apply(&mut record).unwrap();

        assert_eq!(record.status, AnalysisStatus::Analyzed);
        assert_eq!(record.risk_level, RiskVerdict::High);
        assert_eq!(record.clause_count, 1);
        assert!(record.finished_at.is_some());
        assert!(record.error_detail.is_none());
    }

    #[test]
    fn errored_patch_leaves_verdict_unset() {
        let mut record = AnalysisRecord::analyzing("owner", "doc");
        RecordPatch::Errored {
            error_detail: "transport failure".to_string(),
        }
        .apply(&mut record)
        .unwrap();

        assert_eq!(record.status, AnalysisStatus::Error);
        assert_eq!(record.risk_level, RiskVerdict::NotAvailable);
        assert_eq!(record.error_detail.as_deref(), Some("transport failure"));
    }

    #[test]
    fn terminal_record_refuses_second_patch() {
        let mut record = AnalysisRecord::analyzing("owner", "doc");
        analyzed_patch().apply(&mut record).unwrap();

        let err = RecordPatch::Errored {
            error_detail: "late".to_string(),
        }
        .apply(&mut record)
        .unwrap_err();
        assert!(matches!(err, StoreError::TerminalRecord { .. }));
    }

    #[test]
    fn count_invariant_enforced() {
        let mut record = AnalysisRecord::analyzing("owner", "doc");
        let err = RecordPatch::Analyzed {
            risk_level: RiskVerdict::High,
            clause_count: 1,
            high_risk_clause_count: 2,
            clauses: vec![],
            identifiers: ExtractedIdentifiers::default(),
        }
        .apply(&mut record)
        .unwrap_err();
        assert!(matches!(err, StoreError::InvalidRecord(_)));
    }
}
