//! Risk aggregation
//!
//! Turns a set of clause assessments into a document-level verdict.
//! Total, deterministic, O(n), no side effects.

use crate::types::{ClauseAssessment, ClauseRisk, RiskVerdict};

/// Aggregated verdict for one document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskSummary {
    /// Document-level verdict
    pub overall: RiskVerdict,
    /// Number of high-risk clauses, regardless of verdict
    pub high_count: usize,
}

/// Aggregate clause assessments into a document verdict.
///
/// Priority order: any High clause makes the document High; otherwise any
/// Medium makes it Medium; otherwise a non-empty clause set is Low; an
/// empty set has no verdict (`NotAvailable`).
#[must_use]
pub fn aggregate(clauses: &[ClauseAssessment]) -> RiskSummary {
    let high_count = clauses
        .iter()
        .filter(|c| c.risk_level == ClauseRisk::High)
        .count();

    let overall = if high_count > 0 {
        RiskVerdict::High
    } else if clauses.iter().any(|c| c.risk_level == ClauseRisk::Medium) {
        RiskVerdict::Medium
    } else if !clauses.is_empty() {
        RiskVerdict::Low
    } else {
        RiskVerdict::NotAvailable
    };

    RiskSummary { overall, high_count }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn clause(risk: ClauseRisk) -> ClauseAssessment {
        ClauseAssessment::new("Generic", "...", risk)
    }

    #[test]
    fn empty_set_has_no_verdict() {
        let summary = aggregate(&[]);
        assert_eq!(summary.overall, RiskVerdict::NotAvailable);
        assert_eq!(summary.high_count, 0);
    }

    #[test]
    fn single_high_dominates() {
        let clauses = vec![
            clause(ClauseRisk::High),
            clause(ClauseRisk::Medium),
            clause(ClauseRisk::Low),
        ];
        let summary = aggregate(&clauses);
        assert_eq!(summary.overall, RiskVerdict::High);
        assert_eq!(summary.high_count, 1);
    }

    #[test]
    fn medium_without_high() {
        let clauses = vec![clause(ClauseRisk::Low), clause(ClauseRisk::Medium)];
        assert_eq!(aggregate(&clauses).overall, RiskVerdict::Medium);
    }

    #[test]
    fn all_low_is_low() {
        let clauses = vec![clause(ClauseRisk::Low), clause(ClauseRisk::Low)];
        let summary = aggregate(&clauses);
        assert_eq!(summary.overall, RiskVerdict::Low);
        assert_eq!(summary.high_count, 0);
    }

    #[test]
    fn high_count_independent_of_verdict() {
        let clauses = vec![
            clause(ClauseRisk::High),
            clause(ClauseRisk::High),
            clause(ClauseRisk::Low),
        ];
        let summary = aggregate(&clauses);
        assert_eq!(summary.overall, RiskVerdict::High);
        assert_eq!(summary.high_count, 2);
    }

    fn arb_risk() -> impl Strategy<Value = ClauseRisk> {
        prop_oneof![
            Just(ClauseRisk::Low),
            Just(ClauseRisk::Medium),
            Just(ClauseRisk::High),
        ]
    }

    proptest! {
        #[test]
        fn verdict_law(risks in proptest::collection::vec(arb_risk(), 0..32)) {
            let clauses: Vec<_> = risks.iter().map(|r| clause(*r)).collect();
            let summary = aggregate(&clauses);

            let highs = risks.iter().filter(|r| **r == ClauseRisk::High).count();
            let mediums = risks.iter().filter(|r| **r == ClauseRisk::Medium).count();

            prop_assert_eq!(summary.high_count, highs);
            let expected = if highs > 0 {
                RiskVerdict::High
            } else if mediums > 0 {
                RiskVerdict::Medium
            } else if !risks.is_empty() {
                RiskVerdict::Low
            } else {
                RiskVerdict::NotAvailable
            };
            prop_assert_eq!(summary.overall, expected);
        }

        #[test]
        fn deterministic(risks in proptest::collection::vec(arb_risk(), 0..16)) {
            let clauses: Vec<_> = risks.iter().map(|r| clause(*r)).collect();
            prop_assert_eq!(aggregate(&clauses), aggregate(&clauses));
        }
    }
}
