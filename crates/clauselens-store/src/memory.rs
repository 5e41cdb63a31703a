//! In-memory record store
//!
//! Concurrent map keyed by record id. Used by tests and embedded
//! deployments; a remote store implements the same trait.

use crate::error::StoreError;
use crate::patch::RecordPatch;
use crate::RecordStore;
use async_trait::async_trait;
use clauselens_domain::{AnalysisRecord, AnalysisStatus, RecordId};
use dashmap::DashMap;

/// DashMap-backed store
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: DashMap<RecordId, AnalysisRecord>,
}

impl MemoryStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Snapshot of every stored record, unscoped (test visibility)
    #[must_use]
    pub fn all_records(&self) -> Vec<AnalysisRecord> {
        self.records.iter().map(|e| e.value().clone()).collect()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn create(&self, record: AnalysisRecord) -> Result<AnalysisRecord, StoreError> {
        if record.status != AnalysisStatus::Analyzing {
            return Err(StoreError::InvalidRecord(format!(
                "records are created in the Analyzing state, got {:?}",
                record.status
            )));
        }
        if self.records.contains_key(&record.id) {
            return Err(StoreError::InvalidRecord(format!(
                "record {} already exists",
                record.id
            )));
        }
        self.records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: RecordId,
        patch: RecordPatch,
        owner_filter: &str,
    ) -> Result<AnalysisRecord, StoreError> {
        let mut entry = self.records.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        if entry.owner_id != owner_filter {
            return Err(StoreError::OwnerMismatch {
                id,
                owner: owner_filter.to_string(),
            });
        }
        patch.apply(entry.value_mut())?;
        Ok(entry.value().clone())
    }

    async fn get(&self, id: RecordId, owner_filter: &str) -> Result<AnalysisRecord, StoreError> {
        let entry = self.records.get(&id).ok_or(StoreError::NotFound(id))?;
        if entry.owner_id != owner_filter {
            return Err(StoreError::OwnerMismatch {
                id,
                owner: owner_filter.to_string(),
            });
        }
        Ok(entry.value().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clauselens_domain::{ClauseAssessment, ClauseRisk, ExtractedIdentifiers, RiskVerdict};

    fn analyzed_patch() -> RecordPatch {
        RecordPatch::Analyzed {
            risk_level: RiskVerdict::Low,
            clause_count: 1,
            high_risk_clause_count: 0,
            clauses: vec![ClauseAssessment::new("Notice", "...", ClauseRisk::Low)],
            identifiers: ExtractedIdentifiers::default(),
        }
    }

    #[tokio::test]
    async fn create_then_update_lifecycle() {
        let store = MemoryStore::new();
        let record = AnalysisRecord::analyzing("owner-1", "NDA");
        let id = record.id;
        store.create(record).await.unwrap();

        let updated = store.update(id, analyzed_patch(), "owner-1").await.unwrap();
        assert_eq!(updated.status, AnalysisStatus::Analyzed);
        assert_eq!(updated.risk_level, RiskVerdict::Low);
    }

    #[tokio::test]
    async fn update_scoped_by_owner() {
        let store = MemoryStore::new();
        let record = AnalysisRecord::analyzing("owner-1", "NDA");
        let id = record.id;
        store.create(record).await.unwrap();

        let err = store
            .update(id, analyzed_patch(), "owner-2")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::OwnerMismatch { .. }));
    }

    #[tokio::test]
    async fn second_terminal_update_refused() {
        let store = MemoryStore::new();
        let record = AnalysisRecord::analyzing("owner-1", "NDA");
        let id = record.id;
        store.create(record).await.unwrap();
        store.update(id, analyzed_patch(), "owner-1").await.unwrap();

        let err = store
            .update(
                id,
                RecordPatch::Errored {
                    error_detail: "late writer".to_string(),
                },
                "owner-1",
            )
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::TerminalRecord { .. }));
    }

    #[tokio::test]
    async fn pending_record_never_stored() {
        let store = MemoryStore::new();
        let mut record = AnalysisRecord::analyzing("owner-1", "NDA");
        record.status = AnalysisStatus::Pending;

        let err = store.create(record).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidRecord(_)));
    }

    #[tokio::test]
    async fn missing_record_not_found() {
        let store = MemoryStore::new();
        let err = store.get(RecordId::new(), "owner-1").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }
}
