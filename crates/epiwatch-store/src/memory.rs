//! In-memory record arena, indexed by user identity.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use epiwatch_common::{AssessmentRecord, NewAssessmentRecord, Result};

use crate::RecordStore;

#[derive(Default)]
struct Inner {
    next_id: i64,
    by_user: HashMap<Uuid, Vec<AssessmentRecord>>,
}

/// Append-only in-memory implementation of [`RecordStore`].
///
/// A single write lock covers id assignment and the push, so an append is
/// atomic; reads clone under the read lock and therefore see a consistent
/// snapshot.
#[derive(Default)]
pub struct MemoryRecordStore {
    inner: RwLock<Inner>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn append(&self, record: NewAssessmentRecord) -> Result<i64> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let id = inner.next_id;
        let user_id = record.user_id;
        let record = record.with_id(id);
        tracing::debug!(
            record_id = id,
            user_id = %user_id,
            region = %record.region,
            risk = record.risk_tier.as_str(),
            "Appended assessment record"
        );
        inner.by_user.entry(user_id).or_default().push(record);
        Ok(id)
    }

    async fn records_for_user(&self, user_id: Uuid) -> Result<Vec<AssessmentRecord>> {
        let inner = self.inner.read().await;
        Ok(inner.by_user.get(&user_id).cloned().unwrap_or_default())
    }

    async fn recent_for_user(&self, user_id: Uuid, limit: usize) -> Result<Vec<AssessmentRecord>> {
        let inner = self.inner.read().await;
        let records = inner
            .by_user
            .get(&user_id)
            .map(|records| records.iter().rev().take(limit).cloned().collect())
            .unwrap_or_default();
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use epiwatch_common::{AqiCategory, RiskTier};

    fn record(user_id: Uuid, region: &str, tier: RiskTier) -> NewAssessmentRecord {
        NewAssessmentRecord {
            user_id,
            timestamp: Utc::now(),
            region: region.to_string(),
            fever_cases: 50,
            cough_cases: 10,
            diarrhea_cases: 5,
            region_population: 10000,
            prediction: 1,
            probability: 82.0,
            risk_tier: tier,
            aqi_value: 130,
            aqi_category: AqiCategory::Moderate,
        }
    }

    #[tokio::test]
    async fn test_append_assigns_increasing_ids() {
        let store = MemoryRecordStore::new();
        let user = Uuid::new_v4();
        let a = store.append(record(user, "Surat", RiskTier::High)).await.unwrap();
        let b = store.append(record(user, "Pune", RiskTier::Low)).await.unwrap();
        assert!(b > a);
    }

    #[tokio::test]
    async fn test_records_keyed_per_user() {
        let store = MemoryRecordStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        store.append(record(alice, "Surat", RiskTier::High)).await.unwrap();
        store.append(record(bob, "Delhi", RiskTier::Medium)).await.unwrap();

        let for_alice = store.records_for_user(alice).await.unwrap();
        assert_eq!(for_alice.len(), 1);
        assert_eq!(for_alice[0].region, "Surat");
        assert_eq!(store.records_for_user(bob).await.unwrap().len(), 1);
        assert!(store.records_for_user(Uuid::new_v4()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_recent_newest_first() {
        let store = MemoryRecordStore::new();
        let user = Uuid::new_v4();
        for region in ["A", "B", "C"] {
            store.append(record(user, region, RiskTier::Low)).await.unwrap();
        }
        let recent = store.recent_for_user(user, 2).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].region, "C");
        assert_eq!(recent[1].region, "B");
    }

    #[tokio::test]
    async fn test_concurrent_appends_all_land() {
        let store = std::sync::Arc::new(MemoryRecordStore::new());
        let user = Uuid::new_v4();
        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.append(record(user, "Surat", RiskTier::Low)).await.unwrap()
            }));
        }
        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 16);
        assert_eq!(store.records_for_user(user).await.unwrap().len(), 16);
    }
}
