//! epiwatch-store — Append-only historical assessment record store.
//!
//! The pipeline never mutates or deletes records; it appends one record
//! per successful assessment and reads snapshots back for aggregation.
//! The store is keyed per user: appends from different users never
//! interact.

pub mod memory;

pub use memory::MemoryRecordStore;

use async_trait::async_trait;
use uuid::Uuid;

use epiwatch_common::{AssessmentRecord, NewAssessmentRecord, Result};

/// Storage seam for assessment records.
///
/// Each append is atomic and assigns a monotonically increasing record
/// identifier; reads observe a consistent snapshot (never a partial
/// record).
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persist one completed assessment. Returns the assigned record id.
    async fn append(&self, record: NewAssessmentRecord) -> Result<i64>;

    /// All records owned by a user, in append order.
    async fn records_for_user(&self, user_id: Uuid) -> Result<Vec<AssessmentRecord>>;

    /// Most recent records for a user, newest first by id.
    async fn recent_for_user(&self, user_id: Uuid, limit: usize) -> Result<Vec<AssessmentRecord>>;
}
