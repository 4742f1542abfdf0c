//! Storage abstraction trait.

use async_trait::async_trait;
use tallyard_core::Question;

use crate::Result;

/// One `(label, sum)` aggregate row.
///
/// `total_marks` is `None` when the group has no non-null marks yet,
/// mirroring SQL `SUM` semantics; callers treat that as zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSum {
    /// Subscale code, as stored.
    pub label: String,
    /// Sum of the group's marks, if any are present.
    pub total_marks: Option<i64>,
}

/// The persistence gateway consumed by the web layer.
///
/// Implementations must be safe to share behind an `Arc` across request
/// handlers. No call carries transactional guarantees beyond its own
/// success or failure.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// All question rows, ordered by id.
    async fn list_questions(&self) -> Result<Vec<Question>>;

    /// Sets the mark for a single question.
    async fn update_mark(&self, id: i32, mark: i32) -> Result<()>;

    /// Marks summed per label, one row per label present in the table.
    async fn sum_marks_by_label(&self) -> Result<Vec<LabelSum>>;
}
