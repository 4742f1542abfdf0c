//! The question row as persisted.

use serde::{Deserialize, Serialize};

/// One questionnaire item.
///
/// Rows are pre-seeded externally and never created or deleted by this
/// service; only `marks` changes, in bulk, via the update operation.
/// Freshly seeded rows have no mark yet, hence the `Option`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Stable unique identifier.
    pub id: i32,
    /// Subscale code. Kept as raw text: the store does not reject rows
    /// with labels outside the known eight.
    pub label: String,
    /// Current mark, if one has been submitted.
    pub marks: Option<i32>,
}
