//! Scoring rules: reverse-scored items and category thresholds.
//!
//! Two fixed tables drive everything here. [`REVERSE_SCORED_IDS`] lists the
//! questions whose raw mark is inverted before storage, and [`bounds`]
//! carries the per-subscale category thresholds. Both are process-static
//! and read-only.

use crate::types::{Category, Label};
use crate::{Error, Result};

// ============================================================================
// Reverse-scored items
// ============================================================================

/// Marks are entered on a 1–5 scale; a reverse-scored item stores
/// `REVERSE_BASE - mark`.
pub const REVERSE_BASE: i32 = 6;

/// Question ids whose raw mark is inverted before storage.
pub const REVERSE_SCORED_IDS: [i32; 28] = [
    17, 31, 49, 2, 18, 32, 50, //
    3, 26, 33, 45, 57, 64, //
    23, 30, 65, 68, //
    12, 20, 34, 40, 58, //
    35, 41, 53, //
    6, 15, 29,
];

/// Returns `true` if the question's raw mark must be inverted.
pub fn is_reverse_scored(id: i32) -> bool {
    REVERSE_SCORED_IDS.contains(&id)
}

/// Parses parallel `ids`/`marks` form sequences into `(id, mark)` update
/// pairs, inverting the mark for reverse-scored items.
///
/// The sequences must be the same length and every value must parse as an
/// integer; otherwise the whole submission is rejected and nothing should
/// be written.
pub fn normalize_marks(ids: &[String], marks: &[String]) -> Result<Vec<(i32, i32)>> {
    if ids.len() != marks.len() {
        return Err(Error::invalid_input(format!(
            "got {} ids but {} marks",
            ids.len(),
            marks.len()
        )));
    }

    let mut updates = Vec::with_capacity(ids.len());
    for (raw_id, raw_mark) in ids.iter().zip(marks) {
        let id: i32 = raw_id
            .trim()
            .parse()
            .map_err(|_| Error::invalid_input(format!("id '{raw_id}' is not an integer")))?;
        let mut mark: i32 = raw_mark
            .trim()
            .parse()
            .map_err(|_| Error::invalid_input(format!("mark '{raw_mark}' is not an integer")))?;

        if is_reverse_scored(id) {
            mark = REVERSE_BASE - mark;
        }

        updates.push((id, mark));
    }

    Ok(updates)
}

// ============================================================================
// Category thresholds
// ============================================================================

/// Category bounds for one subscale: totals at or below `low` are "low",
/// totals at or below `average` are "average", anything above is "high".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Upper bound of the "low" bucket (inclusive).
    pub low: i64,
    /// Upper bound of the "average" bucket (inclusive).
    pub average: i64,
}

/// On the reversed `conf` scale, totals at or above this bound (but below
/// the low bound) are "average".
const CONF_HIGH_BOUND: i64 = 37;

/// The fixed threshold table. For `conf` the `low` bound coincides with
/// the `average` bound; the high bound lives in [`CONF_HIGH_BOUND`]
/// because the scale runs the other way.
pub const fn bounds(label: Label) -> Bounds {
    match label {
        Label::Coh => Bounds {
            low: 45,
            average: 60,
        },
        Label::Exp => Bounds {
            low: 27,
            average: 39,
        },
        Label::Conf => Bounds {
            low: 51,
            average: 51,
        },
        Label::Ac => Bounds {
            low: 40,
            average: 54,
        },
        Label::Ind => Bounds {
            low: 30,
            average: 40,
        },
        Label::Aro => Bounds {
            low: 25,
            average: 33,
        },
        Label::Org => Bounds { low: 6, average: 9 },
        Label::Ctrl => Bounds {
            low: 13,
            average: 17,
        },
    }
}

/// Buckets a subscale total against the fixed thresholds.
///
/// Unknown labels yield `None` by contract, never an error. The function
/// is pure and total over any `i64` input.
pub fn category_for(label: &str, total: i64) -> Option<Category> {
    let label = Label::parse(label)?;
    let bounds = bounds(label);

    let category = match label {
        // conf runs reversed: high raw totals mean a *low* rating. The low
        // bound is checked before the high bound; historical behavior,
        // keep the order as is.
        Label::Conf => {
            if total >= bounds.low {
                Category::Low
            } else if total >= CONF_HIGH_BOUND {
                Category::Average
            } else {
                Category::High
            }
        }
        _ => {
            if total <= bounds.low {
                Category::Low
            } else if total <= bounds.average {
                Category::Average
            } else {
                Category::High
            }
        }
    };

    Some(category)
}

// ============================================================================
// Tests
// ============================================================================
