//! Per-subscale totals and their category buckets.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::scoring;

/// Where a subscale total falls relative to its fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// At or below the low bound.
    Low,
    /// Between the low and average bounds.
    Average,
    /// Above the average bound.
    High,
}

impl Category {
    /// The display/wire form of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Low => "low",
            Category::Average => "average",
            Category::High => "high",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the totals view: a subscale, its summed marks, and the
/// category bucket the sum falls into.
///
/// Computed fresh on every request and never persisted. A row whose label
/// is not one of the known eight carries no category (rendered as the
/// empty string, round-tripped through JSON as `""`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalsRow {
    /// Subscale code, as stored.
    pub label: String,
    /// Sum of marks across the subscale's questions. A null sum (no marks
    /// submitted yet) is treated as zero.
    pub total_marks: i64,
    /// Category bucket, absent for unknown labels.
    #[serde(with = "category_field", default)]
    pub category: Option<Category>,
}

impl TotalsRow {
    /// Builds a totals row from an aggregate `(label, sum)` pair,
    /// classifying the sum against the subscale's thresholds.
    pub fn compute(label: impl Into<String>, total_marks: Option<i64>) -> Self {
        let label = label.into();
        let total_marks = total_marks.unwrap_or(0);
        let category = scoring::category_for(&label, total_marks);
        TotalsRow {
            label,
            total_marks,
            category,
        }
    }

    /// The category as display text; the empty string for unknown labels.
    pub fn category_str(&self) -> &'static str {
        self.category.map(|c| c.as_str()).unwrap_or("")
    }
}

/// Serde bridge mapping `None` to the empty string and back, so the JSON
/// shape matches the historical `category: ""` contract for unknown labels.
mod category_field {
    use super::Category;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<Category>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(category) => serializer.serialize_str(category.as_str()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Category>, D::Error> {
        let text = String::deserialize(deserializer)?;
        match text.as_str() {
            "" => Ok(None),
            "low" => Ok(Some(Category::Low)),
            "average" => Ok(Some(Category::Average)),
            "high" => Ok(Some(Category::High)),
            other => Err(serde::de::Error::custom(format!(
                "unknown category '{other}'"
            ))),
        }
    }
}
