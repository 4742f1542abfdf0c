//! In-memory backend for testing.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use tallyard_core::Question;

use crate::traits::{LabelSum, QuestionStore};
use crate::{Error, Result};

/// Question store held entirely in memory.
///
/// Used by unit and router tests in place of a live database. Call
/// [`MemoryStore::fail_all`] to make every operation return a backend
/// error, for exercising failure paths.
pub struct MemoryStore {
    rows: RwLock<Vec<Question>>,
    fail: AtomicBool,
}

impl MemoryStore {
    /// Creates a store seeded with the given rows.
    pub fn new(rows: Vec<Question>) -> Self {
        Self {
            rows: RwLock::new(rows),
            fail: AtomicBool::new(false),
        }
    }

    /// When `true`, every subsequent operation fails.
    pub fn fail_all(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// A copy of the current rows, for assertions.
    pub fn snapshot(&self) -> Vec<Question> {
        self.read_rows().clone()
    }

    fn check_available(&self) -> Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            Err(Error::backend("memory store set to fail"))
        } else {
            Ok(())
        }
    }

    fn read_rows(&self) -> std::sync::RwLockReadGuard<'_, Vec<Question>> {
        self.rows.read().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl QuestionStore for MemoryStore {
    async fn list_questions(&self) -> Result<Vec<Question>> {
        self.check_available()?;
        let mut rows = self.read_rows().clone();
        rows.sort_by_key(|q| q.id);
        Ok(rows)
    }

    async fn update_mark(&self, id: i32, mark: i32) -> Result<()> {
        self.check_available()?;
        let mut rows = self.rows.write().unwrap_or_else(|e| e.into_inner());
        match rows.iter_mut().find(|q| q.id == id) {
            Some(question) => {
                question.marks = Some(mark);
                Ok(())
            }
            // UPDATE of a missing row matches zero rows; not an error.
            None => Ok(()),
        }
    }

    async fn sum_marks_by_label(&self) -> Result<Vec<LabelSum>> {
        self.check_available()?;
        let mut sums: BTreeMap<String, Option<i64>> = BTreeMap::new();
        for question in self.read_rows().iter() {
            let entry = sums.entry(question.label.clone()).or_insert(None);
            if let Some(mark) = question.marks {
                *entry = Some(entry.unwrap_or(0) + i64::from(mark));
            }
        }

        Ok(sums
            .into_iter()
            .map(|(label, total_marks)| LabelSum { label, total_marks })
            .collect())
    }
}
