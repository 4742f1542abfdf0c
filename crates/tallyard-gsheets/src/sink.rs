//! The row sink abstraction and the summary row it carries.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tallyard_core::TotalsRow;

use crate::{Error, Result};

/// One summary row: the eight subscale totals plus the user-entered
/// coping value, in the spreadsheet's header order (`1`..`8`, `Coping`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SummaryRow {
    /// `coh` total.
    pub coh: i64,
    /// `exp` total.
    pub exp: i64,
    /// `conf` total.
    pub conf: i64,
    /// `A/C` total.
    pub ac: i64,
    /// `ind` total.
    pub ind: i64,
    /// `ARO` total.
    pub aro: i64,
    /// `org` total.
    pub org: i64,
    /// `ctrl` total.
    pub ctrl: i64,
    /// Free-text coping value.
    pub coping: String,
}

impl SummaryRow {
    /// Builds a summary row from computed totals.
    ///
    /// Labels outside the known eight are ignored; a label absent from
    /// `totals` leaves its column at zero.
    pub fn from_totals(totals: &[TotalsRow], coping: impl Into<String>) -> Self {
        let mut row = SummaryRow {
            coping: coping.into(),
            ..SummaryRow::default()
        };
        for total in totals {
            match total.label.as_str() {
                "coh" => row.coh = total.total_marks,
                "exp" => row.exp = total.total_marks,
                "conf" => row.conf = total.total_marks,
                "A/C" => row.ac = total.total_marks,
                "ind" => row.ind = total.total_marks,
                "ARO" => row.aro = total.total_marks,
                "org" => row.org = total.total_marks,
                "ctrl" => row.ctrl = total.total_marks,
                _ => {}
            }
        }
        row
    }

    /// The row as spreadsheet cell values, in column order.
    pub fn values(&self) -> Vec<serde_json::Value> {
        vec![
            self.coh.into(),
            self.exp.into(),
            self.conf.into(),
            self.ac.into(),
            self.ind.into(),
            self.aro.into(),
            self.org.into(),
            self.ctrl.into(),
            self.coping.clone().into(),
        ]
    }
}

/// Anything that can receive a summary row.
///
/// The web layer holds this as `Arc<dyn RowSink>`; the production
/// implementation is [`crate::SheetsClient`].
#[async_trait]
pub trait RowSink: Send + Sync {
    /// Appends one summary row.
    async fn append_row(&self, row: &SummaryRow) -> Result<()>;
}

/// A sink that records rows instead of sending them. For tests.
#[derive(Default)]
pub struct RecordingSink {
    rows: Mutex<Vec<SummaryRow>>,
    fail: AtomicBool,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// When `true`, every subsequent append fails.
    pub fn fail_all(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// The rows appended so far.
    pub fn rows(&self) -> Vec<SummaryRow> {
        self.rows.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl RowSink for RecordingSink {
    async fn append_row(&self, row: &SummaryRow) -> Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(Error::api(500, "recording sink set to fail"));
        }
        self.rows
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(row.clone());
        Ok(())
    }
}
