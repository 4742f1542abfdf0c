//! Core types for questionnaire scoring.

mod label;
mod question;
mod totals;

pub use label::Label;
pub use question::Question;
pub use totals::{Category, TotalsRow};
