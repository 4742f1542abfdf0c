//! # tallyard-gsheets
//!
//! Google Sheets gateway for Tallyard.
//!
//! Appends one summary row per submission to a spreadsheet via the
//! `values:append` REST endpoint, authenticating with an OAuth2
//! service-account JWT-bearer grant:
//! - RS256-signed assertion built from a service-account key file
//! - Bearer token exchange at the Google token endpoint
//! - Token caching with expiry-based refresh
//!
//! The append is best-effort by design: callers log failures and move on.

pub mod client;
pub mod error;
pub mod sink;

pub use client::{ServiceAccountKey, SheetsClient};
pub use error::{Error, Result};
pub use sink::{RecordingSink, RowSink, SummaryRow};
