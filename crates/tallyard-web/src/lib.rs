//! # tallyard-web
//!
//! HTTP surface for the Tallyard questionnaire service:
//! - `GET /` — the question table with a bulk-update form
//! - `POST /update-all` — normalize and persist submitted marks
//! - `GET /totals` — per-subscale totals with their categories
//! - `POST /add-to-sheet` — best-effort spreadsheet export
//!
//! Every failure surfaces as a redirect or an inline error page, never a
//! structured API error.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tallyard_gsheets::RowSink;
use tallyard_store::QuestionStore;

pub mod config;
pub mod routes;
pub mod view;

pub use config::{AppConfig, ConfigError, SheetConfig};

/// Shared handler state: the persistence gateway and the optional
/// spreadsheet sink.
///
/// `sink` is `None` when spreadsheet export is not configured; the
/// export route then degrades to a logged no-op redirect.
#[derive(Clone)]
pub struct AppState {
    /// Question persistence gateway.
    pub store: Arc<dyn QuestionStore>,
    /// Spreadsheet gateway, when configured.
    pub sink: Option<Arc<dyn RowSink>>,
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/update-all", post(routes::update_all))
        .route("/totals", get(routes::totals))
        .route("/add-to-sheet", post(routes::add_to_sheet))
        .with_state(state)
}
