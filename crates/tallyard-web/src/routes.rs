//! Route handlers.
//!
//! Handlers mirror the catch-and-render shape of the service's HTTP
//! contract: success paths render a page or redirect, failure paths log
//! the underlying error and render a short inline error page.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use futures::future;
use tallyard_core::{scoring, TotalsRow};
use tallyard_gsheets::SummaryRow;

use crate::{view, AppState};

/// Renders an inline error page with the given status.
fn error_page(status: StatusCode, message: &str) -> Response {
    (status, Html(view::error_page(message))).into_response()
}

/// Collects the values of a repeated form field, accepting both the
/// `name[]` and bare `name` spellings.
fn repeated_field(fields: &[(String, String)], name: &str) -> Vec<String> {
    let bracketed = format!("{name}[]");
    fields
        .iter()
        .filter(|(key, _)| key == name || *key == bracketed)
        .map(|(_, value)| value.clone())
        .collect()
}

/// The first value of a form field, if present.
fn single_field(fields: &[(String, String)], name: &str) -> Option<String> {
    fields
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.clone())
}

/// `GET /` — the question table.
pub async fn index(State(state): State<AppState>) -> Response {
    match state.store.list_questions().await {
        Ok(questions) => Html(view::index_page(&questions)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to list questions");
            error_page(StatusCode::INTERNAL_SERVER_ERROR, "Error retrieving data")
        }
    }
}

/// `POST /update-all` — normalize and persist every submitted mark, then
/// redirect back to the table.
///
/// One write is issued per question, all awaited together; there is no
/// transaction, so a mid-batch failure leaves earlier rows updated.
pub async fn update_all(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    let ids = repeated_field(&fields, "ids");
    let marks = repeated_field(&fields, "marks");

    let updates = match scoring::normalize_marks(&ids, &marks) {
        Ok(updates) => updates,
        Err(err) => {
            tracing::warn!(error = %err, "rejected mark submission");
            return error_page(StatusCode::BAD_REQUEST, "Invalid data format");
        }
    };

    let results = future::join_all(
        updates
            .iter()
            .map(|&(id, mark)| state.store.update_mark(id, mark)),
    )
    .await;

    if let Some(err) = results.into_iter().find_map(|result| result.err()) {
        tracing::error!(error = %err, "failed to update marks");
        return error_page(StatusCode::INTERNAL_SERVER_ERROR, "Error updating data");
    }

    Redirect::to("/").into_response()
}

/// `GET /totals` — marks summed per subscale, classified against the
/// fixed thresholds.
pub async fn totals(State(state): State<AppState>) -> Response {
    match state.store.sum_marks_by_label().await {
        Ok(sums) => {
            let rows: Vec<TotalsRow> = sums
                .into_iter()
                .map(|sum| TotalsRow::compute(sum.label, sum.total_marks))
                .collect();
            Html(view::totals_page(&rows)).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to sum marks");
            error_page(StatusCode::INTERNAL_SERVER_ERROR, "Error calculating totals")
        }
    }
}

/// `POST /add-to-sheet` — forward the computed totals to the spreadsheet
/// gateway, best-effort, then redirect back to the totals view.
///
/// The body carries `totals` either as one JSON-encoded array or as
/// repeated fields each holding one JSON row, plus a free-text `coping`
/// value. Append failures are logged and deliberately not surfaced.
pub async fn add_to_sheet(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    let totals = match parse_totals(&fields) {
        Ok(totals) => totals,
        Err(err) => {
            tracing::warn!(error = %err, "rejected spreadsheet submission");
            return error_page(StatusCode::BAD_REQUEST, "Invalid data format");
        }
    };
    let coping = single_field(&fields, "coping").unwrap_or_default();

    let row = SummaryRow::from_totals(&totals, coping);
    match &state.sink {
        Some(sink) => {
            if let Err(err) = sink.append_row(&row).await {
                tracing::error!(error = %err, "failed to append summary row");
            }
        }
        None => {
            tracing::warn!("spreadsheet export not configured; dropping summary row");
        }
    }

    Redirect::to("/totals").into_response()
}

/// Extracts the submitted totals rows from the form fields.
fn parse_totals(fields: &[(String, String)]) -> Result<Vec<TotalsRow>, serde_json::Error> {
    let values = repeated_field(fields, "totals");
    match values.as_slice() {
        // A single field holding the whole array (or one bare row).
        [one] => serde_json::from_str(one)
            .or_else(|_| serde_json::from_str::<TotalsRow>(one).map(|row| vec![row])),
        // Repeated fields, one JSON object each.
        many => many
            .iter()
            .map(|value| serde_json::from_str(value))
            .collect(),
    }
}
