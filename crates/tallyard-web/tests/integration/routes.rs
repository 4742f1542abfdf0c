//! Route-level tests against the full router.

use axum::http::{header, StatusCode};

use crate::common::{body_text, question, TestHarness};

fn location(response: &axum::http::Response<axum::body::Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

// ----------------------------------------------------------------------------
// GET /
// ----------------------------------------------------------------------------

#[tokio::test]
async fn test_index_lists_questions_in_id_order() {
    let harness = TestHarness::new();
    let response = harness.get("/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("name=\"ids[]\" value=\"5\""));
    assert!(body.contains("name=\"ids[]\" value=\"17\""));
    let first = body.find("value=\"5\"").unwrap();
    let second = body.find("value=\"17\"").unwrap();
    assert!(first < second);
}

#[tokio::test]
async fn test_index_store_failure_renders_error_page() {
    let harness = TestHarness::new();
    harness.store.fail_all(true);

    let response = harness.get("/").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(response).await.contains("Error retrieving data"));
}

// ----------------------------------------------------------------------------
// POST /update-all
// ----------------------------------------------------------------------------

#[tokio::test]
async fn test_update_all_applies_reverse_scoring_and_redirects() {
    let harness = TestHarness::new();
    let response = harness
        .post_form("/update-all", "ids[]=17&marks[]=2&ids[]=5&marks[]=3")
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let rows = harness.store.snapshot();
    // 17 is reverse-scored: stores 6 - 2; 5 is not.
    assert_eq!(rows.iter().find(|q| q.id == 17).unwrap().marks, Some(4));
    assert_eq!(rows.iter().find(|q| q.id == 5).unwrap().marks, Some(3));
}

#[tokio::test]
async fn test_update_all_accepts_bare_field_names() {
    let harness = TestHarness::new();
    let response = harness.post_form("/update-all", "ids=5&marks=1").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let rows = harness.store.snapshot();
    assert_eq!(rows.iter().find(|q| q.id == 5).unwrap().marks, Some(1));
}

#[tokio::test]
async fn test_update_all_rejects_mismatched_input_without_writing() {
    let harness = TestHarness::new();
    let before = harness.store.snapshot();

    let response = harness
        .post_form("/update-all", "ids[]=17&ids[]=5&marks[]=2")
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("Invalid data format"));

    assert_eq!(harness.store.snapshot(), before);
}

#[tokio::test]
async fn test_update_all_rejects_non_integer_marks_without_writing() {
    let harness = TestHarness::new();
    let before = harness.store.snapshot();

    let response = harness
        .post_form("/update-all", "ids[]=17&marks[]=lots")
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(harness.store.snapshot(), before);
}

#[tokio::test]
async fn test_update_all_store_failure_renders_error_page() {
    let harness = TestHarness::new();
    harness.store.fail_all(true);

    let response = harness.post_form("/update-all", "ids[]=5&marks[]=3").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(response).await.contains("Error updating data"));
}

// ----------------------------------------------------------------------------
// GET /totals
// ----------------------------------------------------------------------------

#[tokio::test]
async fn test_totals_sums_and_classifies() {
    // org: 3 + 3 = 6 -> low; 12 rows would push it higher
    let harness = TestHarness::new();
    let response = harness.get("/totals").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("<td>org</td><td>6</td><td>low</td>"));
    assert!(body.contains("<td>coh</td><td>2</td><td>low</td>"));
}

#[tokio::test]
async fn test_totals_unknown_label_has_empty_category() {
    let harness = TestHarness::new();
    let body = body_text(harness.get("/totals").await).await;
    assert!(body.contains("<td>mystery</td><td>4</td><td></td>"));
}

#[tokio::test]
async fn test_totals_treats_all_null_marks_as_zero() {
    let harness = TestHarness::with_questions(vec![question(1, "ind", None)]);
    let body = body_text(harness.get("/totals").await).await;
    assert!(body.contains("<td>ind</td><td>0</td><td>low</td>"));
}

#[tokio::test]
async fn test_totals_store_failure_renders_error_page() {
    let harness = TestHarness::new();
    harness.store.fail_all(true);

    let response = harness.get("/totals").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(response).await.contains("Error calculating totals"));
}

// ----------------------------------------------------------------------------
// POST /add-to-sheet
// ----------------------------------------------------------------------------

#[tokio::test]
async fn test_add_to_sheet_appends_summary_row() {
    let harness = TestHarness::new();
    let totals = concat!(
        r#"[{"label":"org","total_marks":6,"category":"low"},"#,
        r#"{"label":"conf","total_marks":40,"category":"average"}]"#,
    );
    let response = harness
        .post_form("/add-to-sheet", &format!("totals={totals}&coping=talks"))
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/totals");

    let rows = harness.sink.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].org, 6);
    assert_eq!(rows[0].conf, 40);
    assert_eq!(rows[0].coh, 0);
    assert_eq!(rows[0].coping, "talks");
}

#[tokio::test]
async fn test_add_to_sheet_failure_is_best_effort() {
    let harness = TestHarness::new();
    harness.sink.fail_all(true);

    let response = harness
        .post_form(
            "/add-to-sheet",
            r#"totals=[{"label":"org","total_marks":6,"category":"low"}]&coping=x"#,
        )
        .await;

    // The append failed, the user still gets the redirect.
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/totals");
    assert!(harness.sink.rows().is_empty());
}

#[tokio::test]
async fn test_add_to_sheet_without_sink_still_redirects() {
    let harness = TestHarness::without_sink();
    let response = harness
        .post_form("/add-to-sheet", "totals=[]&coping=x")
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/totals");
}

#[tokio::test]
async fn test_add_to_sheet_rejects_malformed_totals() {
    let harness = TestHarness::new();
    let response = harness
        .post_form("/add-to-sheet", "totals=not-json&coping=x")
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("Invalid data format"));
    assert!(harness.sink.rows().is_empty());
}
