//! Common test harness for the router integration tests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use tallyard_core::Question;
use tallyard_gsheets::RecordingSink;
use tallyard_store::MemoryStore;
use tallyard_web::{router, AppState};
use tower::ServiceExt;

/// Router test harness: an in-memory store, a recording sink, and the
/// app wired to both.
pub struct TestHarness {
    /// The backing store, for seeding and assertions.
    pub store: Arc<MemoryStore>,
    /// The spreadsheet sink double, for assertions.
    pub sink: Arc<RecordingSink>,
    /// The application under test.
    pub app: Router,
}

impl TestHarness {
    /// Harness seeded with the default question set.
    pub fn new() -> Self {
        Self::with_questions(seed_questions())
    }

    /// Harness seeded with specific rows.
    pub fn with_questions(questions: Vec<Question>) -> Self {
        let store = Arc::new(MemoryStore::new(questions));
        let sink = Arc::new(RecordingSink::new());
        let state = AppState {
            store: store.clone(),
            sink: Some(sink.clone()),
        };
        Self {
            store,
            sink,
            app: router(state),
        }
    }

    /// Harness with spreadsheet export unconfigured.
    pub fn without_sink() -> Self {
        let store = Arc::new(MemoryStore::new(seed_questions()));
        let state = AppState {
            store: store.clone(),
            sink: None,
        };
        Self {
            store,
            sink: Arc::new(RecordingSink::new()),
            app: router(state),
        }
    }

    /// Sends a GET request.
    pub async fn get(&self, uri: &str) -> Response<Body> {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.app.clone().oneshot(request).await.unwrap()
    }

    /// Sends a POST with a urlencoded form body.
    pub async fn post_form(&self, uri: &str, body: &str) -> Response<Body> {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.app.clone().oneshot(request).await.unwrap()
    }
}

/// Default seed: a few rows spread over three subscales plus one row
/// with a label outside the known eight.
pub fn seed_questions() -> Vec<Question> {
    vec![
        question(5, "exp", Some(3)),
        question(17, "coh", Some(2)),
        question(20, "org", Some(3)),
        question(21, "org", Some(3)),
        question(30, "mystery", Some(4)),
    ]
}

/// Builds one question row.
pub fn question(id: i32, label: &str, marks: Option<i32>) -> Question {
    Question {
        id,
        label: label.to_string(),
        marks,
    }
}

/// Reads a response body to a string.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
