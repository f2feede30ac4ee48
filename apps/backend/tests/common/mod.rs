//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - MockCatalog, an in-process stand-in for the remote catalog API
//! - TestContext wiring the backend router to a running mock
//! - Helper functions for creating test data (see `fixtures`)

pub mod fixtures;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use axum_test::TestServer;

use quiz_viewer_backend::services::catalog::CatalogClient;
use quiz_viewer_backend::{app, AppState};

type Reply = (StatusCode, String);

/// Canned upstream replies, served over a real socket on 127.0.0.1.
#[derive(Clone, Default)]
pub struct MockCatalog {
    catalog: Option<Reply>,
    files: HashMap<String, Reply>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply to `POST /?act=get_courses` with a JSON body.
    pub fn catalog(self, body: serde_json::Value) -> Self {
        self.catalog_reply(StatusCode::OK, &body.to_string())
    }

    /// Reply to `POST /?act=get_courses` with a raw status and body.
    pub fn catalog_reply(mut self, status: StatusCode, body: &str) -> Self {
        self.catalog = Some((status, body.to_string()));
        self
    }

    /// Reply to `POST /3do_resources/{name}` with a JSON body.
    pub fn file(self, name: &str, body: serde_json::Value) -> Self {
        self.file_reply(name, StatusCode::OK, &body.to_string())
    }

    /// Reply to `POST /3do_resources/{name}` with a raw status and body.
    pub fn file_reply(mut self, name: &str, status: StatusCode, body: &str) -> Self {
        self.files.insert(name.to_string(), (status, body.to_string()));
        self
    }

    /// Start serving and return the base URL.
    pub async fn spawn(self) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock catalog");
        let addr = listener.local_addr().expect("Mock catalog has no address");

        let router = Router::new()
            .route("/", post(courses))
            .route("/3do_resources/{file}", post(resource))
            .with_state(Arc::new(self));

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Mock catalog stopped");
        });

        format!("http://{}", addr)
    }
}

async fn courses(
    State(mock): State<Arc<MockCatalog>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if params.get("act").map(String::as_str) != Some("get_courses") {
        return StatusCode::BAD_REQUEST.into_response();
    }
    reply(mock.catalog.clone())
}

async fn resource(State(mock): State<Arc<MockCatalog>>, Path(file): Path<String>) -> Response {
    reply(mock.files.get(&file).cloned())
}

fn reply(reply: Option<Reply>) -> Response {
    match reply {
        Some((status, body)) => {
            (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Test context holding the backend router wired to a catalog.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Spawn the mock catalog and build the backend against it.
    pub async fn new(mock: MockCatalog) -> Self {
        let base_url = mock.spawn().await;
        Self::with_base_url(&base_url)
    }

    /// Build the backend against a catalog URL nothing listens on.
    pub async fn unreachable() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind probe listener");
        let addr = listener.local_addr().expect("Probe listener has no address");
        drop(listener);

        Self::with_base_url(&format!("http://{}", addr))
    }

    fn with_base_url(base_url: &str) -> Self {
        let catalog = CatalogClient::new(base_url, Duration::from_secs(5))
            .expect("Failed to build catalog client");
        Self {
            app: app(AppState::new(catalog)),
        }
    }

    /// Test server for use with axum-test.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.app.clone()).expect("Failed to start test server")
    }
}
