//! Integration tests for the container portal.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p container-portal-integration-tests
//! ```
//!
//! The rental API is replaced by a local `mockito` server and the session
//! file lives in a temporary directory, so no network access or real
//! configuration is needed.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use container_portal_client::{ApiGateway, FileSessionStore, Portal};
use serde_json::{Value, json};
use tempfile::TempDir;
use url::Url;

/// Spreadsheet id the test gateway sends.
pub const SHEET_ID: &str = "integration-sheet";

/// A mocked rental API plus a temporary session directory.
pub struct TestContext {
    pub server: mockito::ServerGuard,
    pub dir: TempDir,
}

impl TestContext {
    pub async fn new() -> Self {
        Self {
            server: mockito::Server::new_async().await,
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Path of the session file.
    #[must_use]
    pub fn session_file(&self) -> PathBuf {
        self.dir.path().join("session.json")
    }

    /// A portal wired to the mock server and the temporary session file.
    #[must_use]
    pub fn portal(&self) -> Portal<ApiGateway, FileSessionStore> {
        let endpoint = Url::parse(&format!("{}/exec", self.server.url())).unwrap();
        let gateway = ApiGateway::with_endpoint(endpoint, SHEET_ID, Duration::from_secs(5)).unwrap();
        Portal::new(gateway, FileSessionStore::new(self.session_file()))
    }

    /// Mock answering lookups of `phone` with `body`. Call `create_async` on
    /// the result to register it.
    pub fn mock_phone(&mut self, phone: &str, status: usize, body: &str) -> mockito::Mock {
        self.server
            .mock("GET", "/exec")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("action".into(), "getContainersByPhone".into()),
                mockito::Matcher::UrlEncoded("sheetId".into(), SHEET_ID.into()),
                mockito::Matcher::UrlEncoded("phone".into(), phone.into()),
            ]))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
    }
}

/// One spreadsheet row as the rental API returns it.
#[must_use]
pub fn row(customer: &str, container_id: &str, ordered: DateTime<Utc>, status: &str) -> Value {
    json!({
        "שם לקוח": customer,
        "מספר מכולה ירדה": container_id,
        "כתובת": "הרצל 10, חיפה",
        "תאריך הזמנה": ordered.to_rfc3339_opts(SecondsFormat::Millis, true),
        "סטטוס": status,
        "הערות": ""
    })
}

/// A success envelope around `rows`.
#[must_use]
pub fn ok_envelope(rows: &[Value]) -> String {
    json!({ "status": "ok", "data": rows }).to_string()
}
