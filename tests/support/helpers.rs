// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{InMemoryCatalog, UnavailableCatalog};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use provider_catalog::application::services::ApplicationServices;
use provider_catalog::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use provider_catalog::domain::provider::ProviderRepository;
use provider_catalog::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use tower::util::ServiceExt as _;

pub fn build_services(catalog: &InMemoryCatalog) -> ApplicationServices {
    let provider_repo: Arc<dyn ProviderRepository> = Arc::new(catalog.clone());
    let article_write: Arc<dyn ArticleWriteRepository> = Arc::new(catalog.clone());
    let article_read: Arc<dyn ArticleReadRepository> = Arc::new(catalog.clone());
    ApplicationServices::new(provider_repo, article_write, article_read)
}

/// Router over a fresh in-memory catalog. The catalog handle is returned so
/// tests can inspect storage directly.
pub fn make_test_router() -> (Router, InMemoryCatalog) {
    let catalog = InMemoryCatalog::new();
    let services = Arc::new(build_services(&catalog));
    (build_router(HttpState { services }), catalog)
}

pub fn make_unavailable_router() -> Router {
    let provider_repo: Arc<dyn ProviderRepository> = Arc::new(UnavailableCatalog);
    let article_write: Arc<dyn ArticleWriteRepository> = Arc::new(UnavailableCatalog);
    let article_read: Arc<dyn ArticleReadRepository> = Arc::new(UnavailableCatalog);
    let services = Arc::new(ApplicationServices::new(
        provider_repo,
        article_write,
        article_read,
    ));
    build_router(HttpState { services })
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: String,
    pub body: Value,
}

/// Send one request through the router. An empty body decodes to `Null`.
pub async fn send(app: &Router, method: Method, uri: &str, payload: Option<Value>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match payload {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let resp = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let content_type = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    TestResponse {
        status,
        content_type,
        body,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, payload: Value) -> TestResponse {
    send(app, Method::POST, uri, Some(payload)).await
}

/// Assert that a response is an `ErrorResponse` JSON with the expected status
/// and canonical reason.
pub fn assert_error_response(resp: &TestResponse, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status, expected_status, "body: {}", resp.body);
    assert!(
        resp.content_type.starts_with("application/json"),
        "unexpected content-type: {}",
        resp.content_type
    );
    let err_field = resp.body.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = resp.body.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}

/// Ids of a JSON array of records, in response order.
pub fn ids(body: &Value, key: &str) -> Vec<i64> {
    body.as_array()
        .expect("array body")
        .iter()
        .map(|item| item.get(key).and_then(Value::as_i64).expect("id field"))
        .collect()
}

pub fn prices(body: &Value) -> Vec<i64> {
    ids(body, "price")
}
