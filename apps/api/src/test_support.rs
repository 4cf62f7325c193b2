//! Shared fixtures for unit tests: a stub completion endpoint, fixture PDFs,
//! stub formatters and an `AppState` that never touches a real database.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;
use crate::documents::formatter::ProfileFormatter;
use crate::llm_client::{ChatMessage, LlmError};
use crate::state::AppState;

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: Value,
    seen: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// A local HTTP server standing in for the chat completions endpoint.
pub struct CompletionStub {
    pub url: String,
    seen: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl CompletionStub {
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.seen.lock().unwrap().clone()
    }
}

async fn stub_handler(
    State(stub): State<StubState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    stub.seen.lock().unwrap().push(CapturedRequest {
        authorization,
        body,
    });
    (stub.status, Json(stub.body.clone()))
}

/// Starts a stub that answers every completion request with `status` and `body`.
pub async fn spawn_completion_stub(status: StatusCode, body: Value) -> CompletionStub {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/v1/chat/completions", post(stub_handler))
        .with_state(StubState {
            status,
            body,
            seen: seen.clone(),
        });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    CompletionStub {
        url: format!("http://{addr}/v1/chat/completions"),
        seen,
    }
}

/// Builds a one-page PDF with a Helvetica text layer, one line per entry.
pub fn sample_pdf(lines: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 12.into()]),
        Operation::new("Td", vec![72.into(), 720.into()]),
    ];
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            operations.push(Operation::new("Td", vec![0.into(), (-18).into()]));
        }
        operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
    }
    operations.push(Operation::new("ET", vec![]));

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// Formatter that records its input and answers with a fixed message.
pub struct StaticFormatter {
    pub message: ChatMessage,
    pub seen: Mutex<Vec<String>>,
}

impl StaticFormatter {
    pub fn new(content: &str) -> Self {
        Self {
            message: ChatMessage {
                role: "assistant".to_string(),
                content: Some(content.to_string()),
                extra: serde_json::Map::new(),
            },
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ProfileFormatter for StaticFormatter {
    async fn format_profile(&self, text: &str) -> Result<ChatMessage, LlmError> {
        self.seen.lock().unwrap().push(text.to_string());
        Ok(self.message.clone())
    }
}

/// Formatter that always fails as the upstream would on a rate limit.
pub struct RateLimitedFormatter;

#[async_trait]
impl ProfileFormatter for RateLimitedFormatter {
    async fn format_profile(&self, _text: &str) -> Result<ChatMessage, LlmError> {
        Err(LlmError::Api {
            status: 429,
            message: "Rate limit reached".to_string(),
        })
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://postgres@localhost/talent_test".to_string(),
        database_max_connections: 1,
        run_migrations: false,
        openai_api_key: "test-key".to_string(),
        openai_api_url: "http://127.0.0.1:9/v1/chat/completions".to_string(),
        max_upload_bytes: 1024 * 1024,
        port: 0,
        rust_log: "debug".to_string(),
    }
}

/// A pool that only connects when first used.
pub fn lazy_pool() -> PgPool {
    PgPoolOptions::new()
        .max_connections(1)
        .connect_lazy(&test_config().database_url)
        .unwrap()
}

pub fn test_state(pool: PgPool, formatter: Arc<dyn ProfileFormatter>) -> AppState {
    AppState {
        db: pool,
        formatter,
        config: test_config(),
    }
}

/// Encodes `parts` (field name, filename, bytes) as a multipart/form-data body.
pub fn multipart_body(boundary: &str, parts: &[(&str, &str, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, filename, bytes) in parts {
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/pdf\r\n\r\n");
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    body
}
