pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::documents::handlers::handle_upload;
use crate::profiles::handlers::handle_get_first_profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(handle_get_first_profile))
        .route(
            "/upload",
            post(handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/health", get(health::health_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use sqlx::PgPool;
    use tower::ServiceExt;

    use super::*;
    use crate::llm_client::LlmClient;
    use crate::test_support::{
        lazy_pool, multipart_body, sample_pdf, spawn_completion_stub, test_state,
        RateLimitedFormatter, StaticFormatter,
    };

    const BOUNDARY: &str = "talent-api-test-boundary";

    fn upload_request(field: &str, bytes: &[u8]) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/upload")
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(
                BOUNDARY,
                &[(field, "cv.pdf", bytes)],
            )))
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(test_state(lazy_pool(), Arc::new(StaticFormatter::new(""))));
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "talent-api");
        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["schema_tables"], 36);
    }

    #[tokio::test]
    async fn test_upload_returns_formatter_message() {
        let formatter = Arc::new(StaticFormatter::new("Name: Jane Doe"));
        let app = build_router(test_state(lazy_pool(), formatter.clone()));
        let pdf = sample_pdf(&["Jane Doe", "Staff Engineer at Acme Corp"]);

        let response = app.oneshot(upload_request("file", &pdf)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body, json!({ "role": "assistant", "content": "Name: Jane Doe" }));

        let seen = formatter.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].contains("Acme Corp"), "formatter saw {:?}", seen[0]);
    }

    #[tokio::test]
    async fn test_upload_non_pdf_is_server_error() {
        let formatter = Arc::new(StaticFormatter::new("unused"));
        let app = build_router(test_state(lazy_pool(), formatter.clone()));

        let response = app
            .oneshot(upload_request("file", b"not a pdf at all"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(response).await["error"]["code"], "PDF_ERROR");
        assert!(formatter.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upload_without_file_field_is_bad_request() {
        let app = build_router(test_state(lazy_pool(), Arc::new(StaticFormatter::new(""))));
        let pdf = sample_pdf(&["Jane Doe"]);

        let response = app.oneshot(upload_request("document", &pdf)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_upload_over_limit_is_payload_too_large() {
        let formatter = Arc::new(StaticFormatter::new("unused"));
        let state = test_state(lazy_pool(), formatter.clone());
        let oversized = vec![b'x'; state.config.max_upload_bytes * 2];
        let app = build_router(state);

        let response = app.oneshot(upload_request("file", &oversized)).await.unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(json_body(response).await["error"]["code"], "PAYLOAD_TOO_LARGE");
        assert!(formatter.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upload_skips_fields_before_file() {
        let formatter = Arc::new(StaticFormatter::new("Name: Jane Doe"));
        let app = build_router(test_state(lazy_pool(), formatter.clone()));
        let pdf = sample_pdf(&["Jane Doe", "Acme Corp"]);
        let request = Request::builder()
            .method("POST")
            .uri("/upload")
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(
                BOUNDARY,
                &[
                    ("note", "note.txt", &b"recruiter note"[..]),
                    ("file", "cv.pdf", pdf.as_slice()),
                ],
            )))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["content"], "Name: Jane Doe");
        let seen = formatter.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].contains("Acme Corp"));
    }

    #[tokio::test]
    async fn test_upload_upstream_failure_is_server_error() {
        let app = build_router(test_state(lazy_pool(), Arc::new(RateLimitedFormatter)));
        let pdf = sample_pdf(&["Jane Doe"]);

        let response = app.oneshot(upload_request("file", &pdf)).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(response).await["error"]["code"], "LLM_ERROR");
    }

    #[tokio::test]
    async fn test_upload_end_to_end_through_completion_stub() {
        let content = "Name: Jane Doe\n\nRoles:\n1. Employer: Acme Corp\n   Role: Staff Engineer";
        let stub = spawn_completion_stub(
            StatusCode::OK,
            json!({
                "choices": [{
                    "index": 0,
                    "message": { "role": "assistant", "content": content },
                    "finish_reason": "stop"
                }]
            }),
        )
        .await;
        let llm = LlmClient::new("test-key".to_string(), stub.url.clone());
        let app = build_router(test_state(lazy_pool(), Arc::new(llm)));
        let pdf = sample_pdf(&["Jane Doe", "Staff Engineer at Acme Corp"]);

        let response = app.oneshot(upload_request("file", &pdf)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["content"], content);

        let requests = stub.requests();
        assert_eq!(requests.len(), 1);
        let user_message = requests[0].body["messages"][1]["content"].as_str().unwrap();
        assert!(user_message.contains("Jane Doe"));
        assert!(user_message.contains("Acme Corp"));
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL pointing at Postgres"]
    async fn test_root_returns_null_without_profiles(pool: PgPool) {
        let app = build_router(test_state(pool, Arc::new(StaticFormatter::new(""))));
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, Value::Null);
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL pointing at Postgres"]
    async fn test_root_returns_first_profile(pool: PgPool) {
        sqlx::query(
            r#"
            INSERT INTO "Profile" ("public_identifier", "full_name", "linkedin_profile_url", "talentPoolId")
            VALUES ('jane-doe', 'Jane Doe', 'https://www.linkedin.com/in/jane-doe', NULL)
            "#,
        )
        .execute(&pool)
        .await
        .unwrap();
        let app = build_router(test_state(pool, Arc::new(StaticFormatter::new(""))));

        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["full_name"], "Jane Doe");
        assert_eq!(body["talentPoolId"], Value::Null);
    }
}
