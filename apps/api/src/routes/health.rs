use axum::Json;
use serde_json::{json, Value};

use crate::llm_client::MODEL;
use crate::schema::TABLES;

/// Liveness probe. Does not touch the database, so it answers even while
/// Postgres is unreachable.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "model": MODEL,
        "schema_tables": TABLES.len(),
    }))
}
