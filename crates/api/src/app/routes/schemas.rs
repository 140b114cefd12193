//! Generic validation endpoint: validate any payload against a schema chosen
//! by name.

use axum::{
    extract::{rejection::JsonRejection, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;

use opsuite_schema::{validate_named, SchemaName};

use crate::app::{dto::SchemaValidated, errors, routes::common};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_schemas))
        .route("/:name/validate", post(validate_payload))
}

pub async fn list_schemas() -> Json<Vec<&'static str>> {
    Json(SchemaName::ALL.iter().map(|name| name.as_str()).collect())
}

pub async fn validate_payload(
    Path(name): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> axum::response::Response {
    let schema: SchemaName = match name.parse() {
        Ok(s) => s,
        Err(e) => return errors::json_error(StatusCode::NOT_FOUND, "unknown_schema", e.to_string()),
    };
    let body = match common::json_body(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match validate_named(schema, &body) {
        Ok(record) => (
            StatusCode::OK,
            Json(SchemaValidated {
                schema: schema.as_str(),
                record,
            }),
        )
            .into_response(),
        Err(e) => errors::validation_error_to_response(e),
    }
}
