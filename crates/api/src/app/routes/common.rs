use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Json, Query};
use serde_json::Value;

use opsuite_core::PageRequest;

use crate::app::{dto::PageQuery, errors};
use crate::config::ApiConfig;

/// Resolve `?page=&limit=` into a validated request or an error response.
pub fn page_request(
    config: &ApiConfig,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<PageRequest, axum::response::Response> {
    let Query(query) = query.map_err(errors::query_rejection_to_response)?;
    query
        .to_request(config.default_page_size)
        .map_err(errors::pagination_error_to_response)
}

/// Unwrap a JSON body, turning extractor rejections into our error shape.
pub fn json_body(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Value, axum::response::Response> {
    body.map(|Json(value)| value)
        .map_err(errors::json_rejection_to_response)
}
