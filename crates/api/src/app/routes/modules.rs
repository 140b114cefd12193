use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use opsuite_core::PaginatedResponse;

use crate::app::{dto::PageQuery, fixtures, routes::common};
use crate::config::ApiConfig;

pub fn router() -> Router {
    Router::new().route("/", get(list_modules))
}

pub async fn list_modules(
    Extension(config): Extension<Arc<ApiConfig>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> axum::response::Response {
    let request = match common::page_request(&config, query) {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    let page = PaginatedResponse::from_source(fixtures::modules().as_slice(), request);
    (StatusCode::OK, Json(page)).into_response()
}
