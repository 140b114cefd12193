use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Extension, Path, Query,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use serde_json::Value;

use opsuite_core::{DomainError, PaginatedResponse, RecordId};
use opsuite_schema::{validate, Currency, CurrencyUpdate};

use crate::app::{dto::PageQuery, errors, fixtures, routes::common};
use crate::config::ApiConfig;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_currencies).post(create_currency))
        .route("/:id", put(update_currency))
}

pub async fn list_currencies(
    Extension(config): Extension<Arc<ApiConfig>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> axum::response::Response {
    let request = match common::page_request(&config, query) {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    let page = PaginatedResponse::from_items(fixtures::currencies(), request);
    (StatusCode::OK, Json(page)).into_response()
}

/// Validate a new currency and echo it back with an id assigned.
///
/// Nothing is stored; the response shows what a persisting back end would
/// return.
pub async fn create_currency(
    body: Result<Json<Value>, JsonRejection>,
) -> axum::response::Response {
    let body = match common::json_body(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let currency = match validate::<Currency>(&body) {
        Ok(rec) => rec.into_inner(),
        Err(e) => return errors::validation_error_to_response(e),
    };
    let currency = currency.with_id_or(|| RecordId::generate().into_string());

    (StatusCode::CREATED, Json(currency)).into_response()
}

pub async fn update_currency(
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> axum::response::Response {
    let id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let body = match common::json_body(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let update = match validate::<CurrencyUpdate>(&body) {
        Ok(rec) => rec.into_inner(),
        Err(e) => return errors::validation_error_to_response(e),
    };
    if update.id() != id.as_str() {
        return errors::domain_error_to_response(DomainError::conflict(format!(
            "path id '{id}' does not match body id '{}'",
            update.id()
        )));
    }

    (StatusCode::OK, Json(update.into_currency())).into_response()
}
