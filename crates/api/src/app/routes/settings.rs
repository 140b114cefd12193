use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use opsuite_schema::{validate, GeneralSetting, GeneralSettingUpdate};

use crate::app::{errors, fixtures, routes::common};

pub fn router() -> Router {
    Router::new().route("/general", get(get_general).put(update_general))
}

pub async fn get_general() -> Json<GeneralSetting> {
    Json(fixtures::general_setting())
}

pub async fn update_general(
    body: Result<Json<Value>, JsonRejection>,
) -> axum::response::Response {
    let body = match common::json_body(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match validate::<GeneralSettingUpdate>(&body) {
        Ok(rec) => (StatusCode::OK, Json(rec.into_inner().into_setting())).into_response(),
        Err(e) => errors::validation_error_to_response(e),
    }
}
