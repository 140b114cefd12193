//! Sign-in payload validation. Credential checking belongs to the identity
//! provider and is not performed here.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde_json::Value;

use opsuite_schema::{validate, SignInCredentials};

use crate::app::{dto::SignInAccepted, errors, routes::common};

pub fn router() -> Router {
    Router::new().route("/sign-in", post(sign_in))
}

pub async fn sign_in(body: Result<Json<Value>, JsonRejection>) -> axum::response::Response {
    let body = match common::json_body(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let credentials = match validate::<SignInCredentials>(&body) {
        Ok(rec) => rec.into_inner(),
        Err(e) => return errors::validation_error_to_response(e),
    };

    tracing::info!(email = %credentials.email, "sign-in payload accepted");

    (
        StatusCode::OK,
        Json(SignInAccepted {
            accepted: true,
            email: credentials.email,
            remember_me: credentials.remember_me.unwrap_or(false),
        }),
    )
        .into_response()
}
