use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use opsuite_core::{DomainError, PaginationError};
use opsuite_schema::ValidationErrors;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn validation_error_to_response(err: ValidationErrors) -> axum::response::Response {
    tracing::debug!(
        schema = err.schema(),
        violations = err.violations().len(),
        "payload rejected by schema"
    );
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        axum::Json(json!({
            "error": "validation_error",
            "message": err.to_string(),
            "schema": err.schema(),
            "violations": err.violations(),
        })),
    )
        .into_response()
}

pub fn pagination_error_to_response(err: PaginationError) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_pagination", err.to_string())
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
    }
}

pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    json_error(rejection.status(), "invalid_json", rejection.body_text())
}

pub fn query_rejection_to_response(rejection: QueryRejection) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_query", rejection.body_text())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_client_statuses() {
        let res = domain_error_to_response(DomainError::invalid_id("empty"));
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let res = domain_error_to_response(DomainError::conflict("a != b"));
        assert_eq!(res.status(), StatusCode::CONFLICT);
    }
}
