use axum::{
    extract::{rejection::QueryRejection, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use opsuite_schema::{visible_items, RoleSet};

use crate::app::{dto::NavigationQuery, errors, fixtures};

pub fn router() -> Router {
    Router::new().route("/", get(get_navigation))
}

/// Sidebar entries the caller's roles (`?roles=a,b`) may see.
pub async fn get_navigation(
    query: Result<Query<NavigationQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return errors::query_rejection_to_response(rejection),
    };
    let roles = RoleSet::parse_csv(query.roles.as_deref().unwrap_or_default());

    let items = match fixtures::sidebar() {
        Ok(items) => items,
        Err(e) => {
            tracing::error!("sidebar definition is invalid: {e}");
            return errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "navigation_error",
                e.to_string(),
            );
        }
    };

    (StatusCode::OK, Json(visible_items(&items, &roles))).into_response()
}
