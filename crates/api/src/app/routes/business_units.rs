use axum::{routing::get, Json, Router};

use crate::app::{dto::BusinessUnit, fixtures};

pub fn router() -> Router {
    Router::new().route("/", get(list_business_units))
}

pub async fn list_business_units() -> Json<Vec<BusinessUnit>> {
    Json(fixtures::business_units())
}
