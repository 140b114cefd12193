use axum::Router;

pub mod auth;
pub mod business_units;
pub mod common;
pub mod currencies;
pub mod dashboard;
pub mod modules;
pub mod navigation;
pub mod schemas;
pub mod settings;
pub mod system;

/// Router for everything under `/api`.
pub fn router() -> Router {
    Router::new()
        .nest("/business-unit", business_units::router())
        .nest("/dashboard", dashboard::router())
        .nest("/modules", modules::router())
        .nest("/currencies", currencies::router())
        .nest("/settings", settings::router())
        .nest("/auth", auth::router())
        .nest("/navigation", navigation::router())
        .nest("/schemas", schemas::router())
}
