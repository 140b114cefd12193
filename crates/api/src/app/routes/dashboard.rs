//! Dashboard snapshots. Each handler returns a fixed document.

use axum::{routing::get, Json, Router};

use crate::app::dto::{ClusterSnapshot, DashboardStatus, RecentActivity, ReportSnapshot};
use crate::app::fixtures;

pub fn router() -> Router {
    Router::new()
        .route("/status", get(status))
        .route("/cluster", get(cluster))
        .route("/recent-activity", get(recent_activity))
        .route("/report", get(report))
}

pub async fn status() -> Json<DashboardStatus> {
    Json(fixtures::dashboard_status())
}

pub async fn cluster() -> Json<ClusterSnapshot> {
    Json(fixtures::cluster_snapshot())
}

pub async fn recent_activity() -> Json<RecentActivity> {
    Json(fixtures::recent_activity())
}

pub async fn report() -> Json<ReportSnapshot> {
    Json(fixtures::report_snapshot())
}
