use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use opsuite_core::{PageRequest, PaginationError};

// -------------------------
// Query DTOs
// -------------------------

/// `?page=&limit=` on list endpoints. Both are optional; validation happens in
/// `PageRequest`, so zero and negative values reach it untouched.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl PageQuery {
    pub fn to_request(&self, default_limit: u64) -> Result<PageRequest, PaginationError> {
        let default_limit = i64::try_from(default_limit).unwrap_or(i64::MAX);
        PageRequest::new(self.page.unwrap_or(1), self.limit.unwrap_or(default_limit))
    }
}

/// `?roles=admin,buyer` on the navigation endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct NavigationQuery {
    pub roles: Option<String>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessUnitStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessUnit {
    pub id: String,
    pub name: String,
    pub code: String,
    pub description: String,
    pub manager: String,
    pub location: String,
    pub employee_count: u32,
    pub status: BusinessUnitStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusCard {
    pub key: String,
    pub label: String,
    pub value: f64,
    pub change_percent: f64,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStatus {
    pub cards: Vec<StatusCard>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterHealth {
    Healthy,
    Degraded,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cluster {
    pub id: String,
    pub name: String,
    pub region: String,
    pub nodes: u32,
    pub capacity_used: u64,
    pub capacity_total: u64,
    pub usage_percent: f64,
    pub health: ClusterHealth,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterSnapshot {
    pub clusters: Vec<Cluster>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityEntry {
    pub id: String,
    pub actor: String,
    pub action: String,
    pub target: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentActivity {
    pub items: Vec<ActivityEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportPoint {
    pub label: String,
    pub purchase_orders: u32,
    pub spend: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportTotals {
    pub purchase_orders: u32,
    pub spend: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSnapshot {
    pub period: String,
    pub generated_at: DateTime<Utc>,
    pub series: Vec<ReportPoint>,
    pub totals: ReportTotals,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignInAccepted {
    pub accepted: bool,
    pub email: String,
    pub remember_me: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaValidated<T> {
    pub schema: &'static str,
    pub record: T,
}
