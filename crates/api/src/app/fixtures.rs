//! Canned payloads served by the mock resource endpoints.
//!
//! These stand in for a real data-access layer. Only their shapes matter to
//! clients; the values are illustrative.

use chrono::{DateTime, Utc};
use serde_json::Number;

use opsuite_core::progress_percent;
use opsuite_schema::{
    Currency, GeneralSetting, ModuleDto, ModuleStatus, NavigationError, PlanRef, Role, SidebarItem,
};

use crate::app::dto::{
    ActivityEntry, BusinessUnit, BusinessUnitStatus, Cluster, ClusterHealth, ClusterSnapshot,
    DashboardStatus, RecentActivity, ReportPoint, ReportSnapshot, ReportTotals, StatusCard, Trend,
};

fn at(unix_seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(unix_seconds, 0).unwrap_or_default()
}

// 2024-01-01T00:00:00Z
const EPOCH_2024: i64 = 1_704_067_200;
const DAY: i64 = 86_400;

struct UnitRow {
    id: &'static str,
    name: &'static str,
    code: &'static str,
    description: &'static str,
    manager: &'static str,
    location: &'static str,
    employees: u32,
    status: BusinessUnitStatus,
    day: i64,
}

const UNITS: [UnitRow; 5] = [
    UnitRow {
        id: "bu-001",
        name: "Head Office",
        code: "HO",
        description: "Corporate functions and shared services",
        manager: "Rina Hartono",
        location: "Jakarta",
        employees: 142,
        status: BusinessUnitStatus::Active,
        day: 0,
    },
    UnitRow {
        id: "bu-002",
        name: "Central Procurement",
        code: "PROC",
        description: "Sourcing, tenders and purchase orders",
        manager: "Agus Salim",
        location: "Jakarta",
        employees: 38,
        status: BusinessUnitStatus::Active,
        day: 3,
    },
    UnitRow {
        id: "bu-003",
        name: "East Java Warehouse",
        code: "WH-EJ",
        description: "Regional inventory and distribution",
        manager: "Dewi Lestari",
        location: "Surabaya",
        employees: 64,
        status: BusinessUnitStatus::Active,
        day: 12,
    },
    UnitRow {
        id: "bu-004",
        name: "Vendor Relations",
        code: "VR",
        description: "Vendor onboarding and performance reviews",
        manager: "Budi Santoso",
        location: "Bandung",
        employees: 17,
        status: BusinessUnitStatus::Active,
        day: 30,
    },
    UnitRow {
        id: "bu-005",
        name: "Legacy Retail",
        code: "RET",
        description: "Retail outlets scheduled for closure",
        manager: "Sari Wulandari",
        location: "Medan",
        employees: 9,
        status: BusinessUnitStatus::Inactive,
        day: 45,
    },
];

pub fn business_units() -> Vec<BusinessUnit> {
    UNITS
        .iter()
        .map(|row| BusinessUnit {
            id: row.id.to_string(),
            name: row.name.to_string(),
            code: row.code.to_string(),
            description: row.description.to_string(),
            manager: row.manager.to_string(),
            location: row.location.to_string(),
            employee_count: row.employees,
            status: row.status,
            created_at: at(EPOCH_2024 + row.day * DAY),
        })
        .collect()
}

pub fn dashboard_status() -> DashboardStatus {
    let card = |key: &str, label: &str, value: f64, change_percent: f64, trend: Trend| StatusCard {
        key: key.to_string(),
        label: label.to_string(),
        value,
        change_percent,
        trend,
    };

    DashboardStatus {
        cards: vec![
            card("active_vendors", "Active vendors", 128.0, 4.1, Trend::Up),
            card("open_purchase_orders", "Open purchase orders", 42.0, -2.3, Trend::Down),
            card("pending_approvals", "Pending approvals", 7.0, 0.0, Trend::Flat),
            card("inventory_value", "Inventory value", 1_254_300.5, 1.8, Trend::Up),
        ],
    }
}

pub fn cluster_snapshot() -> ClusterSnapshot {
    use ClusterHealth::{Degraded, Down, Healthy};

    let clusters = [
        ("cl-jkt-1", "Jakarta primary", "ap-southeast-3", 6, 412, 600, Healthy),
        ("cl-sg-1", "Singapore failover", "ap-southeast-1", 3, 95, 300, Healthy),
        ("cl-syd-1", "Sydney analytics", "ap-southeast-2", 4, 388, 400, Degraded),
        ("cl-edge-0", "Edge cache", "ap-southeast-3", 0, 0, 0, Down),
    ]
    .into_iter()
    .map(|(id, name, region, nodes, used, total, health)| Cluster {
        id: id.to_string(),
        name: name.to_string(),
        region: region.to_string(),
        nodes,
        capacity_used: used,
        capacity_total: total,
        usage_percent: progress_percent(used, total),
        health,
    })
    .collect();

    ClusterSnapshot { clusters }
}

pub fn recent_activity() -> RecentActivity {
    let items = [
        ("act-105", "Agus Salim", "approved", "PO-2024-0412", 4),
        ("act-104", "Dewi Lestari", "received", "GRN-2024-0188", 37),
        ("act-103", "Budi Santoso", "onboarded", "vendor PT Sinar Jaya", 95),
        ("act-102", "Rina Hartono", "updated", "general settings", 240),
        ("act-101", "Agus Salim", "created", "RFQ-2024-0077", 610),
    ]
    .into_iter()
    .map(|(id, actor, action, target, minutes_ago): (&str, &str, &str, &str, i64)| {
        ActivityEntry {
            id: id.to_string(),
            actor: actor.to_string(),
            action: action.to_string(),
            target: target.to_string(),
            occurred_at: at(EPOCH_2024 + 180 * DAY - minutes_ago * 60),
        }
    })
    .collect();

    RecentActivity { items }
}

pub fn report_snapshot() -> ReportSnapshot {
    let series = vec![
        ("Jan", 31, 182_400.0),
        ("Feb", 27, 150_900.0),
        ("Mar", 35, 201_750.0),
        ("Apr", 29, 168_300.0),
        ("May", 40, 236_120.0),
        ("Jun", 38, 219_880.0),
    ]
    .into_iter()
    .map(|(label, purchase_orders, spend)| ReportPoint {
        label: label.to_string(),
        purchase_orders,
        spend,
    })
    .collect::<Vec<_>>();

    let totals = ReportTotals {
        purchase_orders: series.iter().map(|p| p.purchase_orders).sum(),
        spend: series.iter().map(|p| p.spend).sum(),
    };

    ReportSnapshot {
        period: "2024-H1".to_string(),
        generated_at: at(EPOCH_2024 + 182 * DAY),
        series,
        totals,
    }
}

pub fn modules() -> Vec<ModuleDto> {
    use ModuleStatus::{Active, Deprecated, Inactive};

    let plan = |id: &str, name: &str| PlanRef {
        id: id.to_string(),
        name: name.to_string(),
    };
    let basic = plan("plan-basic", "Basic");
    let pro = plan("plan-pro", "Pro");
    let enterprise = plan("plan-enterprise", "Enterprise");
    let all_tiers = vec![basic.clone(), pro.clone(), enterprise.clone()];

    [
        (
            "mod-procurement",
            "Procurement",
            "Requisitions, RFQs and purchase orders",
            all_tiers.clone(),
            Active,
            (0, 120),
        ),
        (
            "mod-inventory",
            "Inventory",
            "Stock levels, transfers and goods receipts",
            all_tiers,
            Active,
            (0, 98),
        ),
        (
            "mod-vendor",
            "Vendor Management",
            "Vendor onboarding, scorecards and contracts",
            vec![pro.clone(), enterprise.clone()],
            Active,
            (14, 140),
        ),
        (
            "mod-budget",
            "Budget Control",
            "Cost centres and commitment tracking",
            vec![enterprise.clone()],
            Inactive,
            (60, 60),
        ),
        (
            "mod-analytics",
            "Spend Analytics",
            "Dashboards and spend cubes",
            vec![pro, enterprise.clone()],
            Active,
            (75, 160),
        ),
        (
            "mod-legacy-edi",
            "Legacy EDI",
            "EDIFACT gateway (superseded by API integrations)",
            vec![enterprise],
            Deprecated,
            (0, 30),
        ),
        (
            "mod-assets",
            "Fixed Assets",
            "Asset register and depreciation",
            vec![basic],
            Active,
            (90, 150),
        ),
    ]
    .into_iter()
    .map(|(id, name, description, plans, status, (created_day, updated_day))| ModuleDto {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        available_plans: plans,
        status,
        created_at: at(EPOCH_2024 + created_day * DAY),
        updated_at: at(EPOCH_2024 + updated_day * DAY),
    })
    .collect()
}

pub fn currencies() -> Vec<Currency> {
    [
        ("IDR", "Indonesian Rupiah", "Rp", 1.0, true, true),
        ("USD", "US Dollar", "$", 0.000064, false, true),
        ("EUR", "Euro", "€", 0.000059, false, true),
        ("SGD", "Singapore Dollar", "S$", 0.000086, false, true),
        ("JPY", "Japanese Yen", "¥", 0.0097, false, true),
        ("GBP", "Pound Sterling", "£", 0.000051, false, true),
        ("AUD", "Australian Dollar", "A$", 0.000098, false, true),
        ("CNY", "Chinese Yuan", "¥", 0.00046, false, true),
        ("MYR", "Malaysian Ringgit", "RM", 0.0003, false, true),
        ("THB", "Thai Baht", "฿", 0.0023, false, false),
        ("KRW", "South Korean Won", "₩", 0.086, false, false),
        ("INR", "Indian Rupee", "₹", 0.0053, false, false),
    ]
    .into_iter()
    .map(|(code, name, symbol, exchange_rate, is_default, is_active)| Currency {
        id: Some(format!("cur-{}", code.to_ascii_lowercase())),
        code: code.to_string(),
        name: name.to_string(),
        symbol: symbol.to_string(),
        exchange_rate: Number::from_f64(exchange_rate).unwrap_or_else(|| Number::from(0)),
        is_default,
        is_active,
    })
    .collect()
}

pub fn general_setting() -> GeneralSetting {
    GeneralSetting {
        id: Some("settings-main".to_string()),
        company_name: "Acme Procurement".to_string(),
        default_language: "en".to_string(),
        timezone: "Asia/Jakarta".to_string(),
        date_format: "DD/MM/YYYY".to_string(),
        currency_code: "IDR".to_string(),
        fiscal_year_start_month: 1,
        enable_notifications: true,
        maintenance_mode: false,
    }
}

pub fn sidebar() -> Result<Vec<SidebarItem>, NavigationError> {
    let admin = || Role::new("admin");

    Ok(vec![
        SidebarItem::link("Dashboard", "/dashboard").icon("layout-dashboard"),
        SidebarItem::link("Procurement", "/procurement")
            .icon("shopping-cart")
            .match_path("/procurement")
            .with_children(vec![
                SidebarItem::link("Requisitions", "/procurement/requisitions"),
                SidebarItem::link("Purchase Orders", "/procurement/orders"),
                SidebarItem::link("Approvals", "/procurement/approvals")
                    .allowed_roles([Role::new("approver"), admin()]),
            ])?,
        SidebarItem::link("Inventory", "/inventory")
            .icon("boxes")
            .match_path("/inventory")
            .with_children(vec![
                SidebarItem::link("Stock", "/inventory/stock"),
                SidebarItem::link("Transfers", "/inventory/transfers"),
            ])?,
        SidebarItem::link("Vendors", "/vendors")
            .icon("building")
            .allowed_roles([Role::new("vendor_manager"), admin()]),
        SidebarItem::link("Administration", "/admin")
            .icon("settings")
            .match_path("/admin")
            .allowed_roles([admin()])
            .with_children(vec![
                SidebarItem::link("Business Units", "/admin/business-units"),
                SidebarItem::link("Modules", "/admin/modules"),
                SidebarItem::link("Currencies", "/admin/currencies"),
                SidebarItem::link("General Settings", "/admin/settings"),
            ])?,
    ])
}
