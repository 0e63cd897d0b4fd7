//! Dashboard endpoint
//!
//! The backend shapes the payload to the caller's role; the `role` field
//! travels next to `data` (this endpoint does not use the plain envelope).

use crate::client::ApiClient;
use crate::error::ClientError;
use assetra_core::Role;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardResponse {
    pub data: Dashboard,
    pub role: Role,
}

/// Role-shaped dashboard payload. Variants are tried in declaration order;
/// each has required keys the others lack.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Dashboard {
    Admin(AdminDashboard),
    Manager(ManagerDashboard),
    Employee(EmployeeDashboard),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDashboard {
    pub employee: EmployeeSummary,
    pub my_assets: Vec<AssignedAsset>,
    pub recent_activity: Vec<ActivityRow>,
    pub stats: EmployeeStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub job_title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignedAsset {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    pub assigned_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_return_date: Option<String>,
    pub assignment_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeStats {
    pub total_assets: u32,
    pub active_workflows: u32,
    pub pending_tasks: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerDashboard {
    pub manager: ManagerSummary,
    pub team_overview: TeamOverview,
    pub asset_distribution: Vec<CategoryCount>,
    pub key_metrics: TeamMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerSummary {
    pub id: String,
    pub name: String,
    pub department: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamOverview {
    pub team_size: u32,
    pub total_assets: u32,
    pub active_workflows: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMetrics {
    pub team_utilization: f64,
    pub onboarding_completion_rate: f64,
    pub avg_time_to_equipment: f64,
    pub assets_per_employee: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminDashboard {
    pub asset_inventory: AssetInventory,
    pub employee_status: EmployeeStatusSummary,
    pub recent_activity: Vec<ActivityRow>,
    pub alerts: Vec<DashboardAlert>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetInventory {
    pub total: u32,
    pub by_status: HashMap<String, u32>,
    pub utilization_rate: f64,
    pub warranty_expiring_soon: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeStatusSummary {
    pub total: u32,
    pub active: u32,
    pub new_hires: u32,
    pub terminations: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRow {
    pub id: String,
    pub transaction_type: String,
    pub performed_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardAlert {
    pub severity: AlertSeverity,
    #[serde(rename = "type")]
    pub alert_type: String,
    pub message: String,
    pub count: u32,
}

impl ApiClient {
    /// Fetch the dashboard shaped for the current user's role.
    pub async fn dashboard(&self) -> Result<DashboardResponse, ClientError> {
        let request = self.request(Method::GET, "/dashboard");
        self.execute(request).await
    }
}
