//! Tenant settings and per-user notification preference endpoints
//!
//! Settings are organized in named sections; updates go out at section
//! granularity (the backend merges), so the input shape simply makes every
//! section optional.

use crate::client::ApiClient;
use crate::error::ClientError;
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    pub bcc_admin: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuietHoursSettings {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    pub timezone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowSettings {
    pub auto_create_onboarding: bool,
    pub auto_create_offboarding: bool,
    pub default_priority: String,
    pub default_due_days: u32,
    pub auto_escalate_days: u32,
    pub notify_manager_overdue: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationSettings {
    pub sync_frequency_minutes: u32,
    pub max_retries: u32,
    pub retry_backoff_minutes: u32,
    pub conflict_resolution: String,
    pub notify_on_failure: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSettings {
    pub depreciation_method: String,
    pub depreciation_months: u32,
    pub warranty_alert_days: u32,
    pub audit_frequency_months: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_prefix: Option<String>,
    pub auto_generate_tags: bool,
    pub require_serial: bool,
    pub enforce_serial_unique: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSettings {
    pub auto_terminate_on_hris_delete: bool,
    pub termination_asset_return_days: u32,
    pub require_return_confirmation: bool,
    pub sync_frequency_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecuritySettings {
    pub require_2fa: bool,
    pub session_timeout_minutes: u32,
    pub failed_login_lockout_count: u32,
    pub lockout_duration_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_expiration_days: Option<u32>,
    pub require_strong_passwords: bool,
    pub api_key_expiration_days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditSettings {
    pub enable_detailed_logging: bool,
    pub log_retention_days: u32,
    pub require_change_approval: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_threshold_amount: Option<f64>,
    pub compliance_framework: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportingSettings {
    pub auto_generate: bool,
    pub frequency: String,
    pub default_format: String,
    pub include_sensitive_data: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantSettings {
    pub id: String,
    pub email: EmailSettings,
    pub quiet_hours: QuietHoursSettings,
    pub workflow: WorkflowSettings,
    pub integration: IntegrationSettings,
    pub asset: AssetSettings,
    pub employee: EmployeeSettings,
    pub security: SecuritySettings,
    pub audit: AuditSettings,
    pub reporting: ReportingSettings,
    pub inserted_at: String,
    pub updated_at: String,
}

/// Section-granular settings update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TenantSettingsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<EmailSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiet_hours: Option<QuietHoursSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow: Option<WorkflowSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration: Option<IntegrationSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<AssetSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee: Option<EmployeeSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<SecuritySettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit: Option<AuditSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporting: Option<ReportingSettings>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationChannels {
    pub email: bool,
    pub in_app: bool,
    pub sms: bool,
    pub push: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationFrequency {
    Immediate,
    DailyDigest,
    WeeklyDigest,
    Off,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPreference {
    pub id: String,
    pub user_id: String,
    pub notification_type: String,
    pub channels: NotificationChannels,
    pub frequency: NotificationFrequency,
    pub respect_quiet_hours: bool,
    pub inserted_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NotificationPreferenceInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<NotificationChannels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<NotificationFrequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respect_quiet_hours: Option<bool>,
}

#[derive(Serialize)]
struct SettingsBody<'a> {
    settings: &'a TenantSettingsInput,
}

#[derive(Serialize)]
struct PreferenceBody<'a> {
    preference: &'a NotificationPreferenceInput,
}

impl ApiClient {
    pub async fn tenant_settings(&self) -> Result<TenantSettings, ClientError> {
        let request = self.request(Method::GET, "/settings");
        self.execute_enveloped(request).await
    }

    pub async fn update_tenant_settings(
        &self,
        input: &TenantSettingsInput,
    ) -> Result<TenantSettings, ClientError> {
        let request = self
            .request(Method::PATCH, "/settings")
            .json(&SettingsBody { settings: input });
        self.execute_enveloped(request).await
    }

    pub async fn notification_preferences(
        &self,
    ) -> Result<Vec<NotificationPreference>, ClientError> {
        let request = self.request(Method::GET, "/preferences/notifications");
        self.execute_enveloped(request).await
    }

    pub async fn notification_preference(
        &self,
        notification_type: &str,
    ) -> Result<NotificationPreference, ClientError> {
        let request = self.request(
            Method::GET,
            &format!("/preferences/notifications/{notification_type}"),
        );
        self.execute_enveloped(request).await
    }

    pub async fn update_notification_preference(
        &self,
        notification_type: &str,
        input: &NotificationPreferenceInput,
    ) -> Result<NotificationPreference, ClientError> {
        let request = self
            .request(
                Method::PATCH,
                &format!("/preferences/notifications/{notification_type}"),
            )
            .json(&PreferenceBody { preference: input });
        self.execute_enveloped(request).await
    }
}
