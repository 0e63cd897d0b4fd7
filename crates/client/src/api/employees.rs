//! Employee endpoints
//!
//! The backend's employee form parser expects every multipart key wrapped
//! as `employee[...]`, including the photo and flattened custom fields.

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::multipart::{form_for, FileUpload};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    Active,
    OnLeave,
    Terminated,
}

impl EmploymentStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::OnLeave => "On leave",
            Self::Terminated => "Terminated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkLocationType {
    Office,
    Remote,
    Hybrid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hris_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub termination_date: Option<String>,
    pub employment_status: EmploymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office_location_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_location_type: Option<WorkLocationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_count: Option<u32>,
    pub updated_at: String,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A condensed asset row as embedded in employee detail responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeAsset {
    pub id: String,
    pub name: String,
    pub category: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EmployeeInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub office_location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_location_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Map<String, Value>>,
    #[serde(skip)]
    pub photo: Option<FileUpload>,
}

#[derive(Serialize)]
struct TerminateRequest<'a> {
    termination_date: &'a str,
    reason: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<&'a str>,
}

#[derive(Deserialize)]
struct EmployeeAssetsPayload {
    assets: Vec<EmployeeAsset>,
}

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ClientError> {
        let request = self.request(Method::GET, "/employees");
        self.execute_enveloped(request).await
    }

    pub async fn get_employee(&self, id: &str) -> Result<Employee, ClientError> {
        let request = self.request(Method::GET, &format!("/employees/{id}"));
        self.execute_enveloped(request).await
    }

    pub async fn create_employee(&self, input: &EmployeeInput) -> Result<Employee, ClientError> {
        let form = form_for(Some("employee"), input, "employee[photo]", input.photo.as_ref())?;
        let request = self.request(Method::POST, "/employees").multipart(form);
        self.execute_enveloped(request).await
    }

    pub async fn update_employee(
        &self,
        id: &str,
        input: &EmployeeInput,
    ) -> Result<Employee, ClientError> {
        let form = form_for(Some("employee"), input, "employee[photo]", input.photo.as_ref())?;
        let request = self
            .request(Method::PUT, &format!("/employees/{id}"))
            .multipart(form);
        self.execute_enveloped(request).await
    }

    pub async fn delete_employee(&self, id: &str) -> Result<(), ClientError> {
        let request = self.request(Method::DELETE, &format!("/employees/{id}"));
        self.execute_empty(request).await
    }

    /// Mark an employee terminated as of the given date.
    pub async fn terminate_employee(
        &self,
        id: &str,
        termination_date: &str,
        reason: &str,
        notes: Option<&str>,
    ) -> Result<Employee, ClientError> {
        let body = TerminateRequest {
            termination_date,
            reason,
            notes,
        };
        let request = self
            .request(Method::POST, &format!("/employees/{id}/terminate"))
            .json(&body);
        self.execute_enveloped(request).await
    }

    /// Undo a termination.
    pub async fn reactivate_employee(&self, id: &str) -> Result<Employee, ClientError> {
        let request = self
            .request(Method::POST, &format!("/employees/{id}/reactivate"))
            .json(&serde_json::json!({}));
        self.execute_enveloped(request).await
    }

    pub async fn employee_assets(&self, id: &str) -> Result<Vec<EmployeeAsset>, ClientError> {
        let request = self.request(Method::GET, &format!("/employees/{id}/assets"));
        let payload: EmployeeAssetsPayload = self.execute_enveloped(request).await?;
        Ok(payload.assets)
    }
}
