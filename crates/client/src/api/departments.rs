//! Department endpoints

use crate::client::ApiClient;
use crate::error::ClientError;
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepartmentType {
    Division,
    Department,
    Team,
    Unit,
    Group,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub department_type: Option<DepartmentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DepartmentInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub department_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

#[derive(Serialize)]
struct DepartmentBody<'a> {
    department: &'a DepartmentInput,
}

impl ApiClient {
    pub async fn list_departments(&self) -> Result<Vec<Department>, ClientError> {
        let request = self.request(Method::GET, "/departments");
        self.execute_enveloped(request).await
    }

    pub async fn get_department(&self, id: i64) -> Result<Department, ClientError> {
        let request = self.request(Method::GET, &format!("/departments/{id}"));
        self.execute_enveloped(request).await
    }

    pub async fn create_department(
        &self,
        input: &DepartmentInput,
    ) -> Result<Department, ClientError> {
        let request = self
            .request(Method::POST, "/departments")
            .json(&DepartmentBody { department: input });
        self.execute_enveloped(request).await
    }

    pub async fn update_department(
        &self,
        id: i64,
        input: &DepartmentInput,
    ) -> Result<Department, ClientError> {
        let request = self
            .request(Method::PUT, &format!("/departments/{id}"))
            .json(&DepartmentBody { department: input });
        self.execute_enveloped(request).await
    }

    pub async fn delete_department(&self, id: i64) -> Result<(), ClientError> {
        let request = self.request(Method::DELETE, &format!("/departments/{id}"));
        self.execute_empty(request).await
    }
}
