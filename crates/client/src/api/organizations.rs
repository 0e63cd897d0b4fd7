//! Organization endpoints

use crate::client::ApiClient;
use crate::error::ClientError;
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationType {
    HoldingCompany,
    ParentCompany,
    Subsidiary,
    Division,
    BusinessUnit,
    Branch,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: i64,
    pub name: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub organization_type: Option<OrganizationType>,
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
pub struct OrganizationInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub organization_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

#[derive(Serialize)]
struct OrganizationBody<'a> {
    organization: &'a OrganizationInput,
}

impl ApiClient {
    pub async fn list_organizations(&self) -> Result<Vec<Organization>, ClientError> {
        let request = self.request(Method::GET, "/organizations");
        self.execute_enveloped(request).await
    }

    pub async fn get_organization(&self, id: i64) -> Result<Organization, ClientError> {
        let request = self.request(Method::GET, &format!("/organizations/{id}"));
        self.execute_enveloped(request).await
    }

    pub async fn create_organization(
        &self,
        input: &OrganizationInput,
    ) -> Result<Organization, ClientError> {
        let request = self
            .request(Method::POST, "/organizations")
            .json(&OrganizationBody { organization: input });
        self.execute_enveloped(request).await
    }

    pub async fn update_organization(
        &self,
        id: i64,
        input: &OrganizationInput,
    ) -> Result<Organization, ClientError> {
        let request = self
            .request(Method::PUT, &format!("/organizations/{id}"))
            .json(&OrganizationBody { organization: input });
        self.execute_enveloped(request).await
    }

    pub async fn delete_organization(&self, id: i64) -> Result<(), ClientError> {
        let request = self.request(Method::DELETE, &format!("/organizations/{id}"));
        self.execute_empty(request).await
    }
}
