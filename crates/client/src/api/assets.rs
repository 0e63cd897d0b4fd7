//! Asset endpoints
//!
//! Create and update go out as multipart when a photo is attached (or when
//! custom fields are present), mirroring the backend's form parser. All
//! other calls are plain JSON.

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::multipart::{form_for, FileUpload};
use crate::types::Paginated;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetStatus {
    OnOrder,
    InStock,
    Assigned,
    InTransit,
    InRepair,
    Retired,
    Lost,
    Stolen,
}

impl AssetStatus {
    /// Wire value as the backend spells it.
    pub fn as_value(self) -> &'static str {
        match self {
            Self::OnOrder => "on_order",
            Self::InStock => "in_stock",
            Self::Assigned => "assigned",
            Self::InTransit => "in_transit",
            Self::InRepair => "in_repair",
            Self::Retired => "retired",
            Self::Lost => "lost",
            Self::Stolen => "stolen",
        }
    }

    /// Human-readable label for tables and badges.
    pub fn label(self) -> &'static str {
        match self {
            Self::OnOrder => "On order",
            Self::InStock => "In stock",
            Self::Assigned => "Assigned",
            Self::InTransit => "In transit",
            Self::InRepair => "In repair",
            Self::Retired => "Retired",
            Self::Lost => "Lost",
            Self::Stolen => "Stolen",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetCondition {
    New,
    Excellent,
    Good,
    Fair,
    Poor,
}

/// A tracked asset record. The client treats most fields as opaque backend
/// state; only identity and display fields are ever read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    pub category: String,
    pub status: AssetStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<AssetLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<AssetHolder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty_expiration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<AssetCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetLocation {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetHolder {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// Fields accepted by create and update. `photo` travels outside the
/// serialized body, as its own multipart part.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AssetInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty_expiration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Map<String, Value>>,
    #[serde(skip)]
    pub photo: Option<FileUpload>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AssetFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentType {
    Permanent,
    Temporary,
    Loaner,
}

#[derive(Serialize)]
struct AssignRequest<'a> {
    employee_id: &'a str,
    assignment_type: AssignmentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    expected_return_date: Option<&'a str>,
}

#[derive(Serialize)]
struct ReturnRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    employee_id: Option<&'a str>,
}

#[derive(Serialize)]
struct TransferRequest<'a> {
    from_employee_id: &'a str,
    to_employee_id: &'a str,
}

impl ApiClient {
    pub async fn list_assets(
        &self,
        filters: &AssetFilters,
    ) -> Result<Paginated<Asset>, ClientError> {
        let request = self.request(Method::GET, "/assets").query(filters);
        self.execute_paginated(request).await
    }

    pub async fn search_assets(
        &self,
        filters: &AssetFilters,
    ) -> Result<Paginated<Asset>, ClientError> {
        let request = self.request(Method::GET, "/assets/search").query(filters);
        self.execute_paginated(request).await
    }

    pub async fn get_asset(&self, id: &str) -> Result<Asset, ClientError> {
        let request = self.request(Method::GET, &format!("/assets/{id}"));
        self.execute_enveloped(request).await
    }

    pub async fn create_asset(&self, input: &AssetInput) -> Result<Asset, ClientError> {
        let form = form_for(None, input, "photo", input.photo.as_ref())?;
        let request = self.request(Method::POST, "/assets").multipart(form);
        self.execute_enveloped(request).await
    }

    pub async fn update_asset(&self, id: &str, input: &AssetInput) -> Result<Asset, ClientError> {
        let form = form_for(None, input, "photo", input.photo.as_ref())?;
        let request = self
            .request(Method::PUT, &format!("/assets/{id}"))
            .multipart(form);
        self.execute_enveloped(request).await
    }

    pub async fn delete_asset(&self, id: &str) -> Result<(), ClientError> {
        let request = self.request(Method::DELETE, &format!("/assets/{id}"));
        self.execute_empty(request).await
    }

    /// Hand an asset to an employee.
    pub async fn assign_asset(
        &self,
        asset_id: &str,
        employee_id: &str,
        assignment_type: AssignmentType,
        expected_return_date: Option<&str>,
    ) -> Result<Asset, ClientError> {
        let body = AssignRequest {
            employee_id,
            assignment_type,
            expected_return_date,
        };
        let request = self
            .request(Method::POST, &format!("/assets/{asset_id}/assign"))
            .json(&body);
        self.execute_enveloped(request).await
    }

    /// Take an asset back into stock.
    pub async fn return_asset(
        &self,
        asset_id: &str,
        employee_id: Option<&str>,
    ) -> Result<Asset, ClientError> {
        let body = ReturnRequest { employee_id };
        let request = self
            .request(Method::POST, &format!("/assets/{asset_id}/return"))
            .json(&body);
        self.execute_enveloped(request).await
    }

    /// Move an asset between employees without passing through stock.
    pub async fn transfer_asset(
        &self,
        asset_id: &str,
        from_employee_id: &str,
        to_employee_id: &str,
    ) -> Result<Asset, ClientError> {
        let body = TransferRequest {
            from_employee_id,
            to_employee_id,
        };
        let request = self
            .request(Method::POST, &format!("/assets/{asset_id}/transfer"))
            .json(&body);
        self.execute_enveloped(request).await
    }
}
