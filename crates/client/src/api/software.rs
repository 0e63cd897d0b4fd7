//! Software license endpoints

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::types::Paginated;
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LicenseStatus {
    Active,
    Expired,
    Cancelled,
    Future,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftwareLicense {
    pub id: String,
    pub name: String,
    pub vendor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub total_seats: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_seats: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_seats: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utilization_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_per_seat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    pub status: LicenseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_key: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    Active,
    Revoked,
}

/// One seat of a license held by an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftwareAssignment {
    pub id: String,
    pub employee_id: String,
    pub software_license_id: String,
    pub assigned_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used_at: Option<String>,
    pub status: AssignmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<AssignmentHolder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software_license: Option<SoftwareLicense>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentHolder {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Seat-usage summary for a single license.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseStats {
    pub total_seats: u32,
    pub used_seats: u32,
    pub available_seats: u32,
    pub utilization_rate: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SoftwareLicenseInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_seats: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_per_seat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_key: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SoftwareFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssignSeatRequest {
    pub employee_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Serialize)]
struct SoftwareBody<'a> {
    software: &'a SoftwareLicenseInput,
}

#[derive(Serialize)]
struct RevokeRequest<'a> {
    assignment_id: &'a str,
}

impl ApiClient {
    pub async fn list_software(
        &self,
        filters: &SoftwareFilters,
    ) -> Result<Paginated<SoftwareLicense>, ClientError> {
        let request = self.request(Method::GET, "/software").query(filters);
        self.execute_paginated(request).await
    }

    pub async fn get_software(&self, id: &str) -> Result<SoftwareLicense, ClientError> {
        let request = self.request(Method::GET, &format!("/software/{id}"));
        self.execute_enveloped(request).await
    }

    pub async fn software_stats(&self, id: &str) -> Result<LicenseStats, ClientError> {
        let request = self.request(Method::GET, &format!("/software/{id}/stats"));
        self.execute_enveloped(request).await
    }

    pub async fn software_assignments(
        &self,
        id: &str,
    ) -> Result<Vec<SoftwareAssignment>, ClientError> {
        let request = self.request(Method::GET, &format!("/software/{id}/assignments"));
        self.execute_enveloped(request).await
    }

    /// Licenses held by one employee.
    pub async fn employee_software(
        &self,
        employee_id: &str,
    ) -> Result<Vec<SoftwareAssignment>, ClientError> {
        let request = self.request(Method::GET, &format!("/employees/{employee_id}/software"));
        self.execute_enveloped(request).await
    }

    pub async fn create_software(
        &self,
        input: &SoftwareLicenseInput,
    ) -> Result<SoftwareLicense, ClientError> {
        let request = self
            .request(Method::POST, "/software")
            .json(&SoftwareBody { software: input });
        self.execute_enveloped(request).await
    }

    pub async fn update_software(
        &self,
        id: &str,
        input: &SoftwareLicenseInput,
    ) -> Result<SoftwareLicense, ClientError> {
        let request = self
            .request(Method::PUT, &format!("/software/{id}"))
            .json(&SoftwareBody { software: input });
        self.execute_enveloped(request).await
    }

    pub async fn delete_software(&self, id: &str) -> Result<(), ClientError> {
        let request = self.request(Method::DELETE, &format!("/software/{id}"));
        self.execute_empty(request).await
    }

    /// Grant a seat to an employee.
    pub async fn assign_software(
        &self,
        license_id: &str,
        data: &AssignSeatRequest,
    ) -> Result<SoftwareAssignment, ClientError> {
        let request = self
            .request(Method::POST, &format!("/software/{license_id}/assign"))
            .json(data);
        self.execute_enveloped(request).await
    }

    /// Revoke a previously granted seat.
    pub async fn revoke_software(
        &self,
        license_id: &str,
        assignment_id: &str,
    ) -> Result<(), ClientError> {
        let request = self
            .request(Method::POST, &format!("/software/{license_id}/revoke"))
            .json(&RevokeRequest { assignment_id });
        self.execute_empty(request).await
    }

    /// Licenses expiring within `days`.
    pub async fn expiring_software(&self, days: u32) -> Result<Vec<SoftwareLicense>, ClientError> {
        let request = self
            .request(Method::GET, "/software/expiring")
            .query(&[("days", days)]);
        self.execute_enveloped(request).await
    }

    /// Licenses whose utilization sits below `threshold` percent.
    pub async fn underutilized_software(
        &self,
        threshold: u32,
    ) -> Result<Vec<SoftwareLicense>, ClientError> {
        let request = self
            .request(Method::GET, "/software/underutilized")
            .query(&[("threshold", threshold)]);
        self.execute_enveloped(request).await
    }
}
