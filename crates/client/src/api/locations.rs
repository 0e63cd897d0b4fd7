//! Location endpoints
//!
//! Locations form a hierarchy on the backend (region → office → floor and
//! so on); the client only mirrors the shape and never validates parent
//! relationships.

use crate::client::ApiClient;
use crate::error::ClientError;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    Region,
    Country,
    State,
    City,
    Office,
    Building,
    Floor,
    Warehouse,
    Datacenter,
    Store,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_type: Option<LocationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_province: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LocationInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

#[derive(Serialize)]
struct LocationBody<'a> {
    location: &'a LocationInput,
}

impl ApiClient {
    pub async fn list_locations(&self) -> Result<Vec<Location>, ClientError> {
        let request = self.request(Method::GET, "/locations");
        self.execute_enveloped(request).await
    }

    pub async fn get_location(&self, id: i64) -> Result<Location, ClientError> {
        let request = self.request(Method::GET, &format!("/locations/{id}"));
        self.execute_enveloped(request).await
    }

    pub async fn create_location(&self, input: &LocationInput) -> Result<Location, ClientError> {
        let request = self
            .request(Method::POST, "/locations")
            .json(&LocationBody { location: input });
        self.execute_enveloped(request).await
    }

    pub async fn update_location(
        &self,
        id: i64,
        input: &LocationInput,
    ) -> Result<Location, ClientError> {
        let request = self
            .request(Method::PUT, &format!("/locations/{id}"))
            .json(&LocationBody { location: input });
        self.execute_enveloped(request).await
    }

    pub async fn delete_location(&self, id: i64) -> Result<(), ClientError> {
        let request = self.request(Method::DELETE, &format!("/locations/{id}"));
        self.execute_empty(request).await
    }
}
