//! Asset status catalog endpoints

use crate::client::ApiClient;
use crate::error::ClientError;
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// A tenant-defined status label for assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusLabel {
    pub id: i64,
    pub name: String,
    /// Machine value referenced by asset records.
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub color: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StatusLabelInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Serialize)]
struct StatusBody<'a> {
    status: &'a StatusLabelInput,
}

impl ApiClient {
    pub async fn list_statuses(&self) -> Result<Vec<StatusLabel>, ClientError> {
        let request = self.request(Method::GET, "/statuses");
        self.execute_enveloped(request).await
    }

    pub async fn get_status(&self, id: i64) -> Result<StatusLabel, ClientError> {
        let request = self.request(Method::GET, &format!("/statuses/{id}"));
        self.execute_enveloped(request).await
    }

    pub async fn create_status(&self, input: &StatusLabelInput) -> Result<StatusLabel, ClientError> {
        let request = self
            .request(Method::POST, "/statuses")
            .json(&StatusBody { status: input });
        self.execute_enveloped(request).await
    }

    pub async fn update_status(
        &self,
        id: i64,
        input: &StatusLabelInput,
    ) -> Result<StatusLabel, ClientError> {
        let request = self
            .request(Method::PUT, &format!("/statuses/{id}"))
            .json(&StatusBody { status: input });
        self.execute_enveloped(request).await
    }

    pub async fn delete_status(&self, id: i64) -> Result<(), ClientError> {
        let request = self.request(Method::DELETE, &format!("/statuses/{id}"));
        self.execute_empty(request).await
    }
}
