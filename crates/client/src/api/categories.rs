//! Asset category catalog endpoints

use crate::client::ApiClient;
use crate::error::ClientError;
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Serialize)]
struct CategoryBody<'a> {
    category: &'a CategoryInput,
}

impl ApiClient {
    pub async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        let request = self.request(Method::GET, "/categories");
        self.execute_enveloped(request).await
    }

    pub async fn get_category(&self, id: i64) -> Result<Category, ClientError> {
        let request = self.request(Method::GET, &format!("/categories/{id}"));
        self.execute_enveloped(request).await
    }

    pub async fn create_category(&self, input: &CategoryInput) -> Result<Category, ClientError> {
        let request = self
            .request(Method::POST, "/categories")
            .json(&CategoryBody { category: input });
        self.execute_enveloped(request).await
    }

    pub async fn update_category(
        &self,
        id: i64,
        input: &CategoryInput,
    ) -> Result<Category, ClientError> {
        let request = self
            .request(Method::PUT, &format!("/categories/{id}"))
            .json(&CategoryBody { category: input });
        self.execute_enveloped(request).await
    }

    pub async fn delete_category(&self, id: i64) -> Result<(), ClientError> {
        let request = self.request(Method::DELETE, &format!("/categories/{id}"));
        self.execute_empty(request).await
    }
}
