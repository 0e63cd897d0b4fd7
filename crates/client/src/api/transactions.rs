//! Transaction (audit trail) endpoints
//!
//! Transactions are backend-written history rows; the client only reads.

use crate::client::ApiClient;
use crate::error::ClientError;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub transaction_type: String,
    pub asset_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_employee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_employee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performed_by: Option<String>,
    pub performed_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<TransactionAsset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<TransactionEmployee>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionAsset {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionEmployee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ApiClient {
    pub async fn list_transactions(
        &self,
        filters: &TransactionFilters,
    ) -> Result<Vec<Transaction>, ClientError> {
        let request = self.request(Method::GET, "/transactions").query(filters);
        self.execute_enveloped(request).await
    }

    pub async fn get_transaction(&self, id: &str) -> Result<Transaction, ClientError> {
        let request = self.request(Method::GET, &format!("/transactions/{id}"));
        self.execute_enveloped(request).await
    }

    /// History rows for one asset.
    pub async fn asset_transactions(&self, asset_id: &str) -> Result<Vec<Transaction>, ClientError> {
        let request = self.request(Method::GET, &format!("/assets/{asset_id}/transactions"));
        self.execute_enveloped(request).await
    }

    /// History rows for one employee.
    pub async fn employee_transactions(
        &self,
        employee_id: &str,
    ) -> Result<Vec<Transaction>, ClientError> {
        let request = self.request(
            Method::GET,
            &format!("/employees/{employee_id}/transactions"),
        );
        self.execute_enveloped(request).await
    }
}
