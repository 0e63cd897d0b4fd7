//! User administration endpoints
//!
//! These operate on the full account records visible to admins, a richer
//! shape than the session identity in `assetra-core`.

use crate::client::ApiClient;
use crate::error::ClientError;
use assetra_core::{Role, UserStatus};
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub status: UserStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub timezone: String,
    pub locale: String,
    pub email_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<chrono::DateTime<chrono::Utc>>,
    pub locked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    pub inserted_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Serialize)]
struct UserBody<T: Serialize> {
    user: T,
}

#[derive(Serialize)]
struct RoleBody<'a> {
    role: &'a str,
}

#[derive(Serialize)]
struct StatusBody<'a> {
    status: &'a str,
}

impl ApiClient {
    pub async fn list_users(&self, filters: &UserFilters) -> Result<Vec<UserAccount>, ClientError> {
        let request = self.request(Method::GET, "/users").query(filters);
        self.execute_enveloped(request).await
    }

    pub async fn get_user(&self, id: &str) -> Result<UserAccount, ClientError> {
        let request = self.request(Method::GET, &format!("/users/{id}"));
        self.execute_enveloped(request).await
    }

    pub async fn create_user(&self, data: &CreateUserRequest) -> Result<UserAccount, ClientError> {
        let request = self
            .request(Method::POST, "/users")
            .json(&UserBody { user: data });
        self.execute_enveloped(request).await
    }

    pub async fn update_user(
        &self,
        id: &str,
        data: &UpdateUserRequest,
    ) -> Result<UserAccount, ClientError> {
        let request = self
            .request(Method::PATCH, &format!("/users/{id}"))
            .json(&UserBody { user: data });
        self.execute_enveloped(request).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), ClientError> {
        let request = self.request(Method::DELETE, &format!("/users/{id}"));
        self.execute_empty(request).await
    }

    pub async fn update_user_role(&self, id: &str, role: &str) -> Result<UserAccount, ClientError> {
        let request = self
            .request(Method::PATCH, &format!("/users/{id}/role"))
            .json(&RoleBody { role });
        self.execute_enveloped(request).await
    }

    pub async fn update_user_status(
        &self,
        id: &str,
        status: &str,
    ) -> Result<UserAccount, ClientError> {
        let request = self
            .request(Method::PATCH, &format!("/users/{id}/status"))
            .json(&StatusBody { status });
        self.execute_enveloped(request).await
    }

    /// Clear a lockout after too many failed logins.
    pub async fn unlock_user(&self, id: &str) -> Result<UserAccount, ClientError> {
        let request = self.request(Method::POST, &format!("/users/{id}/unlock"));
        self.execute_enveloped(request).await
    }
}
