//! Authentication endpoints

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::types::{Envelope, MessageResponse};
use assetra_core::User;
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Token pair plus identity, returned by login and register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
    pub password_confirmation: String,
}

/// `/auth/me` wraps the user next to the tenant slug.
#[derive(Debug, Clone, Deserialize)]
struct MePayload {
    user: User,
}

impl ApiClient {
    /// Exchange credentials for a session.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ClientError> {
        let request = self.request(Method::POST, "/auth/login").json(credentials);
        self.execute_enveloped(request).await
    }

    /// Create an account and open a session in one step.
    pub async fn register(&self, data: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        let request = self.request(Method::POST, "/auth/register").json(data);
        self.execute_enveloped(request).await
    }

    /// Invalidate the server-side session. Callers treat this as
    /// best-effort; local teardown happens regardless of the outcome.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let request = self.request(Method::POST, "/auth/logout");
        self.execute_empty(request).await
    }

    /// Re-fetch the current identity.
    pub async fn current_user(&self) -> Result<User, ClientError> {
        let request = self.request(Method::GET, "/auth/me");
        let envelope: Envelope<MePayload> = self.execute(request).await?;
        Ok(envelope.data.user)
    }

    pub async fn forgot_password(
        &self,
        data: &ForgotPasswordRequest,
    ) -> Result<MessageResponse, ClientError> {
        let request = self.request(Method::POST, "/auth/forgot-password").json(data);
        self.execute(request).await
    }

    pub async fn reset_password(
        &self,
        data: &ResetPasswordRequest,
    ) -> Result<MessageResponse, ClientError> {
        let request = self.request(Method::POST, "/auth/reset-password").json(data);
        self.execute(request).await
    }

    pub async fn validate_reset_token(&self, token: &str) -> Result<MessageResponse, ClientError> {
        let request = self.request(Method::GET, &format!("/auth/validate-reset-token/{token}"));
        self.execute(request).await
    }
}
