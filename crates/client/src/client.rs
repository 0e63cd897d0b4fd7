//! The Assetra API client
//!
//! One client instance per session state: anonymous clients carry only the
//! tenant header, authenticated clients add the bearer token. Cloning is
//! cheap; the underlying connection pool is shared.

use crate::error::ClientError;
use crate::types::{Envelope, Paginated};
use crate::unauthorized::notify_unauthorized;
use reqwest::{header, Client, ClientBuilder, Response};

#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

/// Header naming the tenant partition every request is scoped to.
pub const TENANT_HEADER: &str = "X-Tenant-ID";

/// Overall request deadline. Browsers rely on fetch semantics instead, so
/// this only applies to native targets.
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Assetra API client
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    tenant: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the tenant slug sent with every request
    pub fn tenant(&self) -> &str {
        &self.tenant
    }

    /// Whether this client carries a bearer token
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Derive a client carrying the given bearer token, reusing the pool.
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            tenant: self.tenant.clone(),
            token: Some(token.into()),
        }
    }

    /// Derive an anonymous client, reusing the pool.
    pub fn without_token(&self) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            tenant: self.tenant.clone(),
            token: None,
        }
    }

    /// Create a request builder with the tenant header and, when a session
    /// exists, the bearer token.
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .client
            .request(method, url)
            .header(TENANT_HEADER, &self.tenant);

        if let Some(token) = &self.token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        request
    }

    /// Send a request, classify error statuses, and hand back the raw
    /// success response. Fires the unauthorized handler on 401.
    async fn send_checked(&self, request: reqwest::RequestBuilder) -> Result<Response, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            tracing::debug!(status = status.as_u16(), "request failed");
            let error = ClientError::from_status(status, message);
            if error.is_unauthorized() {
                notify_unauthorized();
            }
            Err(error)
        }
    }

    /// Execute a request whose body deserializes directly as `T`.
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = self.send_checked(request).await?;
        Ok(response.json().await?)
    }

    /// Execute a request and unwrap the `{ "data": T }` envelope.
    pub async fn execute_enveloped<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let envelope: Envelope<T> = self.execute(request).await?;
        Ok(envelope.data)
    }

    /// Execute a request returning a `{ "data": [T], "meta": ... }` page.
    pub async fn execute_paginated<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<Paginated<T>, ClientError> {
        self.execute(request).await
    }

    /// Execute a request whose response body is irrelevant (deletes,
    /// logout). The body is drained and discarded.
    pub async fn execute_empty(&self, request: reqwest::RequestBuilder) -> Result<(), ClientError> {
        let response = self.send_checked(request).await?;
        let _ = response.bytes().await;
        Ok(())
    }
}

/// Builder for [`ApiClient`]
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    tenant: Option<String>,
    token: Option<String>,
    user_agent: Option<String>,
    #[cfg(not(target_arch = "wasm32"))]
    timeout: Option<Duration>,
}

impl ApiClientBuilder {
    /// Set the base URL (including the versioned API path, e.g.
    /// `https://host/api/v1`).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the tenant slug
    pub fn tenant(mut self, tenant: impl Into<String>) -> Self {
        self.tenant = Some(tenant.into());
        self
    }

    /// Set the bearer token for authenticated requests
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Override the request deadline (native targets only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;
        let base_url = base_url.trim_end_matches('/').to_string();

        let tenant = self
            .tenant
            .ok_or_else(|| ClientError::Configuration("tenant is required".into()))?;

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        {
            client_builder = client_builder.timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT));
        }

        if let Some(user_agent) = self.user_agent {
            client_builder = client_builder.user_agent(user_agent);
        } else {
            client_builder = client_builder.user_agent("assetra-client/0.1.0");
        }

        let client = client_builder.build()?;

        Ok(ApiClient {
            client,
            base_url,
            tenant,
            token: self.token,
        })
    }
}
