//! Remote store client for the `/users` collection resource.
//!
//! `UserStore` is the seam the view model talks to; `HttpUserStore` is the reqwest-backed
//! implementation for a json-server style REST backend.

use std::future::Future;
use std::time::Duration;

use chrono::Utc;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::errors::AppError;
use crate::models::{CreateUserRequest, Page, User, UserDraft};

/// Resource path of the users collection.
pub const USERS_PATH: &str = "/users";

/// Header json-server uses to report the unpaginated total.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// Operations the view model needs from the remote collection.
///
/// Every failure, including 404 on update/delete, is reported as `AppError::Transport`.
pub trait UserStore: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<User>, AppError>> + Send;

    /// The server assigns `id` and `createdAt`; callers must use the returned record.
    fn create(&self, draft: &UserDraft) -> impl Future<Output = Result<User, AppError>> + Send;

    fn update(
        &self,
        id: u64,
        draft: &UserDraft,
    ) -> impl Future<Output = Result<User, AppError>> + Send;

    fn delete(&self, id: u64) -> impl Future<Output = Result<(), AppError>> + Send;
}

/// HTTP implementation of [`UserStore`].
#[derive(Clone, Debug)]
pub struct HttpUserStore {
    client: Client,
    base_url: String,
}

impl HttpUserStore {
    /// Create a client for `base_url` with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        tracing::info!("Creating users store client with base URL: {}", base_url);

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(config.api_base_url.clone(), config.request_timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn user_url(&self, id: u64) -> String {
        format!("{}{}/{}", self.base_url, USERS_PATH, id)
    }

    /// Send a request and reject any non-2xx status.
    async fn send(&self, request: RequestBuilder, operation: &str) -> Result<Response, AppError> {
        let response = request.send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        tracing::error!("Error {}: status {} body {}", operation, status, body);
        Err(AppError::Transport(format!(
            "{} failed with status {}",
            operation, status
        )))
    }

    /// Send a request and decode a JSON body.
    async fn execute_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        operation: &str,
    ) -> Result<T, AppError> {
        let body = self.send(request, operation).await?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Full-text query handled by the server. A blank term lists everything.
    pub async fn search(&self, term: &str) -> Result<Vec<User>, AppError> {
        if term.trim().is_empty() {
            return self.list().await;
        }

        let request = self.client.get(self.url(USERS_PATH)).query(&[("q", term)]);
        self.execute_json(request, "searching users").await
    }

    /// Server-side pagination. `total` comes from `X-Total-Count` and is 0 when absent.
    pub async fn list_page(&self, page: usize, limit: usize) -> Result<Page, AppError> {
        let request = self
            .client
            .get(self.url(USERS_PATH))
            .query(&[("_page", page), ("_limit", limit)]);
        let response = self
            .send(request, "fetching users with pagination")
            .await?;

        let total = response
            .headers()
            .get(TOTAL_COUNT_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0);
        let body = response.bytes().await?;
        let data: Vec<User> = serde_json::from_slice(&body)?;

        Ok(Page { data, total })
    }
}

impl UserStore for HttpUserStore {
    async fn list(&self) -> Result<Vec<User>, AppError> {
        let request = self.client.get(self.url(USERS_PATH));
        self.execute_json(request, "fetching users").await
    }

    async fn create(&self, draft: &UserDraft) -> Result<User, AppError> {
        let body = CreateUserRequest {
            draft,
            created_at: Utc::now().format("%Y-%m-%d").to_string(),
        };
        let request = self.client.post(self.url(USERS_PATH)).json(&body);
        self.execute_json(request, "creating user").await
    }

    async fn update(&self, id: u64, draft: &UserDraft) -> Result<User, AppError> {
        let request = self.client.put(self.user_url(id)).json(draft);
        self.execute_json(request, "updating user").await
    }

    async fn delete(&self, id: u64) -> Result<(), AppError> {
        let request = self.client.delete(self.user_url(id));
        self.send(request, "deleting user").await?;
        Ok(())
    }
}
