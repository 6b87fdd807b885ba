//! HTTP client for the Scale annotation API
//!
//! Implements [`AnnotationApi`] over blocking `reqwest`. Authentication is
//! HTTP Basic with the API key as username and an empty password.

use std::time::Duration;

use log::{debug, trace};
use reqwest::blocking::Client as HttpClient;
use reqwest::header;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::models::{Batch, BatchRequest, Project, ProjectRequest, Task, TaskRequest, TaskType};
use crate::core::ports::AnnotationApi;
use crate::error::{ApiError, ScaleError};

/// Production API root
pub const DEFAULT_BASE_URL: &str = "https://api.scale.com/v1";

/// Builder for [`ScaleClient`]
#[derive(Debug, Clone)]
pub struct ScaleClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Option<Duration>,
}

impl ScaleClientBuilder {
    /// Override the API root (e.g. a local mock server)
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Per-request timeout; `None` waits forever
    #[must_use]
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ScaleClient, ScaleError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(concat!("labelrig/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let http = HttpClient::builder()
            .timeout(self.timeout)
            .default_headers(headers)
            .build()?;

        Ok(ScaleClient {
            http,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            api_key: self.api_key,
        })
    }
}

/// Blocking client for the annotation API
pub struct ScaleClient {
    http: HttpClient,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for ScaleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScaleClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl ScaleClient {
    /// Start building a client for `api_key`
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> ScaleClientBuilder {
        ScaleClientBuilder {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// API root this client talks to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST `{self.base_url}/{path}` with a JSON body
    fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ScaleError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        debug!("POST {url}");
        trace!("{}", serde_json::to_string(body)?);

        let resp = self
            .http
            .post(&url)
            .basic_auth(&self.api_key, Some(""))
            .json(body)
            .send()?;

        let status = resp.status();
        let text = resp.text()?;
        debug!("POST {url} -> {status}");

        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("Unknown status");
            return Err(ApiError::from_body(status.as_u16(), &text, reason).into());
        }

        Ok(serde_json::from_str(&text)?)
    }
}

impl AnnotationApi for ScaleClient {
    fn create_project(&self, request: &ProjectRequest) -> Result<Project, ScaleError> {
        self.post("projects", request)
    }

    fn create_batch(&self, request: &BatchRequest) -> Result<Batch, ScaleError> {
        self.post("batches", request)
    }

    fn create_task(&self, task_type: TaskType, request: &TaskRequest) -> Result<Task, ScaleError> {
        self.post(&format!("task/{task_type}"), request)
    }
}
