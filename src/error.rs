//! Error types for talking to the annotation API
//!
//! Vendor errors carry the HTTP status code and the server's message, and
//! are classified by status the same way the vendor's own clients do.

use serde::Serialize;

/// Kind of vendor error, derived from the HTTP status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or rejected request (400)
    InvalidRequest,
    /// Missing or wrong API key (401)
    Unauthorized,
    /// Feature not enabled for the account (402)
    NotEnabled,
    /// Project, batch or task not found (404)
    ResourceNotFound,
    /// Resource with the same name already exists (409)
    DuplicateResource,
    /// Rate limited (429)
    TooManyRequests,
    /// Server-side failure (500)
    InternalError,
    /// Service temporarily down (503)
    ServiceUnavailable,
    /// Gateway timeout (504)
    Timeout,
    /// Any other non-success status
    Other,
}

impl ErrorKind {
    /// Classify an HTTP status code
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        match status {
            400 => Self::InvalidRequest,
            401 => Self::Unauthorized,
            402 => Self::NotEnabled,
            404 => Self::ResourceNotFound,
            409 => Self::DuplicateResource,
            429 => Self::TooManyRequests,
            500 => Self::InternalError,
            503 => Self::ServiceUnavailable,
            504 => Self::Timeout,
            _ => Self::Other,
        }
    }

    /// Short machine-readable name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::NotEnabled => "NOT_ENABLED",
            Self::ResourceNotFound => "RESOURCE_NOT_FOUND",
            Self::DuplicateResource => "DUPLICATE_RESOURCE",
            Self::TooManyRequests => "TOO_MANY_REQUESTS",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::Timeout => "TIMEOUT",
            Self::Other => "API_ERROR",
        }
    }
}

/// A non-success response from the annotation API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Classification of the status code
    pub kind: ErrorKind,
    /// HTTP status code
    pub code: u16,
    /// Message reported by the server
    pub message: String,
}

impl ApiError {
    /// Build from a status code and message
    #[must_use]
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::from_status(code),
            code,
            message: message.into(),
        }
    }

    /// Build from a raw response body
    ///
    /// JSON bodies contribute their `error` (or `message`) field; other
    /// bodies are used as-is. An empty body falls back to `reason`.
    #[must_use]
    pub fn from_body(code: u16, body: &str, reason: &str) -> Self {
        let from_json = serde_json::from_str::<serde_json::Value>(body).ok().and_then(|v| {
            ["error", "message"]
                .iter()
                .find_map(|key| v.get(*key).and_then(serde_json::Value::as_str).map(String::from))
        });

        let message = from_json.unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                reason.to_string()
            } else {
                trimmed.to_string()
            }
        });

        Self::new(code, message)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.kind.as_str(), self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Serializable error data for JSON reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    /// HTTP status code
    pub code: u16,
    /// Error kind name
    pub kind: String,
    /// Server message
    pub message: String,
}

impl From<&ApiError> for ApiErrorData {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.code,
            kind: err.kind.as_str().to_string(),
            message: err.message.clone(),
        }
    }
}

/// Any failure of a call to the annotation API
#[derive(thiserror::Error, Debug)]
pub enum ScaleError {
    /// The server answered with a non-success status
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The request never got a response
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not decode
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ScaleError {
    /// The vendor error, if the server answered with one
    #[must_use]
    pub const fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// A stage of a run that failed, with the API error behind it
#[derive(thiserror::Error, Debug)]
pub enum RunError {
    /// Stage 1 failed
    #[error("failed to create project '{name}'")]
    Project {
        /// Project the request named
        name: String,
        /// Underlying failure
        #[source]
        source: ScaleError,
    },

    /// Stage 2 failed
    #[error("failed to create batch '{name}'")]
    Batch {
        /// Batch the request named
        name: String,
        /// Underlying failure
        #[source]
        source: ScaleError,
    },

    /// Stage 3 stopped on a non-vendor failure
    #[error("task submission aborted")]
    Tasks(#[source] ScaleError),
}

impl RunError {
    /// The API failure behind the stage error
    #[must_use]
    pub const fn scale_error(&self) -> &ScaleError {
        match self {
            Self::Project { source, .. } | Self::Batch { source, .. } | Self::Tasks(source) => source,
        }
    }
}
