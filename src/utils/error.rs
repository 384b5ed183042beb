use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Service returned {status}: {message}")]
    Service {
        status: u16,
        message: String,
        body: Option<serde_json::Value>,
    },
}

impl DiscoveryError {
    pub(crate) fn missing(name: &str) -> Self {
        DiscoveryError::Validation {
            message: format!("{} must be provided", name),
        }
    }

    /// HTTP status of a service error, or of the underlying transport error if it carries one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            DiscoveryError::Service { status, .. } => Some(*status),
            DiscoveryError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DiscoveryError::Service { status: 401, .. } | DiscoveryError::Service { status: 403, .. } => {
                "The service rejected the credentials. Check the bearer token or API key.".to_string()
            }
            DiscoveryError::Service { status: 404, message, .. } => {
                format!("Resource not found: {}", message)
            }
            DiscoveryError::Service { status, message, .. } if *status >= 500 => {
                format!("The service is unavailable ({}): {}", status, message)
            }
            DiscoveryError::Http(e) if e.is_timeout() => {
                "The request timed out. Try again or raise timeout_seconds.".to_string()
            }
            DiscoveryError::Http(e) if e.is_connect() => {
                "Could not connect to the service. Check the service URL.".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DiscoveryError>;
