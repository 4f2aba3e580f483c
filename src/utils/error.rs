use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardError {
    #[error("Backend request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Backend returned {status} for {endpoint}")]
    UpstreamError { status: u16, endpoint: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl CardError {
    /// Whether the failure may succeed on a later attempt.
    pub fn is_transient(&self) -> bool {
        match self {
            CardError::HttpError(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            CardError::UpstreamError { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CardError::HttpError(_) | CardError::UpstreamError { .. } => {
                "The card backend could not be reached".to_string()
            }
            CardError::IoError(e) => format!("File system error: {}", e),
            CardError::SerializationError(_) => {
                "The card backend returned data in an unexpected shape".to_string()
            }
            CardError::UrlError(e) => format!("Invalid URL: {}", e),
            CardError::ConfigError { message } => format!("Configuration problem: {}", message),
            CardError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            CardError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            CardError::MissingConfigError { field } => {
                format!("Configuration field '{}' is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CardError::HttpError(_) | CardError::UpstreamError { .. } => {
                "Check the backend URL and network connectivity, then try again"
            }
            CardError::IoError(_) => "Check that the path exists and is writable",
            CardError::SerializationError(_) => {
                "Verify that the backend schema matches the expected card tables"
            }
            CardError::UrlError(_) => "Use a full URL such as https://project.supabase.co",
            CardError::ConfigError { .. }
            | CardError::ConfigValidationError { .. }
            | CardError::InvalidConfigValueError { .. } => {
                "Review the configuration file or command line flags"
            }
            CardError::MissingConfigError { .. } => {
                "Set SUPABASE_URL and SUPABASE_ANON_KEY or pass them on the command line"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_error_transience() {
        let unavailable = CardError::UpstreamError {
            status: 503,
            endpoint: "/functions/v1/get-public-card/abc".to_string(),
        };
        assert!(unavailable.is_transient());

        let forbidden = CardError::UpstreamError {
            status: 403,
            endpoint: "/rest/v1/cards".to_string(),
        };
        assert!(!forbidden.is_transient());
    }

    #[test]
    fn test_missing_config_message() {
        let err = CardError::MissingConfigError {
            field: "backend.url".to_string(),
        };
        assert!(err.user_friendly_message().contains("backend.url"));
        assert!(err.recovery_suggestion().contains("SUPABASE_URL"));
    }
}
