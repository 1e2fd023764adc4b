//! API error handling with helpful messages and actionable suggestions
//!
//! `ApiError` is the outermost error type. Everything that can go wrong while
//! starting or serving ends up here, either directly or lifted out of
//! [`CoreError`]. Each error knows three things about itself:
//!
//! - its HTTP status, for the JSON envelope returned to clients
//! - its process exit code, for the startup path in `main`
//! - its suggestions, printed as `hint:` lines on the terminal

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use keel_core::error::{CoreError, ErrorCategory as CoreCategory};
use owo_colors::OwoColorize;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors raised by the presentation layer
#[derive(Debug, Error)]
pub enum ApiError {
    /// No route matched the request path
    #[error("No route for '{path}'")]
    NotFound { path: String },

    /// The configured host:port pair could not be parsed
    #[error("Invalid bind address '{address}'")]
    InvalidBindAddress {
        address: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// Configuration could not be loaded or deserialized
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Error bubbled up from the inner layers
    #[error(transparent)]
    Core(#[from] CoreError),

    /// I/O failure, typically while binding the listener
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    /// HTTP status for the JSON error envelope.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => StatusCode::BAD_REQUEST,
                CoreCategory::Conflict => StatusCode::CONFLICT,
                CoreCategory::NotFound => StatusCode::NOT_FOUND,
                CoreCategory::Configuration | CoreCategory::Internal => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::InvalidBindAddress { .. } | Self::ConfigError { .. } | Self::IoError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Process exit code for startup failures.
    ///
    /// | Code | Meaning               |
    /// |------|-----------------------|
    /// | 1    | Internal error        |
    /// | 2    | User error            |
    /// | 3    | Resource not found    |
    /// | 4    | Configuration error   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Coarse category used for exit codes and log levels.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::InvalidBindAddress { .. } | Self::ConfigError { .. } => {
                ErrorCategory::Configuration
            }
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Conflict => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Actionable suggestions shown to the user.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotFound { path } => vec![
                format!("No handler is registered for '{path}'"),
                "The server exposes GET / and GET /healthz".to_string(),
            ],
            Self::InvalidBindAddress { address, .. } => vec![
                format!("'{address}' is not a valid host:port pair"),
                "Set server.host and server.port in the config file".to_string(),
                "Or override them with --host and --port".to_string(),
            ],
            Self::ConfigError { .. } => vec![
                "Check the config file for syntax errors".to_string(),
                "Pass --config <FILE> to use a different file".to_string(),
                "KEEL__SERVER__PORT style variables override file values".to_string(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::IoError { .. } => vec![
                "Check that the port is not already in use".to_string(),
                "Check that you have permission to bind the address".to_string(),
            ],
        }
    }

    /// Format the error with colors for terminal display.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();
        output.push_str(&format!("{} {}\n", "error:".red().bold(), self));

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push('\n');
            for suggestion in suggestions {
                output.push_str(&format!("  {} {}\n", "hint:".cyan().bold(), suggestion));
            }
        }

        if verbose {
            if let Some(source) = std::error::Error::source(self) {
                output.push_str(&format!("\n{} {:?}\n", "caused by:".yellow().bold(), source));
            }
        }

        output
    }

    /// Format the error without colors, for non-terminal output.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut output = String::new();
        output.push_str(&format!("error: {self}\n"));

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push('\n');
            for suggestion in suggestions {
                output.push_str(&format!("  hint: {suggestion}\n"));
            }
        }

        if verbose {
            if let Some(source) = std::error::Error::source(self) {
                output.push_str(&format!("\ncaused by: {source:?}\n"));
            }
        }

        output
    }

    /// Log the error at a level matching its category.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::Internal => {
                error!(error = %self, category = ?self.category(), "api error");
            }
            _ => {
                warn!(error = %self, category = ?self.category(), "api error");
            }
        }
    }
}

/// Error categories for exit codes and log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller did something wrong
    UserError,
    /// A requested resource does not exist
    NotFound,
    /// Configuration is missing or malformed
    Configuration,
    /// The server itself failed
    Internal,
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

/// Every error leaving a handler becomes a JSON envelope:
///
/// ```json
/// {"error": {"code": 404, "message": "No route for '/nope'"}}
/// ```
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        let body = json!({
            "error": {
                "code": status.as_u16(),
                "message": self.to_string(),
            }
        });
        (status, Json(body)).into_response()
    }
}

/// Extension trait for adding API context to errors
pub trait IntoApi<T> {
    /// Convert the error into an [`ApiError::IoError`] with a message.
    fn with_api_context<F>(self, f: F) -> ApiResult<T>
    where
        F: FnOnce() -> String;
}

impl<T> IntoApi<T> for Result<T, std::io::Error> {
    fn with_api_context<F>(self, f: F) -> ApiResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|err| ApiError::IoError {
            message: f(),
            source: err,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
