use std::fmt;
use std::path::PathBuf;

/// Custom error type for OCI operations
#[derive(Debug)]
pub enum OciError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Configuration file missing at the expected path
    ConfigNotFound(PathBuf),
    /// Profile section failed structural validation
    InvalidConfig {
        profile: String,
        path: PathBuf,
        reason: String,
    },
    /// Connectivity check against the tenancy root failed
    Connectivity(String),
    /// Service client could not be constructed from the auth context
    ClientCreation(String),
    /// Caller passed an empty or otherwise unusable identifier
    Validation(String),
    /// JSON parsing error
    Json(String),
    /// Terminal or file I/O error
    Io(std::io::Error),
}

impl fmt::Display for OciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OciError::Http(e) => write!(f, "HTTP request failed: {}", e),
            OciError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            OciError::ConfigNotFound(path) => {
                write!(f, "OCI config file not found at {}", path.display())
            }
            OciError::InvalidConfig {
                profile,
                path,
                reason,
            } => write!(
                f,
                "Invalid OCI config: profile '{}' in {}: {}",
                profile,
                path.display(),
                reason
            ),
            OciError::Connectivity(msg) => write!(f, "Failed to connect to OCI: {}", msg),
            OciError::ClientCreation(msg) => write!(f, "Failed to create OCI client: {}", msg),
            OciError::Validation(msg) => write!(f, "Validation error: {}", msg),
            OciError::Json(msg) => write!(f, "JSON error: {}", msg),
            OciError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for OciError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OciError::Http(e) => Some(e),
            OciError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for OciError {
    fn from(err: reqwest::Error) -> Self {
        OciError::Http(err)
    }
}

impl From<serde_json::Error> for OciError {
    fn from(err: serde_json::Error) -> Self {
        OciError::Json(err.to_string())
    }
}

impl From<std::io::Error> for OciError {
    fn from(err: std::io::Error) -> Self {
        OciError::Io(err)
    }
}

/// Result type alias for OCI operations
pub type Result<T> = std::result::Result<T, OciError>;
