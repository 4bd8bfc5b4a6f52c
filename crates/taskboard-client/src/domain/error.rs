//! Client Error Taxonomy
//!
//! Every failure surfaces to the user as a single human-readable line;
//! none are fatal to the running client.

/// Common result type for client operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Client-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Input rejected before any state change
    InvalidInput(String),
    /// The server rejected the request
    Api(String),
    /// The request never reached or never returned from the server
    Network(String),
    /// The session is no longer valid; the credential store has been cleared
    Unauthorized,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            ApiError::Api(msg) => write!(f, "{}", msg),
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Unauthorized => write!(f, "Session expired, please sign in again"),
        }
    }
}

impl std::error::Error for ApiError {}
