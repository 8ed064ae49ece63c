use thiserror::Error;

/// Errors raised while talking to the posts backend.
///
/// These carry the technical detail for the log. The store collapses them
/// into one fixed message per operation before anything reaches the screen.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("'{url}' responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
