use thiserror::Error;

/// Everything that can go wrong between pressing "Save" and the server's answer.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The server rejected the bearer token. The token has already been cleared.
    #[error("session expired, please sign in again")]
    Unauthorized,
    #[error("server returned {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },
    /// A 2xx answer whose envelope said `status: false`.
    #[error("{}", .0.as_deref().unwrap_or("request rejected by server"))]
    Rejected(Option<String>),
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Text for a toast: the server's own message when it sent one, otherwise
    /// the caller's fallback ("Failed to load clients", ...).
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(m), ..
            }
            | ApiError::Rejected(Some(m)) => m.clone(),
            ApiError::Unauthorized => self.to_string(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}
