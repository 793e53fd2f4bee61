use thiserror::Error;

/// Failure of a single API call as seen by the client.
///
/// The `Display` output is the text shown to the user, so every variant
/// carries a complete human readable message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (network failure, CORS, bad URL)
    #[error("Request failed: {0}")]
    Request(String),

    /// The server answered with a non-OK status
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The body was not the JSON shape the endpoint promises
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ApiError {
    /// Builds a status error, preferring the server supplied `error` text.
    pub fn status(status: u16, server_message: Option<String>) -> Self {
        let message = match server_message {
            Some(message) if !message.trim().is_empty() => format!("Error: {}", message),
            _ => format!("HTTP error: {}", status),
        };
        ApiError::Status { status, message }
    }
}
