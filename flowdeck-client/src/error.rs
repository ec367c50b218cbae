//! Error types for the Flowdeck client.

use thiserror::Error;

/// Errors that can occur when using the Flowdeck client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No server endpoint is configured (the host field is empty).
    #[error("server endpoint not configured")]
    MissingEndpoint,

    /// The server rejected the request with 401 or 403.
    ///
    /// Authentication is server-wide, so this aborts a probe sequence
    /// instead of moving on to the next base path.
    #[error("authentication required (401/403), check the API key")]
    AuthenticationRequired,

    /// The server answered with an error status that trying a different
    /// base path cannot fix.
    #[error("server returned HTTP {status}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Raw response body text, kept for diagnostics.
        body: String,
    },

    /// The payload matched none of the known response shapes.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Every candidate base path was exhausted without a usable response.
    #[error("endpoint not available on this server variant")]
    UnsupportedEndpoint,

    /// The request failed before an HTTP response was produced
    /// (network, DNS, TLS, or request construction).
    #[error("request failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
