//! Connection configuration and endpoint resolution.

use crate::error::{ClientError, Result};

/// Base path tried first by default; see the probe order in the client.
pub(crate) const DEFAULT_BASE_PATH: &str = "/rest";

/// URL scheme used to reach the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// `https://` (the default).
    Https,
    /// `http://`, for local or development servers.
    Http,
}

impl Scheme {
    /// The scheme as it appears in a URL.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Https => "https",
            Scheme::Http => "http",
        }
    }
}

/// User-supplied connection settings for one server.
///
/// The fields mirror what a settings form collects: free-form host and
/// port text, a scheme toggle, and an optional API key. Validation happens
/// in [`ConnectionConfig::endpoint`], not at construction, so partially
/// filled settings are representable.
///
/// A config is read-only to the client; [`crate::Client`] takes an owned
/// snapshot and callers rebuild the client when settings change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// URL scheme.
    pub scheme: Scheme,
    /// Server host name or address, as typed. Trimmed on resolution.
    pub host: String,
    /// Server port, as typed. Ignored unless it parses as a positive
    /// integer.
    pub port: Option<String>,
    /// API key sent as `X-N8N-API-KEY`. Blank means unauthenticated.
    pub api_key: Option<String>,
    /// Preferred API base path. Recorded with the connection settings;
    /// the compatibility probe tries the common variants in a fixed order.
    pub base_path_preference: String,
}

impl ConnectionConfig {
    /// Create a config for the given host with everything else defaulted:
    /// HTTPS, no port, no API key, `/rest` as the preferred base path.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            scheme: Scheme::Https,
            host: host.into(),
            port: None,
            api_key: None,
            base_path_preference: DEFAULT_BASE_PATH.to_string(),
        }
    }

    /// Set the URL scheme.
    #[must_use]
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Set the server port as raw text.
    #[must_use]
    pub fn with_port(mut self, port: impl Into<String>) -> Self {
        self.port = Some(port.into());
        self
    }

    /// Set the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the preferred API base path.
    #[must_use]
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path_preference = base_path.into();
        self
    }

    /// Resolve the endpoint root URL, e.g. `https://host:5678`.
    ///
    /// No base path segment is appended here; the client attaches one per
    /// probe attempt. The port appears only when it parses as a positive
    /// integer.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingEndpoint`] when the host is empty
    /// after trimming. Callers must not attempt any network call in that
    /// case.
    pub fn endpoint(&self) -> Result<String> {
        let host = self.host.trim();
        if host.is_empty() {
            return Err(ClientError::MissingEndpoint);
        }
        let mut endpoint = format!("{}://{}", self.scheme.as_str(), host);
        if let Some(port) = self.parsed_port() {
            endpoint.push_str(&format!(":{}", port));
        }
        Ok(endpoint)
    }

    /// The port as a positive integer, when the raw text parses as one.
    fn parsed_port(&self) -> Option<u32> {
        self.port
            .as_deref()
            .map(str::trim)
            .and_then(|p| p.parse::<u32>().ok())
            .filter(|p| *p > 0)
    }

    /// The API key, when one is configured and non-blank.
    pub(crate) fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}
