//! Core client: request construction and the base-path probe loop.

use crate::config::ConnectionConfig;
use crate::error::{ClientError, Result};
use crate::transport::{HttpRequest, HttpTransport, Method, Transport};

/// Candidate base path prefixes, in the order they are tried: the common
/// public REST prefix first, the older API prefix second, the bare root
/// last. The order is a fallback priority and must not be reshuffled.
const BASE_PATHS: [&str; 3] = ["/rest", "/api/v1", ""];

/// Header carrying the API key; the name is fixed by the remote API.
const API_KEY_HEADER: &str = "X-N8N-API-KEY";

/// Outcome of a successful probe: the payload plus where it came from.
///
/// Transient; operations decode the body and drop the rest.
#[derive(Debug)]
pub(crate) struct ProbeOutcome {
    /// HTTP status code (always in the 2xx range here).
    pub status: u16,
    /// Raw payload bytes.
    pub body: Vec<u8>,
    /// The URL that answered, winning base path included.
    pub url: String,
}

/// A client for one n8n-compatible workflow automation server.
///
/// The client holds an owned, immutable [`ConnectionConfig`] snapshot.
/// Callers that let the user edit settings construct a fresh client from
/// the current values instead of sharing mutable state with one. Calls
/// are otherwise self-contained: no connection or cache survives between
/// operations, and concurrent operations do not affect each other.
///
/// Dropping an operation future aborts the in-flight request; no further
/// base path candidates are attempted.
///
/// # Example
///
/// ```no_run
/// use flowdeck_client::{Client, ConnectionConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ConnectionConfig::new("n8n.example.com").with_api_key("my-secret-key");
/// let client = Client::new(config)?;
///
/// let workflows = client.list_workflows().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client<T = HttpTransport> {
    config: ConnectionConfig,
    transport: T,
}

impl Client<HttpTransport> {
    /// Create a client over the default reqwest-backed transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be created.
    pub fn new(config: ConnectionConfig) -> Result<Self> {
        Ok(Self {
            config,
            transport: HttpTransport::new()?,
        })
    }
}

impl<T: Transport> Client<T> {
    /// Create a client over a caller-supplied transport.
    pub fn with_transport(config: ConnectionConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Join the endpoint root, one candidate base path, and a relative
    /// path into an absolute URL, collapsing duplicate separators.
    fn url(endpoint: &str, base_path: &str, path: &str) -> String {
        let mut url = endpoint.trim_end_matches('/').to_string();
        let base = base_path.trim_matches('/');
        if !base.is_empty() {
            url.push('/');
            url.push_str(base);
        }
        let rel = path.trim_start_matches('/');
        if !rel.is_empty() {
            url.push('/');
            url.push_str(rel);
        }
        url
    }

    /// Build one request against a specific candidate base path.
    ///
    /// `Accept: application/json` is always attached; `Content-Type` only
    /// when a body is present; the API key header only when a non-blank
    /// key is configured.
    fn build_request(
        &self,
        endpoint: &str,
        base_path: &str,
        path: &str,
        method: Method,
        body: Option<&[u8]>,
    ) -> HttpRequest {
        let mut headers = vec![("Accept", "application/json".to_string())];
        if body.is_some() {
            headers.push(("Content-Type", "application/json".to_string()));
        }
        if let Some(key) = self.config.credential() {
            headers.push((API_KEY_HEADER, key.to_string()));
        }
        HttpRequest {
            method,
            url: Self::url(endpoint, base_path, path),
            headers,
            body: body.map(<[u8]>::to_vec),
        }
    }

    /// Send `path` against each candidate base path until one answers.
    ///
    /// Candidates are tried strictly in order, one at a time. 401/403
    /// aborts the whole sequence: authentication is server-wide, not
    /// base-path-specific. 404/405 means "wrong base path" and moves on
    /// to the next candidate, as does a transport failure. Any other
    /// error status aborts, since a different prefix will not fix it.
    /// After exhausting the candidates the last recorded error surfaces.
    pub(crate) async fn perform(
        &self,
        path: &str,
        method: Method,
        body: Option<&[u8]>,
    ) -> Result<ProbeOutcome> {
        let endpoint = self.config.endpoint()?;
        let mut last_error: Option<ClientError> = None;

        for base_path in BASE_PATHS {
            let request = self.build_request(&endpoint, base_path, path, method, body);
            let url = request.url.clone();
            tracing::debug!(method = method.as_str(), url = %url, "probing");

            let response = match self.transport.send(request).await {
                Ok(response) => response,
                Err(error) => {
                    last_error = Some(error);
                    continue;
                }
            };

            match response.status {
                401 | 403 => return Err(ClientError::AuthenticationRequired),
                status @ 200..=299 => {
                    let outcome = ProbeOutcome {
                        status,
                        body: response.body,
                        url,
                    };
                    tracing::debug!(status = outcome.status, url = %outcome.url, "probe succeeded");
                    return Ok(outcome);
                }
                status @ (404 | 405) => {
                    last_error = Some(Self::server_error(status, response.body));
                }
                status => return Err(Self::server_error(status, response.body)),
            }
        }

        Err(last_error.unwrap_or(ClientError::UnsupportedEndpoint))
    }

    fn server_error(status: u16, body: Vec<u8>) -> ClientError {
        ClientError::Server {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        }
    }
}
