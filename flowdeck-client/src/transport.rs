//! HTTP transport seam.
//!
//! The probe loop needs nothing beyond "send this request, hand back the
//! status and body", so that contract is a trait. The reqwest-backed
//! [`HttpTransport`] is the default implementation; tests substitute a
//! scripted one to pin the probe sequencing without a network.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{ClientError, Result};

/// HTTP methods used by the workflow API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
}

impl Method {
    /// Method name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
        }
    }
}

/// A fully built request: method, absolute URL, headers, optional body.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute request URL, base path included.
    pub url: String,
    /// Header name/value pairs, attached verbatim.
    pub headers: Vec<(&'static str, String)>,
    /// Body bytes, when the operation carries one.
    pub body: Option<Vec<u8>>,
}

/// A response, as far as this client cares: status code and body bytes.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw body bytes.
    pub body: Vec<u8>,
}

/// Transport used to execute requests.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one request and return the HTTP response, or
    /// [`ClientError::Transport`] if no HTTP-shaped response was produced.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Default transport backed by [`reqwest`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with a 30 second request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ClientError::Transport(Box::new(e)))?;
        Ok(Self { http })
    }

    /// Create a transport reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across clients).
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = self.http.request(request.method.into(), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::Transport(Box::new(e)))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::Transport(Box::new(e)))?
            .to_vec();

        Ok(HttpResponse { status, body })
    }
}
