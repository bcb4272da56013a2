//! Executes `HttpRequest` values against the network.
//!
//! `Transport` is the only seam in the core that performs I/O. Tests swap in
//! scripted implementations; production code uses `ReqwestTransport`.

use async_trait::async_trait;
use thiserror::Error;

use crate::config::ClientConfig;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// The request never produced a response.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
    pub timed_out: bool,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timed_out: false,
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timed_out: true,
        }
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs one round trip. Any status code, including 4xx/5xx, is a
    /// response; only a request that never completed is an error.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// `reqwest`-backed transport with the configured request timeout.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::new(e.to_string()))?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.http.get(&request.path),
            HttpMethod::Post => self.http.post(&request.path),
            HttpMethod::Put => self.http.put(&request.path),
            HttpMethod::Delete => self.http.delete(&request.path),
        };
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(to_transport_error)?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| Some((k.as_str().to_string(), v.to_str().ok()?.to_string())))
            .collect();
        let body = response.text().await.map_err(to_transport_error)?;

        Ok(HttpResponse { status, headers, body })
    }
}

fn to_transport_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::timeout(err.to_string())
    } else {
        TransportError::new(err.to_string())
    }
}
