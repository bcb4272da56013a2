//! Configured API client: one round trip per call, failures normalized.

use std::sync::Arc;

use crate::client::{error_from_response, ItemClient};
use crate::config::ClientConfig;
use crate::error::{failure_message, ApiError};
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{ReqwestTransport, Transport, TransportError};

/// Pairs the pure `ItemClient` with a `Transport`.
///
/// `send` is the only place where transport errors and non-2xx statuses are
/// turned into `ApiError`, and the only place they are logged.
#[derive(Clone)]
pub struct ApiClient {
    items: ItemClient,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(base_url: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            items: ItemClient::new(base_url),
            transport,
        }
    }

    /// Production client: `reqwest` with the configured timeout.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        let transport = ReqwestTransport::new(config).map_err(transport_failure)?;
        Ok(Self::new(&config.base_url, Arc::new(transport)))
    }

    pub fn items(&self) -> &ItemClient {
        &self.items
    }

    pub async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method;
        let url = request.path.clone();

        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(err) => {
                let err = transport_failure(err);
                tracing::error!(%method, %url, error = %err, "API error");
                return Err(err);
            }
        };

        if !response.is_success() {
            let err = error_from_response(&response);
            tracing::error!(%method, %url, status = response.status, error = %err, "API error");
            return Err(err);
        }
        Ok(response)
    }
}

fn transport_failure(err: TransportError) -> ApiError {
    ApiError::Transport {
        message: failure_message(None, Some(&err.message)),
        timed_out: err.timed_out,
    }
}
