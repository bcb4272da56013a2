//! Scripted transport for tests that need the API without a server.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, TransportError};

enum Outcome {
    Respond(HttpResponse),
    Fail(TransportError),
    Hang,
}

/// Replays queued outcomes in order and records every request it receives.
#[derive(Default)]
pub struct ScriptedTransport {
    outcomes: Mutex<VecDeque<Outcome>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.outcomes.lock().push_back(Outcome::Respond(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }));
    }

    pub fn fail(&self, err: TransportError) {
        self.outcomes.lock().push_back(Outcome::Fail(err));
    }

    /// The next request never completes.
    pub fn hang(&self) {
        self.outcomes.lock().push_back(Outcome::Hang);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().push(request);
        let next = self.outcomes.lock().pop_front();
        match next {
            Some(Outcome::Respond(response)) => Ok(response),
            Some(Outcome::Fail(err)) => Err(err),
            Some(Outcome::Hang) => std::future::pending().await,
            None => Err(TransportError::new("no scripted response")),
        }
    }
}
