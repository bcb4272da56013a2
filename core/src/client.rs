//! Stateless HTTP request builder and response parser for the items API.
//!
//! # Design
//! `ItemClient` holds only a `base_url` and carries no mutable state between
//! calls. Each CRUD operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Executing the round trip is left to a `Transport` (see `api.rs`), keeping
//! this module deterministic and free of I/O.

use serde::de::DeserializeOwned;

use crate::error::{failure_message, server_message, ApiError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Item, ItemId, ItemInput};

const JSON_CONTENT_TYPE: (&str, &str) = ("content-type", "application/json");

/// Synchronous, stateless client for the items API.
#[derive(Debug, Clone)]
pub struct ItemClient {
    base_url: String,
}

impl ItemClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_items(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/items".to_string(), None)
    }

    pub fn build_get_item(&self, id: &ItemId) -> HttpRequest {
        self.request(HttpMethod::Get, format!("/items/{id}"), None)
    }

    pub fn build_create_item(&self, input: &ItemInput) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(self.request(HttpMethod::Post, "/items".to_string(), Some(body)))
    }

    pub fn build_update_item(&self, id: &ItemId, input: &ItemInput) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(self.request(HttpMethod::Put, format!("/items/{id}"), Some(body)))
    }

    pub fn build_delete_item(&self, id: &ItemId) -> HttpRequest {
        self.request(HttpMethod::Delete, format!("/items/{id}"), None)
    }

    /// A JSON body that is not an array yields an empty list rather than an
    /// error.
    pub fn parse_list_items(&self, response: HttpResponse) -> Result<Vec<Item>, ApiError> {
        check_success(&response)?;
        let value: serde_json::Value = decode(&response.body)?;
        if !value.is_array() {
            tracing::warn!(body = %response.body, "list response is not an array, treating as empty");
            return Ok(Vec::new());
        }
        serde_json::from_value(value).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_get_item(&self, response: HttpResponse) -> Result<Item, ApiError> {
        check_success(&response)?;
        decode(&response.body)
    }

    pub fn parse_create_item(&self, response: HttpResponse) -> Result<Item, ApiError> {
        check_success(&response)?;
        decode(&response.body)
    }

    pub fn parse_update_item(&self, response: HttpResponse) -> Result<Item, ApiError> {
        check_success(&response)?;
        decode(&response.body)
    }

    /// Only 200 and 204 count as a successful delete.
    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<bool, ApiError> {
        check_success(&response)?;
        match response.status {
            200 | 204 => Ok(true),
            status => Err(ApiError::DeleteRejected { status }),
        }
    }

    fn request(&self, method: HttpMethod, path: String, body: Option<String>) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: vec![(JSON_CONTENT_TYPE.0.to_string(), JSON_CONTENT_TYPE.1.to_string())],
            body,
        }
    }
}

/// Turns a non-2xx response into the normalized `ApiError::Server`.
pub fn error_from_response(response: &HttpResponse) -> ApiError {
    let from_server = server_message(&response.body);
    let from_transport = format!("request failed with status code {}", response.status);
    ApiError::Server {
        status: response.status,
        message: failure_message(from_server.as_deref(), Some(&from_transport)),
    }
}

fn check_success(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        Ok(())
    } else {
        Err(error_from_response(response))
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}
