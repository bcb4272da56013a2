//! API client core for the catalog items service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (`ItemClient`), executes them through a pluggable
//! `Transport`, and exposes the five item operations through
//! `ItemRepository`.
//!
//! # Design
//! - `ItemClient` is stateless; it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `ApiClient` owns the transport and is the single place where failures
//!   are normalized into `ApiError` and logged.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod repository;
pub mod transport;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use api::ApiClient;
pub use client::ItemClient;
pub use config::{ClientConfig, ConfigError};
pub use error::{failure_message, ApiError, FALLBACK_MESSAGE};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use repository::ItemRepository;
pub use transport::{ReqwestTransport, Transport, TransportError};
pub use types::{Item, ItemId, ItemInput};
