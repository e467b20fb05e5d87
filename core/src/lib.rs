//! Async API client core for the listing service.
//!
//! # Overview
//! `ListingClient` exposes the backend's listing CRUD endpoints to a front
//! end. Requests are built as plain `HttpRequest` values and executed by a
//! `Transport`; `ReqwestTransport` is the production one.
//!
//! # Design
//! - `ListingClient` holds only its transport; calls are independent.
//! - Each operation has a `build_*` method (produces the request), a
//!   `try_*` method (returns `Result`) and a plain method that never fails,
//!   reporting errors through logging and an optional callback instead.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::{ErrorCallback, ListingClient};
pub use config::{ClientConfig, TransportConfig};
pub use error::{ApiError, RequestFailed};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use transport::ReqwestTransport;
pub use types::{Listing, ListingQuery, ListingStatus, NewListing};
