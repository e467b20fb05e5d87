//! Construction-time configuration for the client and its transport.

use std::fmt;

/// Environment variable consulted by `TransportConfig::from_env`.
pub const BASE_URL_ENV: &str = "LISTING_API_URL";

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Options recognized by `ListingClient::new`.
#[derive(Default)]
pub struct ClientConfig {
    /// Invoked once, synchronously, as soon as the transport is attached.
    pub on_ready: Option<Box<dyn FnOnce() + Send>>,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_on_ready(mut self, on_ready: impl FnOnce() + Send + 'static) -> Self {
        self.on_ready = Some(Box::new(on_ready));
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("on_ready", &self.on_ready.is_some())
            .finish()
    }
}

/// Where `ReqwestTransport` sends requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    pub base_url: String,
}

impl TransportConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Reads `LISTING_API_URL`, falling back to `DEFAULT_BASE_URL`.
    pub fn from_env() -> Self {
        Self::new(std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()))
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
