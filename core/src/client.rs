//! Async client for the listing backend.
//!
//! # Design
//! `ListingClient` owns a `Transport` and nothing else; calls share no
//! mutable state. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a shared parse step that turns the
//! `HttpResponse` into the typed body, so request shapes can be checked
//! without any I/O.
//!
//! Operations come in two flavours. `try_*` methods return
//! `Result<_, RequestFailed>`. The plain methods never fail: they log the
//! error, hand `"<method> failed - <error>"` to the optional error callback
//! and resolve to `None`.

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ApiError, RequestFailed};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::types::{Listing, ListingQuery, NewListing};

/// Callback invoked with the formatted failure message when a call fails.
pub type ErrorCallback<'a> = &'a (dyn Fn(String) + Send + Sync);

const CREATE_LISTING: &str = "createListing";
const GET_PARAMETERIZED_LISTINGS: &str = "getParameterizedListings";
const GET_ALL_LISTINGS: &str = "getAllListings";
const DELETE_LISTING_BY_ID: &str = "deleteListingById";
const UPDATE_PRICE: &str = "updatePrice";
const UPDATE_STATUS: &str = "updateStatus";

/// Client for the listing backend's REST surface.
#[derive(Debug, Clone)]
pub struct ListingClient<T> {
    transport: T,
}

impl<T: Transport> ListingClient<T> {
    /// Attaches `transport` and runs `config.on_ready` before returning.
    pub fn new(transport: T, config: ClientConfig) -> Self {
        let client = Self { transport };
        if let Some(on_ready) = config.on_ready {
            on_ready();
        }
        client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // -- request builders --------------------------------------------------

    pub fn build_create_listing(&self, input: &NewListing) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Post, "/listing".to_string(), input)
    }

    /// Values are interpolated as-is; nothing is encoded or validated.
    pub fn build_get_parameterized_listings(&self, query: &ListingQuery) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!(
                "/listing/query?squareFootage={}&price={}&numBedrooms={}&numBathrooms={}&lotSize={}",
                query.square_footage, query.price, query.num_bedrooms, query.num_bathrooms, query.lot_size
            ),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_all_listings(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: "/listing".to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_delete_listing_by_id(&self, listing_number: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("/listing/{listing_number}"),
            headers: Vec::new(),
            body: None,
        }
    }

    /// The whole listing is sent, not just the price.
    pub fn build_update_price(&self, listing: &Listing) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Put, format!("/listing/price/{}", listing.price), listing)
    }

    /// The whole listing is sent, not just the status.
    pub fn build_update_status(&self, listing: &Listing) -> Result<HttpRequest, ApiError> {
        json_request(
            HttpMethod::Put,
            format!("/listing/listingStatus/{}", listing.listing_status),
            listing,
        )
    }

    // -- fallible operations -----------------------------------------------

    pub async fn try_create_listing(&self, input: &NewListing) -> Result<Listing, RequestFailed> {
        let request = self
            .build_create_listing(input)
            .map_err(|e| RequestFailed::new(CREATE_LISTING, e))?;
        self.execute(CREATE_LISTING, request).await
    }

    pub async fn try_get_parameterized_listings(
        &self,
        query: &ListingQuery,
    ) -> Result<Vec<Listing>, RequestFailed> {
        let request = self.build_get_parameterized_listings(query);
        self.execute(GET_PARAMETERIZED_LISTINGS, request).await
    }

    pub async fn try_get_all_listings(&self) -> Result<Vec<Listing>, RequestFailed> {
        let request = self.build_get_all_listings();
        self.execute(GET_ALL_LISTINGS, request).await
    }

    /// Resolves to whatever body the backend returns; `Null` when empty.
    pub async fn try_delete_listing_by_id(
        &self,
        listing_number: &str,
    ) -> Result<serde_json::Value, RequestFailed> {
        let request = self.build_delete_listing_by_id(listing_number);
        self.execute(DELETE_LISTING_BY_ID, request).await
    }

    pub async fn try_update_price(&self, listing: &Listing) -> Result<Listing, RequestFailed> {
        let request = self
            .build_update_price(listing)
            .map_err(|e| RequestFailed::new(UPDATE_PRICE, e))?;
        self.execute(UPDATE_PRICE, request).await
    }

    pub async fn try_update_status(&self, listing: &Listing) -> Result<Listing, RequestFailed> {
        let request = self
            .build_update_status(listing)
            .map_err(|e| RequestFailed::new(UPDATE_STATUS, e))?;
        self.execute(UPDATE_STATUS, request).await
    }

    // -- non-failing operations --------------------------------------------

    pub async fn create_listing(
        &self,
        input: &NewListing,
        error_callback: Option<ErrorCallback<'_>>,
    ) -> Option<Listing> {
        settle(self.try_create_listing(input).await, error_callback)
    }

    pub async fn get_parameterized_listings(
        &self,
        query: &ListingQuery,
        error_callback: Option<ErrorCallback<'_>>,
    ) -> Option<Vec<Listing>> {
        settle(self.try_get_parameterized_listings(query).await, error_callback)
    }

    pub async fn get_all_listings(&self, error_callback: Option<ErrorCallback<'_>>) -> Option<Vec<Listing>> {
        settle(self.try_get_all_listings().await, error_callback)
    }

    pub async fn delete_listing_by_id(
        &self,
        listing_number: &str,
        error_callback: Option<ErrorCallback<'_>>,
    ) -> Option<serde_json::Value> {
        settle(self.try_delete_listing_by_id(listing_number).await, error_callback)
    }

    pub async fn update_price(
        &self,
        listing: &Listing,
        error_callback: Option<ErrorCallback<'_>>,
    ) -> Option<Listing> {
        settle(self.try_update_price(listing).await, error_callback)
    }

    pub async fn update_status(
        &self,
        listing: &Listing,
        error_callback: Option<ErrorCallback<'_>>,
    ) -> Option<Listing> {
        settle(self.try_update_status(listing).await, error_callback)
    }

    async fn execute<R: DeserializeOwned>(
        &self,
        method: &'static str,
        request: HttpRequest,
    ) -> Result<R, RequestFailed> {
        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| RequestFailed::new(method, e))?;
        parse_body(response).map_err(|e| RequestFailed::new(method, e))
    }
}

fn json_request<B: serde::Serialize>(
    method: HttpMethod,
    path: String,
    body: &B,
) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(body).map_err(|e| ApiError::SerializationError(e.to_string()))?;
    Ok(HttpRequest {
        method,
        path,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

/// Any 2xx is success. An empty body decodes as JSON `null`.
fn parse_body<R: DeserializeOwned>(response: HttpResponse) -> Result<R, ApiError> {
    if !response.is_success() {
        return Err(ApiError::HttpError {
            status: response.status,
            body: response.body,
        });
    }
    let body = if response.body.trim().is_empty() {
        "null"
    } else {
        response.body.as_str()
    };
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

fn settle<R>(result: Result<R, RequestFailed>, error_callback: Option<ErrorCallback<'_>>) -> Option<R> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            handle_error(&error, error_callback);
            None
        }
    }
}

fn handle_error(error: &RequestFailed, error_callback: Option<ErrorCallback<'_>>) {
    tracing::error!(method = error.method, status = ?error.source.status(), "{error}");
    if let Some(message) = error.server_message() {
        tracing::error!(method = error.method, "{message}");
    }
    if let Some(callback) = error_callback {
        callback(error.to_string());
    }
}
