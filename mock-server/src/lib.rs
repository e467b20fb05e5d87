use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

pub mod generator;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListingStatus {
    #[serde(rename = "For Sale")]
    ForSale,
    #[serde(rename = "Sold")]
    Sold,
    #[serde(rename = "Withdrawn")]
    Withdrawn,
    #[serde(rename = "Under Contract")]
    UnderContract,
}

impl ListingStatus {
    pub const ALL: [ListingStatus; 4] = [
        ListingStatus::ForSale,
        ListingStatus::Sold,
        ListingStatus::Withdrawn,
        ListingStatus::UnderContract,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ListingStatus::ForSale => "For Sale",
            ListingStatus::Sold => "Sold",
            ListingStatus::Withdrawn => "Withdrawn",
            ListingStatus::UnderContract => "Under Contract",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub listing_number: String,
    pub address: String,
    pub square_footage: u32,
    pub price: u64,
    pub num_bedrooms: u32,
    pub num_bathrooms: f64,
    pub listing_status: ListingStatus,
    pub lot_size: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListing {
    pub address: String,
    pub square_footage: u32,
    pub price: u64,
    pub num_bedrooms: u32,
    pub num_bathrooms: f64,
    pub listing_status: ListingStatus,
    pub lot_size: f64,
}

/// Minimums on size and rooms, a maximum on price.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingFilter {
    pub square_footage: u32,
    pub price: u64,
    pub num_bedrooms: u32,
    pub num_bathrooms: f64,
    pub lot_size: f64,
}

impl ListingFilter {
    pub fn matches(&self, listing: &Listing) -> bool {
        listing.square_footage >= self.square_footage
            && listing.price <= self.price
            && listing.num_bedrooms >= self.num_bedrooms
            && listing.num_bathrooms >= self.num_bathrooms
            && listing.lot_size >= self.lot_size
    }
}

/// Error body shape the front end reads `message` from.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
}

pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn not_found(listing_number: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: format!("listing {listing_number} not found"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorMessage { message: self.message })).into_response()
    }
}

pub type Db = Arc<RwLock<HashMap<String, Listing>>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router over a store pre-populated with `listings`.
pub fn app_with(listings: Vec<Listing>) -> Router {
    let db: Db = Arc::new(RwLock::new(
        listings
            .into_iter()
            .map(|l| (l.listing_number.clone(), l))
            .collect(),
    ));
    Router::new()
        .route("/listing", get(list_listings).post(create_listing))
        .route("/listing/query", get(query_listings))
        .route("/listing/{listing_number}", delete(delete_listing))
        .route("/listing/price/{price}", put(update_price))
        .route("/listing/listingStatus/{status}", put(update_status))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Vec::new()).await
}

pub async fn run_with(listener: TcpListener, listings: Vec<Listing>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(listings)).await
}

fn sorted(mut listings: Vec<Listing>) -> Vec<Listing> {
    listings.sort_by(|a, b| a.listing_number.cmp(&b.listing_number));
    listings
}

async fn list_listings(State(db): State<Db>) -> Json<Vec<Listing>> {
    let listings = db.read().await;
    Json(sorted(listings.values().cloned().collect()))
}

async fn query_listings(
    State(db): State<Db>,
    Query(filter): Query<ListingFilter>,
) -> Json<Vec<Listing>> {
    let listings = db.read().await;
    Json(sorted(
        listings.values().filter(|l| filter.matches(l)).cloned().collect(),
    ))
}

async fn create_listing(
    State(db): State<Db>,
    Json(input): Json<CreateListing>,
) -> (StatusCode, Json<Listing>) {
    let mut listings = db.write().await;
    let mut rng = rand::thread_rng();
    let listing_number = loop {
        let id = generator::generate_id(&mut rng);
        if !listings.contains_key(&id) {
            break id;
        }
    };
    let listing = Listing {
        listing_number,
        address: input.address,
        square_footage: input.square_footage,
        price: input.price,
        num_bedrooms: input.num_bedrooms,
        num_bathrooms: input.num_bathrooms,
        listing_status: input.listing_status,
        lot_size: input.lot_size,
    };
    tracing::info!(listing_number = %listing.listing_number, "listing created");
    listings.insert(listing.listing_number.clone(), listing.clone());
    (StatusCode::CREATED, Json(listing))
}

async fn delete_listing(
    State(db): State<Db>,
    Path(listing_number): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut listings = db.write().await;
    listings
        .remove(&listing_number)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| ApiError::not_found(&listing_number))
}

async fn replace(db: &Db, listing: Listing) -> Result<Json<Listing>, ApiError> {
    let mut listings = db.write().await;
    let stored = listings
        .get_mut(&listing.listing_number)
        .ok_or_else(|| ApiError::not_found(&listing.listing_number))?;
    *stored = listing;
    Ok(Json(stored.clone()))
}

async fn update_price(
    State(db): State<Db>,
    Path(price): Path<u64>,
    Json(mut listing): Json<Listing>,
) -> Result<Json<Listing>, ApiError> {
    listing.price = price;
    replace(&db, listing).await
}

async fn update_status(
    State(db): State<Db>,
    Path(status): Path<String>,
    Json(mut listing): Json<Listing>,
) -> Result<Json<Listing>, ApiError> {
    listing.listing_status = ListingStatus::from_name(&status).ok_or_else(|| ApiError {
        status: StatusCode::BAD_REQUEST,
        message: format!("unknown listing status: {status}"),
    })?;
    replace(&db, listing).await
}
