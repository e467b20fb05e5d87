//! Domain DTOs for the listing API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch any schema drift between the two crates. Field
//! names are renamed to the backend's camelCase on the wire.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Lifecycle state of a listing, carried on the wire as the backend's
/// display strings. Names outside the known four are kept verbatim in
/// `Other` so a listing with a new status still decodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListingStatus {
    ForSale,
    Sold,
    Withdrawn,
    UnderContract,
    Other(String),
}

impl ListingStatus {
    pub const ALL: [ListingStatus; 4] = [
        ListingStatus::ForSale,
        ListingStatus::Sold,
        ListingStatus::Withdrawn,
        ListingStatus::UnderContract,
    ];

    pub fn from_name(name: &str) -> Self {
        match name {
            "For Sale" => ListingStatus::ForSale,
            "Sold" => ListingStatus::Sold,
            "Withdrawn" => ListingStatus::Withdrawn,
            "Under Contract" => ListingStatus::UnderContract,
            other => ListingStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ListingStatus::ForSale => "For Sale",
            ListingStatus::Sold => "Sold",
            ListingStatus::Withdrawn => "Withdrawn",
            ListingStatus::UnderContract => "Under Contract",
            ListingStatus::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ListingStatus::Other(_))
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ListingStatus::from_name(s))
    }
}

impl Serialize for ListingStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ListingStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(ListingStatus::from_name(&name))
    }
}

/// A single listing as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
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

/// Request payload for creating a listing. The backend assigns the
/// listing number, so it is absent here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListing {
    pub address: String,
    pub square_footage: u32,
    pub price: u64,
    pub num_bedrooms: u32,
    pub num_bathrooms: f64,
    pub listing_status: ListingStatus,
    pub lot_size: f64,
}

/// Filter values for `GET /listing/query`. All five are always sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingQuery {
    pub square_footage: u32,
    pub price: u64,
    pub num_bedrooms: u32,
    pub num_bathrooms: f64,
    pub lot_size: f64,
}
