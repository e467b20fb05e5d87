//! Random sample listings for seeding the store.

use rand::Rng;

use crate::{Listing, ListingStatus};

const STREET_NAMES: &[&str] = &[
    "Main", "1st", "2nd", "3rd", "Park", "Oak", "Maple", "Washington", "Cedar", "Walnut", "Sunset",
    "Church", "Lincoln", "Adams", "Cherry", "Marshall", "Airy", "Hill", "Forest", "Spruce",
    "Lafayette", "Ridge", "Markley", "Johnson", "Wilson", "Germantown", "Broad", "Jefferson",
    "Whitehall", "4th", "5th", "6th", "West", "East", "Burnside", "Sharon",
];

const STREET_TYPES: &[&str] = &["Street", "Avenue", "Boulevard", "Circle", "Lane", "Drive", "Way"];

const CITIES: &[&str] = &[
    "Springfield", "Riverside", "Franklin", "Greenville", "Bristol", "Clinton", "Fairview",
    "Salem", "Madison", "Georgetown", "Arlington", "Ashland",
];

const STATES: &[&str] = &[
    "Ohio", "Texas", "Oregon", "Virginia", "Georgia", "Michigan", "Kentucky", "Tennessee",
    "Minnesota", "Pennsylvania", "Wisconsin", "Colorado",
];

const BATHROOMS: &[f64] = &[1.0, 1.5, 2.0, 2.5, 3.0, 3.5];

const LOT_SIZES: &[f64] = &[
    0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.2, 1.3, 1.4, 1.5, 1.6, 1.7, 1.8, 1.9, 2.0,
];

const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890";

pub const ID_LEN: usize = 8;

fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// An 8-character listing number drawn from `[A-Z0-9]`.
pub fn generate_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ID_LEN)
        .map(|_| char::from(*pick(rng, ID_ALPHABET)))
        .collect()
}

pub fn generate_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{} {} {}, {}, {}, {:05}",
        rng.gen_range(0..10_000),
        pick(rng, STREET_NAMES),
        pick(rng, STREET_TYPES),
        pick(rng, CITIES),
        pick(rng, STATES),
        rng.gen_range(0..100_000),
    )
}

pub fn generate_listing<R: Rng + ?Sized>(rng: &mut R) -> Listing {
    Listing {
        listing_number: generate_id(rng),
        address: generate_address(rng),
        square_footage: rng.gen_range(500..10_000),
        price: rng.gen_range(0..1_500_000),
        num_bedrooms: rng.gen_range(1..8),
        num_bathrooms: *pick(rng, BATHROOMS),
        listing_status: *pick(rng, &ListingStatus::ALL),
        lot_size: *pick(rng, LOT_SIZES),
    }
}
