//! Wire-level tests for `ListingClient` over `ReqwestTransport`.
//!
//! These use wiremock to pin down the exact method, path, query string,
//! headers and body each operation puts on the wire, and that each call
//! issues exactly one request.

use std::sync::{Arc, Mutex};

use listing_core::{
    ClientConfig, HttpMethod, HttpRequest, Listing, ListingClient, ListingQuery, ListingStatus, NewListing,
    ReqwestTransport, Transport, TransportConfig,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> ListingClient<ReqwestTransport> {
    let transport = ReqwestTransport::new(TransportConfig::new(server.uri())).unwrap();
    ListingClient::new(transport, ClientConfig::default())
}

fn listing() -> Listing {
    Listing {
        listing_number: "Q7WE2R9T".to_string(),
        address: "880 Sunset Boulevard, Fairview, Oregon, 97030".to_string(),
        square_footage: 2_400,
        price: 610_000,
        num_bedrooms: 4,
        num_bathrooms: 3.0,
        listing_status: ListingStatus::ForSale,
        lot_size: 0.6,
    }
}

fn callback_log() -> (Arc<Mutex<Vec<String>>>, impl Fn(String) + Send + Sync) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    (calls, move |msg: String| sink.lock().unwrap().push(msg))
}

// =============================================================================
// Successful requests
// =============================================================================

#[tokio::test]
async fn get_all_listings_returns_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/listing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![listing()]))
        .expect(1)
        .mount(&server)
        .await;

    let listings = client(&server).get_all_listings(None).await;
    assert_eq!(listings, Some(vec![listing()]));
}

#[tokio::test]
async fn create_listing_posts_payload() {
    let server = MockServer::start().await;
    let input = NewListing {
        address: "3 Church Circle".to_string(),
        square_footage: 1_100,
        price: 199_000,
        num_bedrooms: 2,
        num_bathrooms: 1.5,
        listing_status: ListingStatus::ForSale,
        lot_size: 0.2,
    };
    Mock::given(method("POST"))
        .and(path("/listing"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "address": "3 Church Circle",
            "squareFootage": 1100,
            "price": 199000,
            "numBedrooms": 2,
            "numBathrooms": 1.5,
            "listingStatus": "For Sale",
            "lotSize": 0.2
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(listing()))
        .expect(1)
        .mount(&server)
        .await;

    let created = client(&server).create_listing(&input, None).await;
    assert_eq!(created, Some(listing()));
}

#[tokio::test]
async fn parameterized_query_sends_all_five_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/listing/query"))
        .and(query_param("squareFootage", "1500"))
        .and(query_param("price", "700000"))
        .and(query_param("numBedrooms", "3"))
        .and(query_param("numBathrooms", "2.5"))
        .and(query_param("lotSize", "0.5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![listing()]))
        .expect(1)
        .mount(&server)
        .await;

    let query = ListingQuery {
        square_footage: 1_500,
        price: 700_000,
        num_bedrooms: 3,
        num_bathrooms: 2.5,
        lot_size: 0.5,
    };
    let listings = client(&server).get_parameterized_listings(&query, None).await;
    assert_eq!(listings, Some(vec![listing()]));
}

#[tokio::test]
async fn delete_sends_no_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/listing/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": "5"})))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server).delete_listing_by_id("5", None).await;
    assert_eq!(result, Some(json!({"deleted": "5"})));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn update_price_puts_full_listing() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/listing/price/610000"))
        .and(body_json(serde_json::to_value(listing()).unwrap()))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing()))
        .expect(1)
        .mount(&server)
        .await;

    let updated = client(&server).update_price(&listing(), None).await;
    assert_eq!(updated, Some(listing()));
}

#[tokio::test]
async fn update_status_puts_full_listing() {
    let server = MockServer::start().await;
    let sold = Listing {
        listing_status: ListingStatus::Sold,
        ..listing()
    };
    Mock::given(method("PUT"))
        .and(path("/listing/listingStatus/Sold"))
        .and(body_json(serde_json::to_value(&sold).unwrap()))
        .respond_with(ResponseTemplate::new(200).set_body_json(&sold))
        .expect(1)
        .mount(&server)
        .await;

    let updated = client(&server).update_status(&sold, None).await;
    assert_eq!(updated, Some(sold));
}

#[tokio::test]
async fn status_with_space_is_percent_encoded_in_path() {
    let server = MockServer::start().await;
    let contracted = Listing {
        listing_status: ListingStatus::UnderContract,
        ..listing()
    };
    Mock::given(method("PUT"))
        .and(path("/listing/listingStatus/Under%20Contract"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&contracted))
        .expect(1)
        .mount(&server)
        .await;

    let updated = client(&server).update_status(&contracted, None).await;
    assert_eq!(updated, Some(contracted));
}

// =============================================================================
// Failures
// =============================================================================

#[tokio::test]
async fn server_error_message_reaches_callback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/listing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "not found"})))
        .expect(1)
        .mount(&server)
        .await;

    let (calls, callback) = callback_log();
    let result = client(&server).get_all_listings(Some(&callback)).await;

    assert!(result.is_none());
    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].starts_with("getAllListings failed - HTTP 404"));
    assert!(calls[0].contains("not found"));
}

#[tokio::test]
async fn server_error_is_exposed_by_try_variant() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/listing/price/610000"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "listing Q7WE2R9T not found"})))
        .mount(&server)
        .await;

    let err = client(&server).try_update_price(&listing()).await.unwrap_err();
    assert_eq!(err.method, "updatePrice");
    assert_eq!(err.server_message().as_deref(), Some("listing Q7WE2R9T not found"));
}

#[tokio::test]
async fn wrong_body_shape_resolves_to_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/listing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let (calls, callback) = callback_log();
    let input = NewListing {
        address: "x".to_string(),
        square_footage: 1,
        price: 1,
        num_bedrooms: 1,
        num_bathrooms: 1.0,
        listing_status: ListingStatus::Withdrawn,
        lot_size: 0.1,
    };
    let created = client(&server).create_listing(&input, Some(&callback)).await;

    assert!(created.is_none());
    assert!(calls.lock().unwrap()[0].starts_with("createListing failed - deserialization failed"));
}

// =============================================================================
// Transport
// =============================================================================

#[tokio::test]
async fn transport_returns_non_2xx_as_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/listing"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;

    let transport = ReqwestTransport::new(TransportConfig::new(format!("{}/", server.uri()))).unwrap();
    let response = transport
        .send(HttpRequest {
            method: HttpMethod::Get,
            path: "/listing".to_string(),
            headers: Vec::new(),
            body: None,
        })
        .await
        .unwrap();

    assert_eq!(response.status, 503);
    assert_eq!(response.body, "unavailable");
    assert!(!response.is_success());
}
