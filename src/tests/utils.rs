use crate::feed::ListingFeed;
use crate::router::{handle, App};
use crate::source::{FetchError, ListingSource};
use crate::table::row::{Address, Attributes};
use crate::table::ListingRow;
use astra::{Body, Request, Response};
use http::Request as HttpRequest;
use http::Method;
use std::io::Read;
use std::sync::Arc;

/// A listing with a street, a price and a description derived from the street.
pub fn listing(street: &str, price: f64) -> ListingRow {
    ListingRow {
        address: Some(Address {
            street: Some(street.to_string()),
        }),
        price: Some(price),
        property_type: Some("House".to_string()),
        attributes: Some(Attributes {
            bedrooms: Some(3.0),
            bathrooms: Some(2.0),
            garage_spaces: Some(1.0),
            land_size: Some("450sqm".to_string()),
            description: Some(format!("Description of {street}")),
        }),
        listing_date: Some("2024-01-15".to_string()),
    }
}

/// Source that always answers with the same rows or the same failure.
pub struct StaticSource {
    result: Result<Vec<ListingRow>, String>,
}

impl StaticSource {
    pub fn rows(rows: Vec<ListingRow>) -> Self {
        Self { result: Ok(rows) }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            result: Err(reason.to_string()),
        }
    }
}

impl ListingSource for StaticSource {
    fn fetch_listings(&self) -> Result<Vec<ListingRow>, FetchError> {
        self.result
            .clone()
            .map_err(FetchError::Network)
    }
}

pub fn make_app(feed: ListingFeed, source: StaticSource) -> App {
    App {
        feed: Arc::new(feed),
        source: Arc::new(source),
    }
}

/// The price example: two tied rows after a more expensive one.
pub fn tied_prices_app() -> App {
    let rows = vec![
        listing("1 First St", 500000.0),
        listing("2 Second St", 300000.0),
        listing("3 Third St", 300000.0),
    ];
    make_app(ListingFeed::ready(rows), StaticSource::rows(Vec::new()))
}

pub fn request(method: Method, uri: &str) -> Request {
    HttpRequest::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get(app: &App, uri: &str) -> Response {
    handle(request(Method::GET, uri), app).expect("Handler failed")
}

pub fn body_string(resp: &mut Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}
