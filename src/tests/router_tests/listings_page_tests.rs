// src/tests/router_tests/listings_page_tests.rs

use crate::errors::ServerError;
use crate::feed::{FeedState, ListingFeed};
use crate::router::handle;
use crate::table::row::{Address, Attributes};
use crate::table::ListingRow;
use crate::templates::html_error_response;
use crate::tests::utils::{body_string, get, listing, make_app, request, tied_prices_app, StaticSource};
use http::Method;
use scraper::{Html, Selector};

fn page(app: &crate::router::App, uri: &str) -> Html {
    let mut resp = get(app, uri);
    assert_eq!(resp.status(), 200);
    Html::parse_document(&body_string(&mut resp))
}

fn select<'a>(doc: &'a Html, css: &str) -> Vec<scraper::ElementRef<'a>> {
    let selector = Selector::parse(css).unwrap();
    doc.select(&selector).collect()
}

fn row_streets(doc: &Html) -> Vec<String> {
    select(doc, "tr.listing-row")
        .into_iter()
        .map(|tr| tr.value().attr("data-street").unwrap().to_string())
        .collect()
}

fn text(el: &scraper::ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Sorts run so far over the feed's current snapshot.
fn sorts(app: &crate::router::App) -> usize {
    match app.feed.state() {
        FeedState::Ready(snapshot) => snapshot.views.derivations(),
        other => panic!("expected Ready, got {other:?}"),
    }
}

#[test]
fn pending_feed_renders_loading_state() {
    let app = make_app(ListingFeed::new(), StaticSource::rows(Vec::new()));

    let doc = page(&app, "/");

    assert_eq!(select(&doc, "#loading").len(), 1);
    assert!(select(&doc, "table").is_empty());
    assert_eq!(select(&doc, r#"meta[http-equiv="refresh"]"#).len(), 1);
}

#[test]
fn failed_feed_renders_error_card() {
    let feed = ListingFeed::new();
    let source = StaticSource::failing("upstream unreachable");
    let _ = feed.reload(&source);
    let app = make_app(feed, source);

    let doc = page(&app, "/");

    let error = select(&doc, "#feed-error");
    assert_eq!(error.len(), 1);
    assert!(text(&error[0]).contains("upstream unreachable"));
    assert!(select(&doc, "#loading").is_empty());
}

#[test]
fn empty_feed_is_not_a_loading_state() {
    let app = make_app(ListingFeed::ready(Vec::new()), StaticSource::rows(Vec::new()));

    let doc = page(&app, "/");

    assert_eq!(select(&doc, "p.empty").len(), 1);
    assert!(select(&doc, "#loading").is_empty());
}

#[test]
fn default_order_is_price_ascending_with_stable_ties() {
    let doc = page(&tied_prices_app(), "/");

    assert_eq!(
        row_streets(&doc),
        ["2 Second St", "3 Third St", "1 First St"]
    );
}

#[test]
fn descending_price_keeps_tied_rows_in_input_order() {
    let doc = page(&tied_prices_app(), "/?sort=price&dir=desc");

    assert_eq!(
        row_streets(&doc),
        ["1 First St", "2 Second St", "3 Third St"]
    );
}

#[test]
fn direction_alone_sorts_the_default_column() {
    let doc = page(&tied_prices_app(), "/?dir=desc");

    assert_eq!(
        row_streets(&doc),
        ["1 First St", "2 Second St", "3 Third St"]
    );
    let sorted = select(&doc, "th[aria-sort]");
    assert!(text(&sorted[0]).starts_with("Price"));
    assert_eq!(sorted[0].value().attr("aria-sort"), Some("descending"));
}

#[test]
fn changing_the_selection_does_not_resort() {
    let app = tied_prices_app();

    page(&app, "/?selected=1+First+St");
    page(&app, "/?selected=2+Second+St");
    page(&app, "/");
    assert_eq!(sorts(&app), 1);

    page(&app, "/?sort=price&dir=desc");
    page(&app, "/?sort=price&dir=desc&selected=3+Third+St");
    assert_eq!(sorts(&app), 2);
}

#[test]
fn exactly_one_header_carries_the_sort_indicator() {
    let doc = page(&tied_prices_app(), "/?sort=listing_date&dir=desc");

    let sorted = select(&doc, "th[aria-sort]");
    assert_eq!(sorted.len(), 1);
    assert_eq!(sorted[0].value().attr("aria-sort"), Some("descending"));
    assert!(text(&sorted[0]).starts_with("Listing Date"));
    let indicator = select(&doc, ".sort-indicator");
    assert_eq!(indicator.len(), 1);
    assert_eq!(indicator[0].value().attr("data-dir"), Some("desc"));
}

#[test]
fn ready_page_shows_the_fetch_time() {
    let doc = page(&tied_prices_app(), "/");

    let meta = select(&doc, "div.meta");
    assert!(text(&meta[0]).starts_with("Updated 20"));
    assert!(text(&meta[0]).contains(" UTC"));
}

#[test]
fn header_links_toggle_or_switch_the_sort() {
    let doc = page(&tied_prices_app(), "/");

    let links: Vec<String> = select(&doc, "th a")
        .into_iter()
        .map(|a| a.value().attr("href").unwrap().to_string())
        .collect();

    assert_eq!(links.len(), 8);
    assert_eq!(links[0], "/?sort=address.street&dir=asc");
    // Price is active and ascending, so its link flips it.
    assert_eq!(links[1], "/?sort=price&dir=desc");
}

#[test]
fn numeric_columns_are_right_aligned() {
    let doc = page(&tied_prices_app(), "/");

    let numeric: Vec<String> = select(&doc, "th.num")
        .iter()
        .map(text)
        .collect();

    assert_eq!(
        numeric,
        ["Price ▲", "Bedrooms", "Bathrooms", "Garage Spaces"]
    );
}

#[test]
fn missing_attributes_display_not_available() {
    let bare = ListingRow {
        address: Some(Address {
            street: Some("5 Bare Ln".into()),
        }),
        price: Some(1.0),
        attributes: Some(Attributes {
            land_size: Some("None".into()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let app = make_app(ListingFeed::ready(vec![bare]), StaticSource::rows(Vec::new()));

    let doc = page(&app, "/");

    let cells: Vec<String> = select(&doc, "tr.listing-row td").iter().map(text).collect();
    assert_eq!(cells[3], "n/a");
    assert_eq!(cells[4], "n/a");
    assert_eq!(cells[5], "n/a");
    assert_eq!(cells[6], "n/a");
}

#[test]
fn land_size_is_formatted_for_display() {
    let mut row = listing("7 Acre Ave", 1.0);
    if let Some(attrs) = row.attributes.as_mut() {
        attrs.land_size = Some("450.2 m2".into());
    }
    let app = make_app(ListingFeed::ready(vec![row]), StaticSource::rows(Vec::new()));

    let doc = page(&app, "/");

    let cells: Vec<String> = select(&doc, "tr.listing-row td").iter().map(text).collect();
    assert_eq!(cells[6], "451 m²");
}

#[test]
fn selected_row_opens_the_detail_view() {
    let app = tied_prices_app();

    let doc = page(&app, "/?sort=price&dir=desc&selected=3+Third+St");

    let description = select(&doc, "#detail-description");
    assert_eq!(description.len(), 1);
    assert_eq!(text(&description[0]), "Description of 3 Third St");

    let close = select(&doc, "dialog.detail a");
    assert_eq!(
        close[0].value().attr("href"),
        Some("/?sort=price&dir=desc")
    );
}

#[test]
fn row_links_select_the_row_and_keep_the_sort() {
    let doc = page(&tied_prices_app(), "/?sort=address.street&dir=asc");

    let first = select(&doc, "tr.listing-row a");
    assert_eq!(
        first[0].value().attr("href"),
        Some("/?sort=address.street&dir=asc&selected=1+First+St")
    );
    assert!(select(&doc, "dialog").is_empty());
}

#[test]
fn unknown_selection_leaves_the_detail_view_closed() {
    let doc = page(&tied_prices_app(), "/?selected=42+Missing+Rd");

    assert!(select(&doc, "dialog").is_empty());
    assert_eq!(row_streets(&doc).len(), 3);
}

#[test]
fn unknown_sort_key_uses_default_order() {
    let doc = page(&tied_prices_app(), "/?sort=attributes.pool");

    assert_eq!(
        row_streets(&doc),
        ["2 Second St", "3 Third St", "1 First St"]
    );
}

#[test]
fn malformed_direction_is_rejected() {
    let result = handle(request(Method::GET, "/?sort=price&dir=up"), &tied_prices_app());

    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn error_page_shows_the_error_message() {
    let mut resp = html_error_response(ServerError::BadRequest("invalid direction".into()));

    assert_eq!(resp.status(), 400);
    let doc = Html::parse_document(&body_string(&mut resp));
    let message = select(&doc, "p.error-message");
    assert_eq!(text(&message[0]), "Bad Request: invalid direction");
}

#[test]
fn unknown_route_is_not_found() {
    let result = handle(request(Method::GET, "/nowhere"), &tied_prices_app());

    assert!(matches!(result, Err(ServerError::NotFound)));
}
