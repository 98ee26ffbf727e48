use crate::errors::ServerError;
use crate::feed::{FeedState, ListingFeed};
use crate::query::ListingsQuery;
use crate::responses::{html_response, json_error_response, json_response, see_other, ResultResp};
use crate::source::ListingSource;
use crate::table::SortableTable;
use crate::templates::pages::{listings_page, ListingsVm, TableVm};
use astra::Request;
use std::sync::Arc;
use tracing::{debug, warn};

/// Shared state handed to every request.
pub struct App {
    pub feed: Arc<ListingFeed>,
    pub source: Arc<dyn ListingSource>,
}

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    debug!(method, path, "request");

    match (method, path) {
        ("GET", "/") => listings(req.uri().query(), &app.feed),
        ("GET", "/api/listings") => {
            api_listings(&app.feed).or_else(|err| json_error_response(&err))
        }
        ("POST", "/refresh") => refresh(app),
        _ => Err(ServerError::NotFound),
    }
}

fn listings(query: Option<&str>, feed: &ListingFeed) -> ResultResp {
    let query = ListingsQuery::parse(query)?;

    let vm = match feed.state() {
        FeedState::Pending => ListingsVm::Loading,
        FeedState::Failed(reason) => ListingsVm::Failed(reason),
        FeedState::Ready(snapshot) => {
            let mut table = SortableTable::with_views(snapshot.views);
            table.set_sort_state(query.sort);
            if let Some(street) = &query.selected {
                table.select_street(street);
            }
            let vm = TableVm::from_table(&mut table, snapshot.fetched_at)
                .ok_or(ServerError::InternalError)?;
            ListingsVm::Ready(vm)
        }
    };

    html_response(listings_page(&vm))
}

fn api_listings(feed: &ListingFeed) -> ResultResp {
    match feed.state() {
        FeedState::Pending => Err(ServerError::Unavailable),
        FeedState::Failed(reason) => Err(ServerError::Upstream(reason)),
        FeedState::Ready(snapshot) => json_response(&*snapshot.rows),
    }
}

fn refresh(app: &App) -> ResultResp {
    if let Err(e) = app.feed.reload(app.source.as_ref()) {
        warn!(error = %e, "manual refresh failed");
    }
    see_other("/")
}
