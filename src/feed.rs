// feed.rs
use crate::source::{FetchError, ListingSource};
use crate::table::{ListingRow, ViewCache};
use chrono::{DateTime, Utc};
use std::sync::{Arc, PoisonError, RwLock};
use std::thread::JoinHandle;
use tracing::{error, info, warn};

/// One delivered listings collection. The rows are never edited; a reload
/// publishes a new snapshot with a new `Arc`.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub rows: Arc<[ListingRow]>,
    /// Sorted orders of `rows`, shared by every request that renders them.
    pub views: Arc<ViewCache>,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub enum FeedState {
    /// Nothing delivered yet.
    Pending,
    Ready(Snapshot),
    /// The first load failed; there is no data to show.
    Failed(String),
}

/// Load state of the listings collection, shared by all request handlers.
#[derive(Debug)]
pub struct ListingFeed {
    state: RwLock<FeedState>,
}

impl Default for ListingFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingFeed {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(FeedState::Pending),
        }
    }

    /// A feed that already holds `rows`.
    pub fn ready(rows: Vec<ListingRow>) -> Self {
        let feed = Self::new();
        feed.publish(rows);
        feed
    }

    pub fn state(&self) -> FeedState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn publish(&self, rows: Vec<ListingRow>) {
        let rows: Arc<[ListingRow]> = rows.into();
        let snapshot = Snapshot {
            views: Arc::new(ViewCache::new(Arc::clone(&rows))),
            rows,
            fetched_at: Utc::now(),
        };
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = FeedState::Ready(snapshot);
    }

    /// Fetches from `source` and publishes the result.
    ///
    /// A failure only replaces the state when there is no snapshot to keep.
    pub fn reload(&self, source: &dyn ListingSource) -> Result<usize, FetchError> {
        match source.fetch_listings() {
            Ok(rows) => {
                let count = rows.len();
                self.publish(rows);
                info!(rows = count, "listings feed ready");
                Ok(count)
            }
            Err(e) => {
                let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
                if let FeedState::Ready(_) = *state {
                    warn!(error = %e, "reload failed, keeping previous listings");
                } else {
                    error!(error = %e, "listings feed failed");
                    *state = FeedState::Failed(e.to_string());
                }
                Err(e)
            }
        }
    }

    /// Runs the first load on a background thread.
    pub fn spawn_initial_load(
        self: &Arc<Self>,
        source: Arc<dyn ListingSource>,
    ) -> std::io::Result<JoinHandle<()>> {
        let feed = Arc::clone(self);

        std::thread::Builder::new()
            .name("listings-feed".into())
            .spawn(move || {
                info!("loading listings");
                // Errors are recorded in the feed state.
                let _ = feed.reload(source.as_ref());
            })
    }
}
