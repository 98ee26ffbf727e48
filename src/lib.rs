//! Sortable, server-rendered table of for-sale property listings.
//!
//! [`table`] holds the row model and the sort/selection controller. The
//! remaining modules fetch the listings, hold their load state and serve the
//! table over HTTP.

pub mod config;
pub mod errors;
pub mod feed;
pub mod query;
pub mod responses;
pub mod router;
pub mod source;
pub mod table;
pub mod templates;
