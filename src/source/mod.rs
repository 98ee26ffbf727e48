mod client;
mod nan;
mod source_error;

pub use client::{ListingSource, MicroburbsClient};
pub use nan::clean_nan_values;
pub use source_error::FetchError;
