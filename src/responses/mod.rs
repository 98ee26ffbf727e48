pub mod html;
pub mod json;

pub use crate::errors::ResultResp;

// Normal HTML response
pub use html::{html_response, see_other};
pub use json::{json_error_response, json_response};
