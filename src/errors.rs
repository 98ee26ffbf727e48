use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, bad queries, etc.) or the listings feed.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Listings are still loading")]
    Unavailable,
    #[error("Listings feed error: {0}")]
    Upstream(String),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Unavailable => 503,
            ServerError::Upstream(_) => 502,
            ServerError::InternalError => 500,
        }
    }
}
