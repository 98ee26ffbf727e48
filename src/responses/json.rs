// responses/json.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use serde::Serialize;
use serde_json::json;

fn json_with_status(status: u16, body: Vec<u8>) -> ResultResp {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}

pub fn json_response<T: Serialize + ?Sized>(value: &T) -> ResultResp {
    let body = serde_json::to_vec(value).map_err(|_| ServerError::InternalError)?;
    json_with_status(200, body)
}

/// JSON counterpart of the HTML error page.
pub fn json_error_response(err: &ServerError) -> ResultResp {
    let body = serde_json::to_vec(&json!({ "error": err.to_string() }))
        .map_err(|_| ServerError::InternalError)?;
    json_with_status(err.status(), body)
}
