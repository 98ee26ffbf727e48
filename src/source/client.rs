// source/client.rs
use crate::config::Config;
use crate::source::{clean_nan_values, FetchError};
use crate::table::ListingRow;
use rand::Rng;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use url::Url;

const USER_AGENT: &str = concat!("listing_board/", env!("CARGO_PKG_VERSION"));

const MAX_BACKOFF_SECS: u64 = 10;
const JITTER_MAX_SECS: u64 = 2;

/// Where the listings collection comes from.
pub trait ListingSource: Send + Sync {
    fn fetch_listings(&self) -> Result<Vec<ListingRow>, FetchError>;
}

/// Blocking client for the suburb properties endpoint.
pub struct MicroburbsClient {
    client: Client,
    api_url: Url,
    api_token: String,
    suburb: String,
    property_type: String,
    max_attempts: u64,
}

impl MicroburbsClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_token: config.api_token.clone(),
            suburb: config.suburb.clone(),
            property_type: config.property_type.clone(),
            max_attempts: config.max_attempts.max(1),
        })
    }

    fn try_fetch(&self) -> Result<String, FetchError> {
        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.api_token))
            .map_err(|e| FetchError::Network(format!("Invalid API token: {e}")))?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let resp = self
            .client
            .get(self.api_url.clone())
            .headers(headers)
            .query(&[
                ("suburb", self.suburb.as_str()),
                ("property_type", self.property_type.as_str()),
            ])
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(text)
    }
}

impl ListingSource for MicroburbsClient {
    fn fetch_listings(&self) -> Result<Vec<ListingRow>, FetchError> {
        let mut last_err = None;

        for attempt in 1..=self.max_attempts {
            let start = Instant::now();

            match self.try_fetch() {
                Ok(body) => {
                    let rows = parse_listings(&body)?;
                    info!(
                        attempt,
                        rows = rows.len(),
                        elapsed = ?start.elapsed(),
                        suburb = %self.suburb,
                        "fetched listings"
                    );
                    return Ok(rows);
                }
                Err(e) if !is_retryable(&e) => return Err(e),
                Err(e) => {
                    warn!(attempt, elapsed = ?start.elapsed(), error = %e, "listings fetch failed");
                    last_err = Some(e);

                    if attempt < self.max_attempts {
                        let base = std::cmp::min(2 * attempt, MAX_BACKOFF_SECS);
                        let jitter = rand::thread_rng().gen_range(0..=JITTER_MAX_SECS);
                        std::thread::sleep(Duration::from_secs(base + jitter));
                    }
                }
            }
        }

        Err(last_err.unwrap_or_else(|| FetchError::Network("retry loop made no attempt".into())))
    }
}

/// Client errors will not change on retry.
fn is_retryable(err: &FetchError) -> bool {
    match err {
        FetchError::Network(_) => true,
        FetchError::Status { status, .. } => *status >= 500 || *status == 429,
        FetchError::JsonParse(_) | FetchError::UnexpectedShape(_) => false,
    }
}

/// Decodes a listings payload: either a bare array of rows or an object with
/// a `results` array. Rows that do not decode are skipped.
pub fn parse_listings(body: &str) -> Result<Vec<ListingRow>, FetchError> {
    let data: Value = serde_json::from_str(&clean_nan_values(body))
        .map_err(|e| FetchError::JsonParse(e.to_string()))?;

    let items = match data {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(FetchError::UnexpectedShape(
                    "results array missing".to_string(),
                ))
            }
        },
        other => {
            return Err(FetchError::UnexpectedShape(format!(
                "expected array or object, got {other}"
            )))
        }
    };

    let total = items.len();
    let rows: Vec<ListingRow> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(row) => Some(row),
            Err(e) => {
                warn!(index, error = %e, "skipping undecodable listing");
                None
            }
        })
        .collect();

    if rows.len() < total {
        warn!(kept = rows.len(), total, "some listings were skipped");
    }

    Ok(rows)
}
