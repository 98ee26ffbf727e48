// query.rs
use crate::errors::ServerError;
use crate::table::{SortDirection, SortKey, SortState};
use tracing::debug;
use url::form_urlencoded;

/// Table state carried by the listings page URL:
/// `/?sort=<key id>&dir=asc|desc&selected=<street>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingsQuery {
    pub sort: SortState,
    pub selected: Option<String>,
}

impl ListingsQuery {
    /// Unknown sort keys fall back to the default column. A malformed `dir`
    /// is rejected.
    pub fn parse(query: Option<&str>) -> Result<Self, ServerError> {
        let mut parsed = ListingsQuery::default();
        let mut key = None;
        let mut direction = None;

        for (name, value) in form_urlencoded::parse(query.unwrap_or("").as_bytes()) {
            match name.as_ref() {
                "sort" => match value.parse::<SortKey>() {
                    Ok(k) => key = Some(k),
                    Err(e) => debug!(error = %e, "ignoring sort parameter"),
                },
                "dir" => {
                    let dir = value
                        .parse::<SortDirection>()
                        .map_err(|e| ServerError::BadRequest(e.to_string()))?;
                    direction = Some(dir);
                }
                "selected" if !value.is_empty() => parsed.selected = Some(value.into_owned()),
                _ => {}
            }
        }

        // A lone `dir` applies to the default column.
        if key.is_some() || direction.is_some() {
            parsed.sort = SortState {
                active_key: key.unwrap_or(parsed.sort.active_key),
                direction: direction.unwrap_or_default(),
            };
        }

        Ok(parsed)
    }

    pub fn href(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query
            .append_pair("sort", self.sort.active_key.id())
            .append_pair("dir", self.sort.direction.as_str());
        if let Some(street) = &self.selected {
            query.append_pair("selected", street);
        }
        format!("/?{}", query.finish())
    }
}
