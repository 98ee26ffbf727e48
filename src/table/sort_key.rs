// src/table/sort_key.rs

use crate::table::format::format_land_size;
use crate::table::row::ListingRow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Display text for a numeric field the row does not carry.
pub const NOT_AVAILABLE: &str = "n/a";

/// A comparable scalar projected out of a row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    Number(f64),
    Text(&'a str),
}

impl SortValue<'_> {
    /// Natural order: numeric total order, or lexicographic for text.
    /// Every key yields a single variant, so the mixed arms only keep this total.
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            (SortValue::Number(_), SortValue::Text(_)) => Ordering::Less,
            (SortValue::Text(_), SortValue::Number(_)) => Ordering::Greater,
        }
    }
}

/// Sentinel for an absent numeric field. Sorts before every real value.
const MISSING_NUMBER: f64 = f64::NEG_INFINITY;

/// Sentinel for an absent text field. Sorts before every non-empty string.
const MISSING_TEXT: &str = "";

type Projection = for<'r> fn(&'r ListingRow) -> SortValue<'r>;

/// The sortable columns of the listings table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Street,
    Price,
    PropertyType,
    Bedrooms,
    Bathrooms,
    GarageSpaces,
    LandSize,
    ListingDate,
}

impl SortKey {
    /// Column order of the rendered table.
    pub const ALL: [SortKey; 8] = [
        SortKey::Street,
        SortKey::Price,
        SortKey::PropertyType,
        SortKey::Bedrooms,
        SortKey::Bathrooms,
        SortKey::GarageSpaces,
        SortKey::LandSize,
        SortKey::ListingDate,
    ];

    /// Dotted field path, also used as the `sort` query value.
    pub fn id(self) -> &'static str {
        match self {
            SortKey::Street => "address.street",
            SortKey::Price => "price",
            SortKey::PropertyType => "property_type",
            SortKey::Bedrooms => "attributes.bedrooms",
            SortKey::Bathrooms => "attributes.bathrooms",
            SortKey::GarageSpaces => "attributes.garage_spaces",
            SortKey::LandSize => "attributes.land_size",
            SortKey::ListingDate => "listing_date",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Street => "Address",
            SortKey::Price => "Price",
            SortKey::PropertyType => "Property Type",
            SortKey::Bedrooms => "Bedrooms",
            SortKey::Bathrooms => "Bathrooms",
            SortKey::GarageSpaces => "Garage Spaces",
            SortKey::LandSize => "Land Size",
            SortKey::ListingDate => "Listing Date",
        }
    }

    /// Numeric columns are right-aligned. Comparison is decided by the projection.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            SortKey::Price | SortKey::Bedrooms | SortKey::Bathrooms | SortKey::GarageSpaces
        )
    }

    fn projection(self) -> Projection {
        match self {
            SortKey::Street => street,
            SortKey::Price => price,
            SortKey::PropertyType => property_type,
            SortKey::Bedrooms => bedrooms,
            SortKey::Bathrooms => bathrooms,
            SortKey::GarageSpaces => garage_spaces,
            SortKey::LandSize => land_size,
            SortKey::ListingDate => listing_date,
        }
    }

    /// Resolves this key against `row`. Total: absent fields yield the sentinel.
    pub fn resolve(self, row: &ListingRow) -> SortValue<'_> {
        (self.projection())(row)
    }

    /// Cell text for this column.
    pub fn display(self, row: &ListingRow) -> String {
        match self {
            SortKey::LandSize => format_land_size(row.attribute(|a| a.land_size.as_deref())),
            _ => match self.resolve(row) {
                SortValue::Number(n) if n == MISSING_NUMBER => NOT_AVAILABLE.to_string(),
                SortValue::Number(n) => n.to_string(),
                SortValue::Text(s) => s.to_string(),
            },
        }
    }
}

fn street(row: &ListingRow) -> SortValue<'_> {
    SortValue::Text(row.street())
}

fn price(row: &ListingRow) -> SortValue<'_> {
    number(row.price)
}

fn property_type(row: &ListingRow) -> SortValue<'_> {
    text(row.property_type.as_deref())
}

fn bedrooms(row: &ListingRow) -> SortValue<'_> {
    number(row.attribute(|a| a.bedrooms))
}

fn bathrooms(row: &ListingRow) -> SortValue<'_> {
    number(row.attribute(|a| a.bathrooms))
}

fn garage_spaces(row: &ListingRow) -> SortValue<'_> {
    number(row.attribute(|a| a.garage_spaces))
}

fn land_size(row: &ListingRow) -> SortValue<'_> {
    text(row.attribute(|a| a.land_size.as_deref()))
}

fn listing_date(row: &ListingRow) -> SortValue<'_> {
    text(row.listing_date.as_deref())
}

fn number(value: Option<f64>) -> SortValue<'static> {
    SortValue::Number(value.unwrap_or(MISSING_NUMBER))
}

fn text(value: Option<&str>) -> SortValue<'_> {
    SortValue::Text(value.unwrap_or(MISSING_TEXT))
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key '{0}'")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.id() == s)
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}
