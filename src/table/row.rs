// src/table/row.rs

use serde::{Deserialize, Serialize};

// row
//  ├── address
//  │    └── street
//  ├── price
//  ├── property_type
//  ├── attributes
//  │    ├── bedrooms
//  │    ├── bathrooms
//  │    ├── garage_spaces
//  │    ├── land_size
//  │    └── description
//  └── listing_date

/// One property-for-sale record as received from the listings feed.
///
/// Every field is optional on the wire. Missing values are kept as `None`
/// here and substituted only when a field is resolved for sorting or display,
/// so a malformed row can never make deserialization or sorting fail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingRow {
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub attributes: Option<Attributes>,
    #[serde(default)]
    pub listing_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(default)]
    pub bedrooms: Option<f64>,
    #[serde(default)]
    pub bathrooms: Option<f64>,
    #[serde(default)]
    pub garage_spaces: Option<f64>,
    /// Free-form magnitude such as `"450sqm"`, or the literal `"None"`.
    #[serde(default)]
    pub land_size: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ListingRow {
    /// Row identity. Unique within one collection.
    pub fn street(&self) -> &str {
        self.address
            .as_ref()
            .and_then(|a| a.street.as_deref())
            .unwrap_or("")
    }

    pub fn description(&self) -> &str {
        self.attributes
            .as_ref()
            .and_then(|a| a.description.as_deref())
            .unwrap_or("")
    }

    pub(crate) fn attribute<'a, T>(
        &'a self,
        pick: impl FnOnce(&'a Attributes) -> Option<T>,
    ) -> Option<T> {
        self.attributes.as_ref().and_then(pick)
    }
}
