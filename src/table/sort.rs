// src/table/sort.rs

use crate::table::row::ListingRow;
use crate::table::sort_key::{SortKey, SortValue};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Query-string form.
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    /// Applies this direction to a value comparison.
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("sort direction must be 'asc' or 'desc', got '{0}'")]
pub struct InvalidDirection(pub String);

impl FromStr for SortDirection {
    type Err = InvalidDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Ascending),
            "desc" => Ok(SortDirection::Descending),
            other => Err(InvalidDirection(other.to_string())),
        }
    }
}

/// Active column and direction of the listings table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortState {
    pub active_key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            active_key: SortKey::Price,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortState {
    /// The state after a header activation on `key`: the active column flips
    /// direction, any other column becomes active in ascending order.
    pub fn toggled(self, key: SortKey) -> Self {
        if key == self.active_key {
            Self {
                active_key: key,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                active_key: key,
                direction: SortDirection::Ascending,
            }
        }
    }
}

/// Orders `rows` by `state` and returns the input indices in display order.
///
/// Only the value comparison follows the direction. Rows with equal values
/// keep their input order in both directions, so this is stable either way.
pub fn derive_view(rows: &[ListingRow], state: SortState) -> Vec<usize> {
    let SortState {
        active_key,
        direction,
    } = state;

    let mut decorated: Vec<(SortValue<'_>, usize)> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| (active_key.resolve(row), index))
        .collect();

    decorated.sort_by(|(va, ia), (vb, ib)| {
        direction
            .apply(va.natural_cmp(vb))
            .then_with(|| ia.cmp(ib))
    });

    decorated.into_iter().map(|(_, index)| index).collect()
}
