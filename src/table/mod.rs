pub mod controller;
pub mod format;
pub mod row;
pub mod sort;
pub mod sort_key;

pub use controller::{HeaderCell, SelectionState, SortableTable, ViewCache};
pub use format::format_land_size;
pub use row::ListingRow;
pub use sort::{derive_view, SortDirection, SortState};
pub use sort_key::SortKey;
