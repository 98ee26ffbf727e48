// src/table/controller.rs

use crate::table::row::ListingRow;
use crate::table::sort::{derive_view, SortDirection, SortState};
use crate::table::sort_key::SortKey;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// Detail-view state. `Closed` until a row is activated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub selected_row: Option<ListingRow>,
    pub detail_view_open: bool,
}

/// One header cell as the rendering layer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: SortKey,
    pub label: &'static str,
    pub numeric: bool,
    /// Set on exactly one cell: the active column.
    pub sort: Option<SortDirection>,
}

/// Derived orders for one collection, keyed by sort state.
///
/// Shared by every table built over the same snapshot, so a collection is
/// sorted at most once per state no matter how many requests render it.
/// There are only `2 * SortKey::ALL.len()` states, so the map stays small.
#[derive(Debug)]
pub struct ViewCache {
    source: Arc<[ListingRow]>,
    orders: Mutex<HashMap<SortState, Arc<[usize]>>>,
    derivations: AtomicUsize,
}

impl ViewCache {
    pub fn new(rows: Arc<[ListingRow]>) -> Self {
        Self {
            source: rows,
            orders: Mutex::new(HashMap::new()),
            derivations: AtomicUsize::new(0),
        }
    }

    pub fn rows(&self) -> &Arc<[ListingRow]> {
        &self.source
    }

    /// Number of sorts run over this collection.
    pub fn derivations(&self) -> usize {
        self.derivations.load(Ordering::Relaxed)
    }

    /// The order for `state` and whether this call had to sort.
    fn order(&self, state: SortState) -> (Arc<[usize]>, bool) {
        let mut orders = self.orders.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(order) = orders.get(&state) {
            return (Arc::clone(order), false);
        }

        debug!(
            rows = self.source.len(),
            key = %state.active_key,
            direction = %state.direction,
            "deriving listing order"
        );
        let order: Arc<[usize]> = derive_view(&self.source, state).into();
        orders.insert(state, Arc::clone(&order));
        self.derivations.fetch_add(1, Ordering::Relaxed);
        (order, true)
    }
}

/// Sort and selection state over one listings collection.
///
/// Rows arrive once as a shared, never-edited slice. `None` means the feed has
/// not delivered yet, which is different from an empty collection. Ordered
/// views come from a [`ViewCache`] bound to the collection's identity.
#[derive(Debug, Default)]
pub struct SortableTable {
    views: Option<Arc<ViewCache>>,
    sort: SortState,
    selection: SelectionState,
    derivations: usize,
}

impl SortableTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Arc<[ListingRow]>) -> Self {
        Self::with_views(Arc::new(ViewCache::new(rows)))
    }

    /// A table that shares derived orders with every other table on `views`.
    pub fn with_views(views: Arc<ViewCache>) -> Self {
        Self {
            views: Some(views),
            ..Self::default()
        }
    }

    fn rows(&self) -> Option<&Arc<[ListingRow]>> {
        self.views.as_deref().map(ViewCache::rows)
    }

    /// Installs a new collection. A selection survives only if the new
    /// collection still has a row with the same street.
    pub fn replace_rows(&mut self, rows: Arc<[ListingRow]>) {
        if let Some(selected) = self.selection.selected_row.take() {
            self.selection.selected_row = rows
                .iter()
                .find(|row| row.street() == selected.street())
                .cloned();
            if self.selection.selected_row.is_none() {
                self.selection.detail_view_open = false;
            }
        }

        let same = self.rows().is_some_and(|current| Arc::ptr_eq(current, &rows));
        if !same {
            self.views = Some(Arc::new(ViewCache::new(rows)));
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.views.is_some()
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    /// Restores a previously rendered state, e.g. from a query string.
    pub fn set_sort_state(&mut self, state: SortState) {
        self.sort = state;
    }

    /// Header activation: flips the active column, or switches column in
    /// ascending order.
    pub fn request_sort(&mut self, key: SortKey) {
        self.sort = self.sort.toggled(key);
    }

    /// What `request_sort(key)` would leave behind, without applying it.
    pub fn sort_after_request(&self, key: SortKey) -> SortState {
        self.sort.toggled(key)
    }

    /// Rows in display order, or `None` while nothing has been loaded.
    pub fn visible_rows(&mut self) -> Option<Vec<&ListingRow>> {
        let views = self.views.as_deref()?;
        let (order, derived) = views.order(self.sort);
        if derived {
            self.derivations += 1;
        }

        let rows = views.rows();
        Some(order.iter().map(|&index| &rows[index]).collect())
    }

    /// Number of sorts this table triggered.
    pub fn derivations(&self) -> usize {
        self.derivations
    }

    pub fn header_cells(&self) -> Vec<HeaderCell> {
        SortKey::ALL
            .into_iter()
            .map(|key| HeaderCell {
                key,
                label: key.label(),
                numeric: key.is_numeric(),
                sort: (key == self.sort.active_key).then_some(self.sort.direction),
            })
            .collect()
    }

    pub fn select_row(&mut self, row: ListingRow) {
        self.selection.selected_row = Some(row);
        self.selection.detail_view_open = true;
    }

    /// Row activation by identity. Unknown streets are ignored.
    pub fn select_street(&mut self, street: &str) -> bool {
        let found = self
            .rows()
            .and_then(|rows| rows.iter().find(|row| row.street() == street))
            .cloned();

        match found {
            Some(row) => {
                self.select_row(row);
                true
            }
            None => {
                debug!(street, "selected street is not in the collection");
                false
            }
        }
    }

    /// Closes the detail view. The last selected row is kept.
    pub fn dismiss_detail(&mut self) {
        self.selection.detail_view_open = false;
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The row shown in the detail view, if it is open.
    pub fn detail(&self) -> Option<&ListingRow> {
        if self.selection.detail_view_open {
            self.selection.selected_row.as_ref()
        } else {
            None
        }
    }
}
