// templates/pages/listings.rs

use crate::query::ListingsQuery;
use crate::table::{SortDirection, SortKey, SortableTable};
use crate::templates::components::{card, refresh_button};
use crate::templates::desktop_layout;
use chrono::{DateTime, Utc};
use maud::{html, Markup};

/// Seconds between reloads while the feed is pending.
const LOADING_REFRESH_SECS: u32 = 2;

pub enum ListingsVm {
    Loading,
    Failed(String),
    Ready(TableVm),
}

pub struct TableVm {
    pub headers: Vec<HeaderVm>,
    pub rows: Vec<RowVm>,
    pub detail: Option<DetailVm>,
    pub fetched_at: DateTime<Utc>,
}

pub struct HeaderVm {
    pub label: &'static str,
    pub numeric: bool,
    pub sort: Option<SortDirection>,
    pub href: String,
}

pub struct RowVm {
    pub street: String,
    /// Display text and numeric flag, in `SortKey::ALL` order.
    pub cells: Vec<(String, bool)>,
    pub href: String,
}

pub struct DetailVm {
    pub street: String,
    pub description: String,
    pub close_href: String,
}

impl TableVm {
    /// Snapshot of a loaded table for rendering. `None` if the table has no rows yet.
    pub fn from_table(table: &mut SortableTable, fetched_at: DateTime<Utc>) -> Option<Self> {
        let sort = table.sort_state();
        let link = |selected: Option<&str>| {
            ListingsQuery {
                sort,
                selected: selected.map(str::to_string),
            }
            .href()
        };

        let headers = table
            .header_cells()
            .into_iter()
            .map(|cell| HeaderVm {
                label: cell.label,
                numeric: cell.numeric,
                sort: cell.sort,
                href: ListingsQuery {
                    sort: table.sort_after_request(cell.key),
                    selected: None,
                }
                .href(),
            })
            .collect();

        let detail = table.detail().map(|row| DetailVm {
            street: row.street().to_string(),
            description: row.description().to_string(),
            close_href: link(None),
        });

        let rows = table
            .visible_rows()?
            .into_iter()
            .map(|row| RowVm {
                street: row.street().to_string(),
                cells: SortKey::ALL
                    .into_iter()
                    .map(|key| (key.display(row), key.is_numeric()))
                    .collect(),
                href: link(Some(row.street())),
            })
            .collect();

        Some(Self {
            headers,
            rows,
            detail,
            fetched_at,
        })
    }
}

pub fn listings_page(vm: &ListingsVm) -> Markup {
    let refresh = matches!(vm, ListingsVm::Loading).then_some(LOADING_REFRESH_SECS);

    desktop_layout(
        "For Sale Properties",
        refresh,
        html! {
            h1 class="title" { "For Sale Properties" }

            @match vm {
                ListingsVm::Loading => {
                    section class="card" id="loading" aria-busy="true" {
                        p { "Loading listings…" }
                    }
                },
                ListingsVm::Failed(reason) => {
                    (card("Listings unavailable", html! {
                        p id="feed-error" { "Could not load listings: " (reason) }
                        (refresh_button())
                    }))
                },
                ListingsVm::Ready(table) => (listings_table(table)),
            }
        },
    )
}

fn sort_indicator(direction: SortDirection) -> Markup {
    let (arrow, label) = match direction {
        SortDirection::Ascending => ("▲", "sorted ascending"),
        SortDirection::Descending => ("▼", "sorted descending"),
    };
    html! {
        span class="sort-indicator" data-dir=(direction.as_str()) aria-label=(label) { " " (arrow) }
    }
}

fn aria_sort(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Ascending => "ascending",
        SortDirection::Descending => "descending",
    }
}

fn listings_table(vm: &TableVm) -> Markup {
    html! {
        div class="meta" {
            "Updated " (vm.fetched_at.format("%Y-%m-%d %H:%M UTC").to_string()) " "
            (refresh_button())
        }

        @if vm.rows.is_empty() {
            p class="empty" { "No listings" }
        } @else {
            table id="listings" {
                thead {
                    tr {
                        @for header in &vm.headers {
                            th
                                class=[header.numeric.then_some("num")]
                                aria-sort=[header.sort.map(aria_sort)]
                            {
                                a href=(header.href) {
                                    (header.label)
                                    @if let Some(direction) = header.sort {
                                        (sort_indicator(direction))
                                    }
                                }
                            }
                        }
                    }
                }
                tbody {
                    @for row in &vm.rows {
                        tr class="listing-row" data-street=(row.street) {
                            @for (index, (text, numeric)) in row.cells.iter().enumerate() {
                                td class=[numeric.then_some("num")] {
                                    @if index == 0 {
                                        a href=(row.href) { (text) }
                                    } @else {
                                        (text)
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        @if let Some(detail) = &vm.detail {
            dialog open class="detail" aria-labelledby="detail-title" {
                h2 id="detail-title" { "Property Description" }
                h3 { (detail.street) }
                p id="detail-description" { (detail.description) }
                a href=(detail.close_href) class="btn" { "Close" }
            }
        }
    }
}
