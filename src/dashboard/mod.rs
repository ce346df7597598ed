//! Dashboard module
//!
//! Provides the sales dashboard page: a month selector, a search box, the
//! transactions table with paging, summary statistics and the price range chart.
//! UI events are handled by dedicated endpoints that respond with the regions
//! of the page that need to change.

mod charts;
mod controller;
mod handlers;
mod statistics;
mod table;
mod view;

pub use handlers::{get_dashboard_page, month_changed, next_page, previous_page, search_changed};

/// The month codes and names offered by the month selector, in calendar order.
pub(crate) const MONTHS: [(&str, &str); 12] = [
    ("01", "January"),
    ("02", "February"),
    ("03", "March"),
    ("04", "April"),
    ("05", "May"),
    ("06", "June"),
    ("07", "July"),
    ("08", "August"),
    ("09", "September"),
    ("10", "October"),
    ("11", "November"),
    ("12", "December"),
];

/// The display name for a month code, or the code itself if it is not a known month.
pub(crate) fn month_name(month: &str) -> &str {
    MONTHS
        .iter()
        .find(|(code, _)| *code == month)
        .map_or(month, |(_, name)| *name)
}

/// Where a rendered region goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    /// Part of a full page.
    InPage,
    /// Part of an event response, swapped into the page by its id.
    OutOfBand,
}

impl Placement {
    /// The value of the `hx-swap-oob` attribute, if one is needed.
    pub(crate) fn swap_oob(self) -> Option<&'static str> {
        match self {
            Placement::InPage => None,
            Placement::OutOfBand => Some("true"),
        }
    }

    pub(crate) fn is_out_of_band(self) -> bool {
        self == Placement::OutOfBand
    }
}
