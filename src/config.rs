//! Settings that control how the dashboard talks to the sales API and pages its data.

use std::time::Duration;

use crate::view_state::DEFAULT_MONTH;

/// The number of transactions per page the sales API uses when none is requested.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// The config for the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// The base URL of the sales API, e.g. "http://127.0.0.1:5000".
    pub api_url: String,
    /// The month to show when a page is opened without one.
    pub default_month: String,
    /// The rows per page to request. When `None` the API default is used and
    /// [DEFAULT_PAGE_SIZE] is assumed.
    pub page_size: Option<u64>,
    /// How long to wait for the sales API before showing an error.
    pub request_timeout: Duration,
    /// Whether to load and show the items-per-category chart.
    pub category_chart: bool,
    /// The maximum number of page views whose requests are kept in order.
    pub max_tracked_views: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:5000".to_owned(),
            default_month: DEFAULT_MONTH.to_owned(),
            page_size: None,
            request_timeout: Duration::from_secs(10),
            category_chart: false,
            max_tracked_views: 1024,
        }
    }
}

impl DashboardConfig {
    /// The number of rows a full page of transactions has.
    ///
    /// A page with fewer rows is the last one.
    pub fn rows_per_page(&self) -> u64 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}
