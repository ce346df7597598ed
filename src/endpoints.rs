//! The endpoint URIs served by the dashboard and the ones it requests from the sales API.

/// The dashboard page. Accepts optional `month`, `search` and `page` query parameters.
pub const DASHBOARD_VIEW: &str = "/";
/// The event sent when the month selector changes.
pub const MONTH_CHANGED: &str = "/events/month";
/// The event sent when the search box changes.
pub const SEARCH_CHANGED: &str = "/events/search";
/// The event sent when the previous-page button is clicked.
pub const PREVIOUS_PAGE: &str = "/events/previous-page";
/// The event sent when the next-page button is clicked.
pub const NEXT_PAGE: &str = "/events/next-page";

/// The sales API route listing transactions for a month, search text and page.
pub const API_TRANSACTIONS: &str = "/transactions";
/// The sales API route with the sale totals for a month.
pub const API_STATISTICS: &str = "/statistics";
/// The sales API route with item counts per price range for a month.
pub const API_BAR_CHART: &str = "/bar-chart";
/// The sales API route with item counts per category for a month.
pub const API_PIE_CHART: &str = "/pie-chart";
