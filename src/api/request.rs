//! Request values for the sales API, built purely from the view state.

use serde::Serialize;

use crate::{api::ApiError, view_state::ViewState};

/// The query for one page of transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionsRequest {
    /// Two-digit month code.
    pub month: String,
    /// Search text, sent even when empty.
    pub search: String,
    /// The 1-based page number.
    pub page: u64,
    /// Rows per page. Only sent when configured, otherwise the API default applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u64>,
}

impl TransactionsRequest {
    /// Build the request for the page described by `state`.
    pub fn from_state(state: &ViewState, per_page: Option<u64>) -> Self {
        Self {
            month: state.month.clone(),
            search: state.search.clone(),
            page: state.page,
            per_page,
        }
    }

    /// The path and query string for `route`, e.g. "/transactions?month=03&search=&page=1".
    ///
    /// # Errors
    /// Returns [ApiError::InvalidUrl] if the query cannot be URL-encoded.
    pub fn path_and_query(&self, route: &str) -> Result<String, ApiError> {
        encode_path(route, self)
    }
}

/// The query for the month-level summaries: statistics and charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthRequest {
    /// Two-digit month code.
    pub month: String,
}

impl MonthRequest {
    /// Build the request for the month selected in `state`.
    pub fn from_state(state: &ViewState) -> Self {
        Self {
            month: state.month.clone(),
        }
    }

    /// The path and query string for `route`, e.g. "/statistics?month=03".
    ///
    /// # Errors
    /// Returns [ApiError::InvalidUrl] if the query cannot be URL-encoded.
    pub fn path_and_query(&self, route: &str) -> Result<String, ApiError> {
        encode_path(route, self)
    }
}

fn encode_path<T: Serialize>(route: &str, query: &T) -> Result<String, ApiError> {
    let query = serde_urlencoded::to_string(query)
        .map_err(|error| ApiError::InvalidUrl(error.to_string()))?;

    Ok(format!("{route}?{query}"))
}
