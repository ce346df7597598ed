//! The boundary between the dashboard and the remote sales API.
//!
//! Requests are plain values built from a [ViewState](crate::ViewState) and
//! every call returns a [Result], so callers must handle failures explicitly.

mod client;
mod models;
mod request;

use async_trait::async_trait;

pub use client::HttpSalesApi;
pub use models::{CategoryCount, PriceRangeBucket, Statistics, Transaction};
pub use request::{MonthRequest, TransactionsRequest};

/// The ways a request to the sales API can fail.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request could not be sent or the connection failed.
    #[error("could not reach the sales API: {0}")]
    Request(String),

    /// The API did not respond within the configured timeout.
    #[error("the sales API did not respond in time")]
    Timeout,

    /// The API responded with a non-success status code.
    #[error("the sales API responded with status {0}")]
    Status(u16),

    /// The response body was not the expected JSON.
    #[error("could not read the sales API response: {0}")]
    Decode(String),

    /// The request URL could not be built.
    #[error("could not build the request URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ApiError::Timeout
        } else if error.is_decode() {
            ApiError::Decode(error.to_string())
        } else if let Some(status) = error.status() {
            ApiError::Status(status.as_u16())
        } else {
            ApiError::Request(error.to_string())
        }
    }
}

/// Read access to the sales data the dashboard displays.
#[async_trait]
pub trait SalesApi: Send + Sync {
    /// Get one page of transactions, in the order the API returns them.
    async fn transactions(
        &self,
        request: &TransactionsRequest,
    ) -> Result<Vec<Transaction>, ApiError>;

    /// Get the sale totals for a month.
    async fn statistics(&self, request: &MonthRequest) -> Result<Statistics, ApiError>;

    /// Get the number of items in each price range for a month.
    async fn price_ranges(&self, request: &MonthRequest)
    -> Result<Vec<PriceRangeBucket>, ApiError>;

    /// Get the number of items in each category for a month.
    async fn categories(&self, request: &MonthRequest) -> Result<Vec<CategoryCount>, ApiError>;
}
