//! The HTTP implementation of [SalesApi].

use std::{collections::BTreeMap, time::Duration};

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::{
    Error,
    api::{
        ApiError, CategoryCount, MonthRequest, PriceRangeBucket, SalesApi, Statistics,
        Transaction, TransactionsRequest,
    },
    endpoints,
};

/// A [SalesApi] backed by a remote HTTP server.
///
/// Cloning is cheap, clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct HttpSalesApi {
    client: Client,
    /// The base URL without a trailing slash, e.g. "http://127.0.0.1:5000".
    base_url: String,
}

impl HttpSalesApi {
    /// Create a client for the API at `base_url`.
    ///
    /// Requests that take longer than `timeout` fail with [ApiError::Timeout].
    ///
    /// # Errors
    /// Returns an error if `base_url` is not an absolute HTTP(S) URL or the
    /// HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let url = Url::parse(base_url)
            .map_err(|error| Error::InvalidApiUrl(format!("{base_url}: {error}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::InvalidApiUrl(format!(
                "{base_url}: scheme must be http or https"
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| Error::HttpClient(error.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T, ApiError> {
        let url = Url::parse(&format!("{}{path_and_query}", self.base_url))
            .map_err(|error| ApiError::InvalidUrl(error.to_string()))?;

        tracing::debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl SalesApi for HttpSalesApi {
    async fn transactions(
        &self,
        request: &TransactionsRequest,
    ) -> Result<Vec<Transaction>, ApiError> {
        let path = request.path_and_query(endpoints::API_TRANSACTIONS)?;
        self.get_json(&path).await
    }

    async fn statistics(&self, request: &MonthRequest) -> Result<Statistics, ApiError> {
        let path = request.path_and_query(endpoints::API_STATISTICS)?;
        self.get_json(&path).await
    }

    async fn price_ranges(
        &self,
        request: &MonthRequest,
    ) -> Result<Vec<PriceRangeBucket>, ApiError> {
        let path = request.path_and_query(endpoints::API_BAR_CHART)?;
        self.get_json(&path).await
    }

    async fn categories(&self, request: &MonthRequest) -> Result<Vec<CategoryCount>, ApiError> {
        let path = request.path_and_query(endpoints::API_PIE_CHART)?;
        let counts: BTreeMap<String, u64> = self.get_json(&path).await?;

        Ok(CategoryCount::from_map(counts))
    }
}
