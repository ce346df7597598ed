use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::{
    api::{
        ApiError, CategoryCount, MonthRequest, PriceRangeBucket, SalesApi, Statistics,
        Transaction, TransactionsRequest,
    },
    endpoints,
};

type Hook = Arc<dyn Fn() + Send + Sync>;

/// A [SalesApi] that serves canned responses and records the path of every request.
#[derive(Clone)]
pub(crate) struct FakeSalesApi {
    requests: Arc<Mutex<Vec<String>>>,
    transactions: Result<Vec<Transaction>, ApiError>,
    statistics: Result<Statistics, ApiError>,
    price_ranges: Result<Vec<PriceRangeBucket>, ApiError>,
    categories: Result<Vec<CategoryCount>, ApiError>,
    on_request: Option<Hook>,
}

impl Default for FakeSalesApi {
    fn default() -> Self {
        Self {
            requests: Arc::default(),
            transactions: Ok(vec![book()]),
            statistics: Ok(Statistics {
                total_sale_amount: Some(100.0),
                total_sold_items: 1,
                total_not_sold_items: 0,
            }),
            price_ranges: Ok(vec![
                PriceRangeBucket {
                    price_range: "0-100".to_owned(),
                    count: 1,
                },
                PriceRangeBucket {
                    price_range: "101-200".to_owned(),
                    count: 0,
                },
            ]),
            categories: Ok(vec![CategoryCount {
                category: "Stationery".to_owned(),
                count: 1,
            }]),
            on_request: None,
        }
    }
}

impl FakeSalesApi {
    pub(crate) fn with_transactions(self, transactions: Result<Vec<Transaction>, ApiError>) -> Self {
        Self {
            transactions,
            ..self
        }
    }

    pub(crate) fn with_statistics(self, statistics: Result<Statistics, ApiError>) -> Self {
        Self { statistics, ..self }
    }

    pub(crate) fn with_price_ranges(
        self,
        price_ranges: Result<Vec<PriceRangeBucket>, ApiError>,
    ) -> Self {
        Self {
            price_ranges,
            ..self
        }
    }

    /// Run `hook` whenever a request is received, before responding.
    pub(crate) fn on_request(self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            on_request: Some(Arc::new(hook)),
            ..self
        }
    }

    /// The paths of all requests received so far, in order.
    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, path: Result<String, ApiError>) {
        self.requests.lock().unwrap().push(path.unwrap());

        if let Some(hook) = &self.on_request {
            hook();
        }
    }
}

#[async_trait]
impl SalesApi for FakeSalesApi {
    async fn transactions(
        &self,
        request: &TransactionsRequest,
    ) -> Result<Vec<Transaction>, ApiError> {
        self.record(request.path_and_query(endpoints::API_TRANSACTIONS));
        self.transactions.clone()
    }

    async fn statistics(&self, request: &MonthRequest) -> Result<Statistics, ApiError> {
        self.record(request.path_and_query(endpoints::API_STATISTICS));
        self.statistics.clone()
    }

    async fn price_ranges(
        &self,
        request: &MonthRequest,
    ) -> Result<Vec<PriceRangeBucket>, ApiError> {
        self.record(request.path_and_query(endpoints::API_BAR_CHART));
        self.price_ranges.clone()
    }

    async fn categories(&self, request: &MonthRequest) -> Result<Vec<CategoryCount>, ApiError> {
        self.record(request.path_and_query(endpoints::API_PIE_CHART));
        self.categories.clone()
    }
}

/// The transaction used in examples throughout the tests.
pub(crate) fn book() -> Transaction {
    Transaction {
        id: Some(1),
        title: "Book".to_owned(),
        description: "A book".to_owned(),
        price: 100.0,
        date_of_sale: "2024-03-01".to_owned(),
        sold: true,
        category: "Stationery".to_owned(),
    }
}

/// `count` distinct transactions.
pub(crate) fn transactions(count: usize) -> Vec<Transaction> {
    (0..count)
        .map(|i| Transaction {
            id: Some(i as i64),
            title: format!("Item {i}"),
            ..book()
        })
        .collect()
}
