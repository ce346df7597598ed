//! Issues the loads a view transition requires and collects their results.

use crate::{
    api::{
        ApiError, CategoryCount, MonthRequest, PriceRangeBucket, SalesApi, Statistics,
        Transaction, TransactionsRequest,
    },
    config::DashboardConfig,
    sequencing::Region,
    view_state::{Loads, ViewState},
};

/// The outcome of each load that was issued. `None` means the load was not needed.
#[derive(Debug, Default)]
pub(crate) struct LoadResults {
    pub transactions: Option<Result<Vec<Transaction>, ApiError>>,
    pub statistics: Option<Result<Statistics, ApiError>>,
    pub price_ranges: Option<Result<Vec<PriceRangeBucket>, ApiError>>,
    pub categories: Option<Result<Vec<CategoryCount>, ApiError>>,
}

impl LoadResults {
    /// Drop the results for `region`, e.g. because a newer event reloaded it.
    pub(crate) fn discard(&mut self, region: Region) {
        match region {
            Region::Transactions => self.transactions = None,
            Region::Month => {
                self.statistics = None;
                self.price_ranges = None;
                self.categories = None;
            }
        }
    }

    /// Whether there is nothing to render.
    pub(crate) fn is_empty(&self) -> bool {
        self.transactions.is_none()
            && self.statistics.is_none()
            && self.price_ranges.is_none()
            && self.categories.is_none()
    }
}

/// Issue the requested `loads` for `state` concurrently and wait for all of them.
///
/// The category chart follows the bar chart and is only loaded when enabled in `config`.
pub(crate) async fn run_loads(
    api: &dyn SalesApi,
    state: &ViewState,
    loads: Loads,
    config: &DashboardConfig,
) -> LoadResults {
    let month_request = MonthRequest::from_state(state);

    let transactions = async {
        if loads.transactions {
            let request = TransactionsRequest::from_state(state, config.page_size);
            Some(
                api.transactions(&request)
                    .await
                    .inspect_err(|error| warn_load_failed("transactions", state, error)),
            )
        } else {
            None
        }
    };

    let statistics = async {
        if loads.statistics {
            Some(
                api.statistics(&month_request)
                    .await
                    .inspect_err(|error| warn_load_failed("statistics", state, error)),
            )
        } else {
            None
        }
    };

    let price_ranges = async {
        if loads.bar_chart {
            Some(
                api.price_ranges(&month_request)
                    .await
                    .inspect_err(|error| warn_load_failed("price ranges", state, error)),
            )
        } else {
            None
        }
    };

    let categories = async {
        if loads.bar_chart && config.category_chart {
            Some(
                api.categories(&month_request)
                    .await
                    .inspect_err(|error| warn_load_failed("categories", state, error)),
            )
        } else {
            None
        }
    };

    let (transactions, statistics, price_ranges, categories) =
        tokio::join!(transactions, statistics, price_ranges, categories);

    LoadResults {
        transactions,
        statistics,
        price_ranges,
        categories,
    }
}

fn warn_load_failed(resource: &str, state: &ViewState, error: &ApiError) {
    tracing::warn!("could not load {resource} for {state:?}: {error}");
}
