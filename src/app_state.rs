//! Implements a struct that holds the state of the dashboard server.

use std::sync::Arc;

use crate::{
    Error,
    api::{HttpSalesApi, SalesApi},
    config::DashboardConfig,
    sequencing::ViewSequencer,
};

/// The state of the dashboard server.
#[derive(Clone)]
pub struct AppState {
    /// The source of the sales data.
    pub api: Arc<dyn SalesApi>,

    /// The config that controls loading and paging.
    pub config: DashboardConfig,

    /// Keeps overlapping event requests from the same page view in order.
    pub sequencer: ViewSequencer,
}

impl AppState {
    /// Create a new [AppState] that reads sales data from `api`.
    pub fn new(api: impl SalesApi + 'static, config: DashboardConfig) -> Self {
        let sequencer = ViewSequencer::new(config.max_tracked_views);

        Self {
            api: Arc::new(api),
            config,
            sequencer,
        }
    }

    /// Create a new [AppState] that reads sales data over HTTP from `config.api_url`.
    ///
    /// # Errors
    /// Returns an error if the API URL is invalid or the HTTP client cannot be built.
    pub fn from_config(config: DashboardConfig) -> Result<Self, Error> {
        let api = HttpSalesApi::new(&config.api_url, config.request_timeout)?;

        Ok(Self::new(api, config))
    }
}
