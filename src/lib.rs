//! Salesboard is a web dashboard for browsing the transactions of a sales API.
//!
//! The dashboard shows one month at a time: a searchable, paged table of
//! transactions, the month's sale totals and a chart of items per price range.
//! Pages are rendered on the server and updated with htmx, and all sales data
//! is read from a remote HTTP API.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod api;
mod app_state;
mod config;
mod dashboard;
mod endpoints;
mod html;
mod logging;
mod not_found;
mod routing;
mod sequencing;
mod view_state;

#[cfg(test)]
mod test_utils;

pub use api::{
    ApiError, CategoryCount, HttpSalesApi, MonthRequest, PriceRangeBucket, SalesApi, Statistics,
    Transaction, TransactionsRequest,
};
pub use app_state::AppState;
pub use config::{DEFAULT_PAGE_SIZE, DashboardConfig};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use sequencing::{Region, Ticket, ViewId, ViewSequencer};
pub use view_state::{DEFAULT_MONTH, FIRST_PAGE, Loads, Transition, ViewEvent, ViewState};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("could not listen for the ctrl+c signal: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(error) => {
                tracing::error!("could not listen for the terminate signal: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur while setting up the application.
///
/// Failed loads from the sales API are not errors at this level, see [ApiError].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The sales API URL is not an absolute http or https URL.
    #[error("invalid sales API URL {0}")]
    InvalidApiUrl(String),

    /// The HTTP client for the sales API could not be created.
    #[error("could not create the HTTP client: {0}")]
    HttpClient(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("An unexpected error occurred: {}", self);

        let page = html::error_view(
            "Internal Server Error",
            "500",
            "Sorry, something went wrong.",
            "Try again later or check the server logs.",
        );

        (StatusCode::INTERNAL_SERVER_ERROR, Html(page.into_string())).into_response()
    }
}
