//! Dashboard HTTP handlers.
//!
//! This module contains:
//! - The handler for displaying the full dashboard page
//! - One handler per UI event, which responds with the regions that changed
//! - The query types used by the handlers

use std::sync::Arc;

use axum::{
    extract::{FromRef, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_htmx::{HxReplaceUrl, HxRequest};
use serde::Deserialize;

use crate::{
    AppState,
    api::SalesApi,
    config::DashboardConfig,
    endpoints,
    sequencing::{Region, Ticket, ViewId, ViewSequencer},
    view_state::{FIRST_PAGE, ViewEvent, ViewState},
};

use super::{
    controller::run_loads,
    view::{dashboard_page, event_fragments},
};

/// The state needed for displaying and updating the dashboard page.
#[derive(Clone)]
pub struct DashboardState {
    /// The source of the sales data.
    pub api: Arc<dyn SalesApi>,
    /// Controls the default month, page size and optional charts.
    pub config: DashboardConfig,
    /// Keeps overlapping event responses in order.
    pub sequencer: ViewSequencer,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
            config: state.config.clone(),
            sequencer: state.sequencer.clone(),
        }
    }
}

/// The optional view state in the dashboard URL, e.g. from a bookmark.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Two-digit month code.
    pub month: Option<String>,
    /// Search text.
    #[serde(default)]
    pub search: String,
    /// The 1-based page number.
    pub page: Option<String>,
}

/// The view state form submitted with every UI event.
#[derive(Debug, Default, Deserialize)]
pub struct EventQuery {
    /// Two-digit month code. For month events this is the newly selected month.
    pub month: Option<String>,
    /// Search text. For search events this is the new text.
    #[serde(default)]
    pub search: String,
    /// The page shown when the event happened.
    pub page: Option<String>,
    /// The page view that sent the event.
    pub view: Option<ViewId>,
}

fn view_state_from(
    month: Option<&str>,
    search: &str,
    page: Option<&str>,
    default_month: &str,
) -> ViewState {
    let month = month
        .filter(|month| !month.is_empty())
        .unwrap_or(default_month);

    ViewState::new(month)
        .with_search(search)
        .with_page(parse_page(page))
}

/// Read a page number from the URL. Anything that is not a page number, such
/// as "" or "-1", is read as the first page.
fn parse_page(page: Option<&str>) -> u64 {
    page.and_then(|page| page.trim().parse().ok()).unwrap_or(FIRST_PAGE)
}

impl PageQuery {
    fn view_state(&self, default_month: &str) -> ViewState {
        view_state_from(
            self.month.as_deref(),
            &self.search,
            self.page.as_deref(),
            default_month,
        )
    }
}

impl EventQuery {
    fn view_state(&self, default_month: &str) -> ViewState {
        view_state_from(
            self.month.as_deref(),
            &self.search,
            self.page.as_deref(),
            default_month,
        )
    }
}

/// Display the dashboard with all loads done for the state in the URL.
pub async fn get_dashboard_page(
    State(state): State<DashboardState>,
    Query(query): Query<PageQuery>,
) -> Response {
    let view_state = query.view_state(&state.config.default_month);
    let view = state.sequencer.register_view();
    let transition = view_state.apply(ViewEvent::Initial);

    tracing::debug!("rendering page view {view} for {:?}", transition.state);

    let results = run_loads(
        state.api.as_ref(),
        &transition.state,
        transition.loads,
        &state.config,
    )
    .await;

    dashboard_page(
        &transition.state,
        view,
        &results,
        state.config.rows_per_page(),
    )
    .into_response()
}

/// Handle a change of the month selector.
pub async fn month_changed(
    State(state): State<DashboardState>,
    HxRequest(is_htmx): HxRequest,
    Query(query): Query<EventQuery>,
) -> Response {
    let month = query
        .view_state(&state.config.default_month)
        .month;

    handle_event(state, is_htmx, query, ViewEvent::MonthChanged(month)).await
}

/// Handle a change of the search text.
pub async fn search_changed(
    State(state): State<DashboardState>,
    HxRequest(is_htmx): HxRequest,
    Query(query): Query<EventQuery>,
) -> Response {
    let search = query.search.clone();

    handle_event(state, is_htmx, query, ViewEvent::SearchChanged(search)).await
}

/// Handle a click on the previous-page button.
pub async fn previous_page(
    State(state): State<DashboardState>,
    HxRequest(is_htmx): HxRequest,
    Query(query): Query<EventQuery>,
) -> Response {
    handle_event(state, is_htmx, query, ViewEvent::PreviousPage).await
}

/// Handle a click on the next-page button.
pub async fn next_page(
    State(state): State<DashboardState>,
    HxRequest(is_htmx): HxRequest,
    Query(query): Query<EventQuery>,
) -> Response {
    handle_event(state, is_htmx, query, ViewEvent::NextPage).await
}

/// Apply `event` to the submitted state, run the loads it requires and
/// respond with the regions that changed.
///
/// Browsers without htmx are redirected to the page for the new state. Events
/// that change nothing get an empty `204 No Content` response, which htmx does
/// not swap. Regions that a newer event from the same page view has reloaded in
/// the meantime are left out, and if nothing is left the response is also `204`.
async fn handle_event(
    state: DashboardState,
    is_htmx: bool,
    query: EventQuery,
    event: ViewEvent,
) -> Response {
    let current = query.view_state(&state.config.default_month);
    let transition = current.apply(event);
    let url = transition.state.to_url(endpoints::DASHBOARD_VIEW);

    if !is_htmx {
        return Redirect::to(&url).into_response();
    }

    if transition.is_noop() {
        return StatusCode::NO_CONTENT.into_response();
    }

    let view = query
        .view
        .unwrap_or_else(|| state.sequencer.register_view());
    let tickets: Vec<Ticket> = [
        (Region::Transactions, transition.loads.transactions),
        (Region::Month, transition.loads.reloads_month()),
    ]
    .into_iter()
    .filter(|(_, reloaded)| *reloaded)
    .map(|(region, _)| state.sequencer.issue(view, region))
    .collect();

    let mut results = run_loads(
        state.api.as_ref(),
        &transition.state,
        transition.loads,
        &state.config,
    )
    .await;

    for ticket in tickets {
        if !state.sequencer.is_latest(ticket) {
            tracing::debug!("discarding stale results for {ticket:?}");
            results.discard(ticket.region);
        }
    }

    if results.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }

    let fragments = event_fragments(
        &transition.state,
        view,
        &results,
        state.config.rows_per_page(),
    );

    // The URL holds the search text and page, which only the transactions follow.
    if results.transactions.is_some() {
        (HxReplaceUrl(url), fragments).into_response()
    } else {
        fragments.into_response()
    }
}
