//! Application router configuration.

use axum::{Router, routing::get};

use crate::{
    AppState,
    dashboard::{
        get_dashboard_page, month_changed, next_page, previous_page, search_changed,
    },
    endpoints,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::MONTH_CHANGED, get(month_changed))
        .route(endpoints::SEARCH_CHANGED, get(search_changed))
        .route(endpoints::PREVIOUS_PAGE, get(previous_page))
        .route(endpoints::NEXT_PAGE, get(next_page))
        .fallback(get_404_not_found)
        .with_state(state)
}
