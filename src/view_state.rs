//! The state of a dashboard page view and the reducer that applies UI events to it.
//!
//! A [ViewState] is an immutable record. Every UI event produces a
//! [Transition]: the next state and the set of [Loads] that must be issued to
//! bring the page in line with it. Nothing here talks to the network.

use serde::{Deserialize, Serialize};

/// The month shown when a page view starts without one.
pub const DEFAULT_MONTH: &str = "03";

/// The first page of transactions.
pub const FIRST_PAGE: u64 = 1;

/// The month, search text and page number that parameterise every load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Two-digit month code, e.g. "03". Passed to the API as-is.
    pub month: String,
    /// Free text used to filter transactions. Passed to the API as-is.
    pub search: String,
    /// The 1-based page of transactions.
    pub page: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_MONTH)
    }
}

impl ViewState {
    /// Create the state for the first page of `month` with no search text.
    pub fn new(month: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            search: String::new(),
            page: FIRST_PAGE,
        }
    }

    /// Set the search text.
    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self
        }
    }

    /// Set the page, reading anything below the first page as the first page.
    pub fn with_page(self, page: u64) -> Self {
        Self {
            page: page.max(FIRST_PAGE),
            ..self
        }
    }

    /// Apply `event` and return the next state and the loads it requires.
    pub fn apply(&self, event: ViewEvent) -> Transition {
        match event {
            ViewEvent::Initial => Transition {
                state: self.clone(),
                loads: Loads::ALL,
            },
            ViewEvent::MonthChanged(month) => Transition {
                state: Self {
                    month,
                    page: FIRST_PAGE,
                    ..self.clone()
                },
                loads: Loads::ALL,
            },
            ViewEvent::SearchChanged(search) => Transition {
                state: Self {
                    search,
                    page: FIRST_PAGE,
                    ..self.clone()
                },
                loads: Loads::TRANSACTIONS,
            },
            ViewEvent::PreviousPage if self.page > FIRST_PAGE => Transition {
                state: Self {
                    page: self.page - 1,
                    ..self.clone()
                },
                loads: Loads::TRANSACTIONS,
            },
            ViewEvent::PreviousPage => Transition {
                state: self.clone(),
                loads: Loads::NONE,
            },
            ViewEvent::NextPage => Transition {
                state: Self {
                    page: self.page.saturating_add(1),
                    ..self.clone()
                },
                loads: Loads::TRANSACTIONS,
            },
        }
    }

    /// Encode the state as a URL query string, e.g. "month=03&search=&page=1".
    pub fn to_query_string(&self) -> String {
        serde_urlencoded::to_string(self)
            .inspect_err(|error| tracing::error!("could not encode view state {self:?}: {error}"))
            .unwrap_or_default()
    }

    /// Build a URL for `route` that restores this state.
    pub fn to_url(&self, route: &str) -> String {
        format!("{route}?{}", self.to_query_string())
    }
}

/// A user interaction with the dashboard controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// The page was opened.
    Initial,
    /// The month selector changed to the given month code.
    MonthChanged(String),
    /// The search box changed to the given text.
    SearchChanged(String),
    /// The previous-page button was clicked.
    PreviousPage,
    /// The next-page button was clicked.
    NextPage,
}

/// Which loads an event requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Loads {
    /// Reload the transactions table.
    pub transactions: bool,
    /// Reload the summary statistics.
    pub statistics: bool,
    /// Reload the price range bar chart.
    pub bar_chart: bool,
}

impl Loads {
    /// No loads.
    pub const NONE: Self = Self {
        transactions: false,
        statistics: false,
        bar_chart: false,
    };

    /// Every load.
    pub const ALL: Self = Self {
        transactions: true,
        statistics: true,
        bar_chart: true,
    };

    /// Only the transactions table.
    pub const TRANSACTIONS: Self = Self {
        transactions: true,
        statistics: false,
        bar_chart: false,
    };

    /// Whether no loads are required.
    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }

    /// Whether any of the regions that depend only on the month are reloaded.
    pub fn reloads_month(self) -> bool {
        self.statistics || self.bar_chart
    }
}

/// The result of applying a [ViewEvent] to a [ViewState].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The state after the event.
    pub state: ViewState,
    /// The loads needed to render `state`.
    pub loads: Loads,
}

impl Transition {
    /// An event that changes nothing and requires no requests.
    pub fn is_noop(&self) -> bool {
        self.loads.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_MONTH, Loads, ViewEvent, ViewState};

    #[test]
    fn default_state_is_first_page_of_march_without_search() {
        let state = ViewState::default();

        assert_eq!(state.month, DEFAULT_MONTH);
        assert_eq!(state.search, "");
        assert_eq!(state.page, 1);
    }

    #[test]
    fn initial_load_requires_every_load() {
        let state = ViewState::default();

        let transition = state.apply(ViewEvent::Initial);

        assert_eq!(transition.state, state);
        assert_eq!(transition.loads, Loads::ALL);
    }

    #[test]
    fn month_change_resets_page_and_loads_everything() {
        let state = ViewState::new("03").with_search("lamp").with_page(4);

        let transition = state.apply(ViewEvent::MonthChanged("07".to_owned()));

        assert_eq!(
            transition.state,
            ViewState::new("07").with_search("lamp").with_page(1)
        );
        assert_eq!(transition.loads, Loads::ALL);
        assert!(transition.loads.reloads_month());
    }

    #[test]
    fn search_change_resets_page_and_loads_only_transactions() {
        let state = ViewState::new("07").with_page(3);

        let transition = state.apply(ViewEvent::SearchChanged("lamp".to_owned()));

        assert_eq!(
            transition.state,
            ViewState::new("07").with_search("lamp").with_page(1)
        );
        assert_eq!(transition.loads, Loads::TRANSACTIONS);
        assert!(!transition.loads.statistics);
        assert!(!transition.loads.bar_chart);
        assert!(!transition.loads.reloads_month());
    }

    #[test]
    fn search_text_is_kept_verbatim() {
        let state = ViewState::default();

        let transition = state.apply(ViewEvent::SearchChanged("  <b>50% off</b> ".to_owned()));

        assert_eq!(transition.state.search, "  <b>50% off</b> ");
    }

    #[test]
    fn previous_on_first_page_is_noop() {
        let state = ViewState::new("05").with_search("bag");

        let transition = state.apply(ViewEvent::PreviousPage);

        assert!(transition.is_noop());
        assert_eq!(transition.state, state);
    }

    #[test]
    fn previous_decrements_page_by_one() {
        let state = ViewState::default().with_page(5);

        let transition = state.apply(ViewEvent::PreviousPage);

        assert_eq!(transition.state.page, 4);
        assert_eq!(transition.loads, Loads::TRANSACTIONS);
    }

    #[test]
    fn next_increments_page_without_upper_bound() {
        let mut state = ViewState::default();

        for want_page in 2..=250 {
            let transition = state.apply(ViewEvent::NextPage);

            assert_eq!(transition.state.page, want_page);
            assert_eq!(transition.loads, Loads::TRANSACTIONS);
            state = transition.state;
        }
    }

    #[test]
    fn page_never_drops_below_one() {
        let mut state = ViewState::default();
        let events = [
            ViewEvent::PreviousPage,
            ViewEvent::NextPage,
            ViewEvent::PreviousPage,
            ViewEvent::PreviousPage,
            ViewEvent::PreviousPage,
        ];

        for event in events {
            state = state.apply(event).state;
            assert!(state.page >= 1, "page dropped below one: {state:?}");
        }

        assert_eq!(state.page, 1);
    }

    #[test]
    fn with_page_reads_zero_as_first_page() {
        assert_eq!(ViewState::default().with_page(0).page, 1);
    }

    #[test]
    fn query_string_keeps_empty_search() {
        let query = ViewState::default().to_query_string();

        assert_eq!(query, "month=03&search=&page=1");
    }

    #[test]
    fn url_encodes_search_text() {
        let url = ViewState::new("07")
            .with_search("desk lamp&co")
            .with_page(2)
            .to_url("/");

        assert_eq!(url, "/?month=07&search=desk+lamp%26co&page=2");
    }
}
