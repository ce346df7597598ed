//! Renders the full dashboard page and the fragments sent in response to UI events.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{
        BUTTON_SECONDARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, HeadElement,
        PAGE_CONTAINER_STYLE, base,
    },
    sequencing::ViewId,
    view_state::ViewState,
};

use super::{
    MONTHS, Placement,
    charts::{ECHARTS_SCRIPT, category_chart_panel, price_range_chart_panel},
    controller::LoadResults,
    statistics::statistics_view,
    table::{has_next_page, pager, transactions_table, transactions_table_body},
};

/// Renders the whole dashboard for `state` with the results of the initial loads.
///
/// The controls live in the `view-state` form so that every event request
/// carries the current month, search text, page and page view id, and so the
/// page still works as a plain form when JavaScript is unavailable.
pub(super) fn dashboard_page(
    state: &ViewState,
    view: ViewId,
    results: &LoadResults,
    rows_per_page: u64,
) -> Markup {
    let has_next_page = has_next_page(results.transactions.as_ref(), rows_per_page);

    let content = html! {
        div class={(PAGE_CONTAINER_STYLE) " max-w-screen-xl"}
        {
            h1 class="text-2xl font-bold mb-4" { "Transactions Dashboard" }

            form
                id="view-state"
                action=(endpoints::SEARCH_CHANGED)
                method="get"
                class="w-full"
            {
                (controls(state))

                @if let Some(statistics) = &results.statistics {
                    (statistics_view(&state.month, statistics, Placement::InPage))
                }

                @if let Some(transactions) = &results.transactions {
                    (transactions_table(transactions))
                }

                div class="w-full my-4"
                {
                    (pager(state, view, has_next_page, Placement::InPage))
                }

                div class="grid grid-cols-1 xl:grid-cols-2 gap-4"
                {
                    @if let Some(price_ranges) = &results.price_ranges {
                        (price_range_chart_panel(&state.month, price_ranges, Placement::InPage))
                    }

                    @if let Some(categories) = &results.categories {
                        (category_chart_panel(&state.month, categories, Placement::InPage))
                    }
                }
            }
        }
    };

    base(
        "Dashboard",
        &[HeadElement::ScriptLink(ECHARTS_SCRIPT)],
        &content,
    )
}

/// Renders the regions that were reloaded after an event, to be swapped into
/// the page by id. The pager goes with the transactions so the page field
/// follows the rows shown.
pub(super) fn event_fragments(
    state: &ViewState,
    view: ViewId,
    results: &LoadResults,
    rows_per_page: u64,
) -> Markup {
    let has_next_page = has_next_page(results.transactions.as_ref(), rows_per_page);

    html! {
        @if let Some(transactions) = &results.transactions {
            (transactions_table_body(transactions, Placement::OutOfBand))
            (pager(state, view, has_next_page, Placement::OutOfBand))
        }

        @if let Some(statistics) = &results.statistics {
            (statistics_view(&state.month, statistics, Placement::OutOfBand))
        }

        @if let Some(price_ranges) = &results.price_ranges {
            (price_range_chart_panel(&state.month, price_ranges, Placement::OutOfBand))
        }

        @if let Some(categories) = &results.categories {
            (category_chart_panel(&state.month, categories, Placement::OutOfBand))
        }
    }
}

fn controls(state: &ViewState) -> Markup {
    html! {
        div class="flex flex-col md:flex-row gap-4 w-full mb-4"
        {
            div class="md:w-1/3"
            {
                label for="month-select" class=(FORM_LABEL_STYLE) { "Month" }

                select
                    id="month-select"
                    name="month"
                    hx-get=(endpoints::MONTH_CHANGED)
                    hx-trigger="change"
                    hx-include="#view-state"
                    hx-sync="this:replace"
                    hx-swap="none"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for (code, name) in MONTHS {
                        option value=(code) selected[code == state.month] { (name) }
                    }
                }
            }

            div class="md:w-2/3"
            {
                label for="search-box" class=(FORM_LABEL_STYLE) { "Search" }

                input
                    id="search-box"
                    type="search"
                    name="search"
                    value=(state.search)
                    placeholder="Search transactions"
                    autocomplete="off"
                    hx-get=(endpoints::SEARCH_CHANGED)
                    hx-trigger="input"
                    hx-include="#view-state"
                    hx-sync="this:replace"
                    hx-swap="none"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            noscript
            {
                button type="submit" class={(BUTTON_SECONDARY_STYLE) " md:mt-7"} { "Apply" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::{
        api::ApiError,
        dashboard::controller::LoadResults,
        test_utils::{assert_valid_html, book, must_select, table_rows, transactions},
        view_state::ViewState,
    };

    use super::{dashboard_page, event_fragments};

    fn all_loaded() -> LoadResults {
        LoadResults {
            transactions: Some(Ok(vec![book()])),
            statistics: Some(Ok(crate::api::Statistics {
                total_sale_amount: Some(100.0),
                total_sold_items: 1,
                total_not_sold_items: 0,
            })),
            price_ranges: Some(Ok(vec![])),
            categories: None,
        }
    }

    #[test]
    fn page_has_every_dashboard_element() {
        let markup = dashboard_page(&ViewState::default(), 1, &all_loaded(), 10);
        let html = Html::parse_document(&markup.into_string());

        assert_valid_html(&html);
        for id in [
            "view-state",
            "month-select",
            "search-box",
            "transactions-table-body",
            "statistics",
            "total-sale-amount",
            "total-sold-items",
            "total-not-sold-items",
            "current-page",
            "prev-page",
            "next-page",
            "bar-chart-panel",
            "bar-chart",
        ] {
            must_select(&html, &format!("#{id}"));
        }
    }

    #[test]
    fn page_selects_current_month_and_search() {
        let state = ViewState::new("07").with_search("lamp");
        let markup = dashboard_page(&state, 1, &all_loaded(), 10);
        let html = Html::parse_document(&markup.into_string());

        let selected = must_select(&html, "#month-select option[selected]");
        assert_eq!(selected.value().attr("value"), Some("07"));
        assert_eq!(
            must_select(&html, "#search-box").value().attr("value"),
            Some("lamp")
        );
    }

    #[test]
    fn month_selector_offers_every_month() {
        let markup = dashboard_page(&ViewState::default(), 1, &all_loaded(), 10);
        let html = Html::parse_document(&markup.into_string());

        let options = html
            .select(&Selector::parse("#month-select option").unwrap())
            .count();
        assert_eq!(options, 12);
    }

    #[test]
    fn page_carries_view_id() {
        let markup = dashboard_page(&ViewState::default(), 42, &all_loaded(), 10);
        let html = Html::parse_document(&markup.into_string());

        let view = must_select(&html, "#view-state input[name='view']");
        assert_eq!(view.value().attr("value"), Some("42"));
    }

    #[test]
    fn fragments_only_include_reloaded_regions() {
        let results = LoadResults {
            transactions: Some(Ok(transactions(2))),
            ..Default::default()
        };

        let markup = event_fragments(&ViewState::default().with_page(2), 1, &results, 10);
        let text = markup.into_string();
        let html = Html::parse_fragment(&text);

        let oob = Selector::parse("[hx-swap-oob]").unwrap();
        let ids: Vec<&str> = html
            .select(&oob)
            .filter_map(|element| element.value().id())
            .collect();
        assert!(ids.contains(&"pager"), "got {ids:?}");
        assert!(!ids.contains(&"statistics"), "got {ids:?}");
        assert!(!ids.contains(&"bar-chart-panel"), "got {ids:?}");
        assert!(text.contains(r#"<tbody id="transactions-table-body" hx-swap-oob="true">"#));
        assert_eq!(
            must_select(&html, "#current-page").value().attr("value"),
            Some("2")
        );
    }

    #[test]
    fn month_only_fragments_leave_pager_alone() {
        let results = LoadResults {
            statistics: Some(Err(ApiError::Timeout)),
            price_ranges: Some(Ok(vec![])),
            ..Default::default()
        };

        let markup = event_fragments(&ViewState::new("07"), 1, &results, 10);
        let html = Html::parse_fragment(&markup.into_string());

        must_select(&html, "#statistics");
        must_select(&html, "#bar-chart-panel");
        let pager = html.select(&Selector::parse("#pager").unwrap()).next();
        assert!(pager.is_none(), "pager should only follow the transactions");
    }

    #[test]
    fn fragments_render_table_rows_inside_template() {
        let results = LoadResults {
            transactions: Some(Ok(vec![book()])),
            ..Default::default()
        };

        let markup = event_fragments(&ViewState::default(), 1, &results, 10);
        let text = markup.into_string();

        assert!(text.starts_with("<template><tbody"), "got {text}");
    }

    #[test]
    fn page_renders_failed_loads_as_errors() {
        let results = LoadResults {
            transactions: Some(Err(ApiError::Timeout)),
            statistics: Some(Err(ApiError::Timeout)),
            price_ranges: Some(Err(ApiError::Timeout)),
            categories: None,
        };

        let markup = dashboard_page(&ViewState::default(), 1, &results, 10);
        let html = Html::parse_document(&markup.into_string());

        let alerts = html
            .select(&Selector::parse("[role='alert']").unwrap())
            .count();
        assert_eq!(alerts, 3);
        assert_eq!(table_rows(&html).len(), 1);
    }
}
