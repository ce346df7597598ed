//! The transactions table and the pager below it.

use maud::{Markup, html};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    alert::error_alert,
    api::{ApiError, Transaction},
    endpoints,
    html::{
        BUTTON_SECONDARY_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        format_number,
    },
    sequencing::ViewId,
    view_state::{FIRST_PAGE, ViewState},
};

use super::Placement;

/// The max number of graphemes to display in the description column before
/// truncating and displaying ellipses.
const MAX_DESCRIPTION_GRAPHEMES: usize = 48;

const COLUMN_COUNT: usize = 6;

/// Renders the transactions table with its header and body.
pub(super) fn transactions_table(result: &Result<Vec<Transaction>, ApiError>) -> Markup {
    html! {
        div class="overflow-x-auto rounded-lg shadow w-full"
        {
            table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Title" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Price" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date of Sale" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Sold" }
                    }
                }

                (transactions_table_body(result, Placement::InPage))
            }
        }
    }
}

/// Renders the table body with one row per transaction, in the order given.
pub(super) fn transactions_table_body(
    result: &Result<Vec<Transaction>, ApiError>,
    placement: Placement,
) -> Markup {
    let body = html! {
        tbody id="transactions-table-body" hx-swap-oob=[placement.swap_oob()]
        {
            @match result {
                Ok(transactions) if transactions.is_empty() => {
                    tr class=(TABLE_ROW_STYLE)
                    {
                        td colspan=(COLUMN_COUNT) data-empty-state="true" class=(TABLE_CELL_STYLE)
                        {
                            "No transactions found."
                        }
                    }
                }
                Ok(transactions) => {
                    @for transaction in transactions {
                        (transaction_row(transaction))
                    }
                }
                Err(error) => {
                    tr class=(TABLE_ROW_STYLE)
                    {
                        td colspan=(COLUMN_COUNT) data-error-state="true" class=(TABLE_CELL_STYLE)
                        {
                            (error_alert("Could not load transactions.", &error.to_string()))
                        }
                    }
                }
            }
        }
    };

    // Table elements are only parsed correctly outside a table when wrapped in a template.
    if placement.is_out_of_band() {
        html! { template { (body) } }
    } else {
        body
    }
}

fn transaction_row(transaction: &Transaction) -> Markup {
    html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-row="true"
        {
            th scope="row" class={(TABLE_CELL_STYLE) " font-medium text-gray-900 dark:text-white"}
            {
                (transaction.title)
            }
            td class=(TABLE_CELL_STYLE) title=(transaction.description)
            {
                (truncate_description(&transaction.description))
            }
            td class=(TABLE_CELL_STYLE) { (format_number(transaction.price)) }
            td class=(TABLE_CELL_STYLE) { (transaction.date_of_sale) }
            td class=(TABLE_CELL_STYLE) { (transaction.category) }
            td class=(TABLE_CELL_STYLE) { (if transaction.sold { "Yes" } else { "No" }) }
        }
    }
}

fn truncate_description(description: &str) -> String {
    let mut graphemes = description.graphemes(true);
    let truncated: String = graphemes
        .by_ref()
        .take(MAX_DESCRIPTION_GRAPHEMES)
        .collect();

    if graphemes.next().is_some() {
        format!("{}…", truncated.trim_end())
    } else {
        truncated
    }
}

/// Whether the next-page button should be offered after loading `result`.
///
/// A page with fewer than `rows_per_page` rows is the last page. When the load
/// failed the button stays enabled so the user can move on.
pub(super) fn has_next_page(
    result: Option<&Result<Vec<Transaction>, ApiError>>,
    rows_per_page: u64,
) -> bool {
    match result {
        Some(Ok(transactions)) => transactions.len() as u64 >= rows_per_page,
        _ => true,
    }
}

/// Renders the previous/next buttons, the page label and the hidden page field.
///
/// The buttons submit the view state form, so they also work without JavaScript.
pub(super) fn pager(
    state: &ViewState,
    view: ViewId,
    has_next_page: bool,
    placement: Placement,
) -> Markup {
    html! {
        div
            id="pager"
            hx-swap-oob=[placement.swap_oob()]
            class="flex items-center justify-between w-full gap-4"
        {
            input id="current-page" type="hidden" name="page" value=(state.page);
            input type="hidden" name="view" value=(view);

            button
                id="prev-page"
                type="submit"
                formaction=(endpoints::PREVIOUS_PAGE)
                hx-get=(endpoints::PREVIOUS_PAGE)
                hx-include="#view-state"
                hx-sync="this:replace"
                hx-swap="none"
                disabled[state.page <= FIRST_PAGE]
                class=(BUTTON_SECONDARY_STYLE)
            {
                "Previous"
            }

            span id="page-label" class="text-sm"
            {
                "Page " (state.page)
            }

            button
                id="next-page"
                type="submit"
                formaction=(endpoints::NEXT_PAGE)
                hx-get=(endpoints::NEXT_PAGE)
                hx-include="#view-state"
                hx-sync="this:replace"
                hx-swap="none"
                disabled[!has_next_page]
                class=(BUTTON_SECONDARY_STYLE)
            {
                "Next"
            }
        }
    }
}
