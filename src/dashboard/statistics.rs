//! The summary statistics for the selected month.

use maud::{Markup, html};

use crate::{
    alert::error_alert,
    api::{ApiError, Statistics},
    html::{PANEL_STYLE, format_number},
};

use super::{Placement, month_name};

const MISSING_VALUE: &str = "-";

/// Renders the total sale amount, sold items and unsold items for `month`.
///
/// If the statistics could not be loaded the labels are kept, the values are
/// replaced with a dash and the reason is shown below them.
pub(super) fn statistics_view(
    month: &str,
    result: &Result<Statistics, ApiError>,
    placement: Placement,
) -> Markup {
    let (total_sale_amount, total_sold_items, total_not_sold_items) = match result {
        Ok(statistics) => (
            format_number(statistics.total_sale_amount.unwrap_or_default()),
            statistics.total_sold_items.to_string(),
            statistics.total_not_sold_items.to_string(),
        ),
        Err(_) => (
            MISSING_VALUE.to_owned(),
            MISSING_VALUE.to_owned(),
            MISSING_VALUE.to_owned(),
        ),
    };

    html! {
        section
            id="statistics"
            hx-swap-oob=[placement.swap_oob()]
            class=(PANEL_STYLE)
        {
            h2 class="text-xl font-semibold mb-2"
            {
                "Statistics - " (month_name(month))
            }

            p id="total-sale-amount" { "Total Sale Amount: " (total_sale_amount) }
            p id="total-sold-items" { "Total Sold Items: " (total_sold_items) }
            p id="total-not-sold-items" { "Total Not Sold Items: " (total_not_sold_items) }

            @if let Err(error) = result {
                (error_alert("Could not load statistics.", &error.to_string()))
            }
        }
    }
}
