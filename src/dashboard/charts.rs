//! Chart generation and rendering for the dashboard.
//!
//! This module creates ECharts visualizations for the selected month:
//! - **Price Range Chart**: the number of items in each price range, as bars
//! - **Category Chart**: the number of items in each category, as a pie
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered as a container with a script that (re)initializes the chart. The
//! script runs whenever the container is swapped in, so every load draws the
//! chart from scratch.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{AxisPointer, AxisPointerType, AxisType, ItemStyle, Tooltip, Trigger},
    series::{Bar, Pie},
};
use maud::{Markup, PreEscaped, html};

use crate::{
    alert::error_alert,
    api::{ApiError, CategoryCount, PriceRangeBucket},
    html::PANEL_STYLE,
};

use super::{Placement, month_name};

/// The ECharts build loaded by the dashboard page.
pub(super) const ECHARTS_SCRIPT: &str =
    "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

const BAR_COLOR: &str = "rgba(0, 123, 255, 0.5)";
const BAR_BORDER_COLOR: &str = "rgba(0, 123, 255, 1)";

/// Renders the price range chart panel, or an error alert if the buckets
/// could not be loaded.
pub(super) fn price_range_chart_panel(
    month: &str,
    result: &Result<Vec<PriceRangeBucket>, ApiError>,
    placement: Placement,
) -> Markup {
    html! {
        section
            id="bar-chart-panel"
            hx-swap-oob=[placement.swap_oob()]
            class=(PANEL_STYLE)
        {
            h2 class="text-xl font-semibold mb-2"
            {
                "Price Ranges - " (month_name(month))
            }

            @match result {
                Ok(buckets) => (chart_view("bar-chart", &price_range_chart(buckets))),
                Err(error) => (error_alert("Could not load the price range chart.", &error.to_string())),
            }
        }
    }
}

/// Renders the category chart panel, or an error alert if the counts could
/// not be loaded.
pub(super) fn category_chart_panel(
    month: &str,
    result: &Result<Vec<CategoryCount>, ApiError>,
    placement: Placement,
) -> Markup {
    html! {
        section
            id="category-chart-panel"
            hx-swap-oob=[placement.swap_oob()]
            class=(PANEL_STYLE)
        {
            h2 class="text-xl font-semibold mb-2"
            {
                "Categories - " (month_name(month))
            }

            @match result {
                Ok(counts) => (chart_view("category-chart", &category_chart(counts))),
                Err(error) => (error_alert("Could not load the category chart.", &error.to_string())),
            }
        }
    }
}

/// The number of items in each price range, in the order the API returns them.
pub(super) fn price_range_chart(buckets: &[PriceRangeBucket]) -> Chart {
    let labels: Vec<String> = buckets
        .iter()
        .map(|bucket| bucket.price_range.clone())
        .collect();
    let counts: Vec<f64> = buckets.iter().map(|bucket| bucket.count as f64).collect();

    Chart::new()
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(Axis::new().type_(AxisType::Value).min(0))
        .series(
            Bar::new()
                .name("Number of Items")
                .item_style(
                    ItemStyle::new()
                        .color(BAR_COLOR)
                        .border_color(BAR_BORDER_COLOR)
                        .border_width(1.0),
                )
                .data(counts),
        )
}

/// The share of items in each category.
pub(super) fn category_chart(counts: &[CategoryCount]) -> Chart {
    let data: Vec<(f64, &str)> = counts
        .iter()
        .map(|count| (count.count as f64, count.category.as_str()))
        .collect();

    Chart::new()
        .title(Title::new().text("Items per Category").left("center"))
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .legend(Legend::new().left("left").top("bottom"))
        .series(Pie::new().name("Number of Items").radius("60%").data(data))
}

/// Renders a chart container and the script that draws `chart` into it.
///
/// Any chart already drawn in an element with the same id is disposed first.
fn chart_view(id: &str, chart: &Chart) -> Markup {
    // The options are embedded in a script element, so they must not close it.
    let options = chart.to_string().replace("</", "<\\/");

    let script = format!(
        r#"(function() {{
            const chartDom = document.getElementById("{id}");
            const existing = echarts.getInstanceByDom(chartDom);
            if (existing) {{
                existing.dispose();
            }}
            const chart = echarts.init(chartDom);
            chart.setOption({options});
            new ResizeObserver(() => chart.resize()).observe(chartDom);
        }})();"#
    );

    html! {
        div id=(id) data-chart="echarts" class="min-h-[380px] w-full rounded dark:bg-gray-100" {}
        script { (PreEscaped(script)) }
    }
}
