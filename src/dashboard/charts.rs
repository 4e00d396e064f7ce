//! Chart generation and rendering for the dashboard.
//!
//! The recent cash-flow chart plots the latest transactions as signed bars,
//! money in above the axis and money out below it. The chart is generated as
//! JSON configuration for the ECharts library and rendered as a container
//! div plus an initialization script.

use charming::{
    Chart,
    component::{Axis, Grid, Title, VisualMap, VisualMapPiece},
    element::{AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger},
    series::bar,
};
use maud::{Markup, PreEscaped, html};
use time::{format_description::BorrowedFormatItem, macros::format_description};

use crate::api::{RecentTransaction, TransactionKind};

/// Label format for the x axis, e.g. "Mar 01".
const AXIS_DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[month repr:short] [day]");

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Builds the cash-flow chart from the recent transactions.
///
/// Bars are plotted oldest to newest; the transaction listing itself stays
/// most-recent-first.
pub(super) fn recent_cashflow_chart(transactions: &[RecentTransaction]) -> DashboardChart {
    let oldest_first: Vec<&RecentTransaction> = transactions.iter().rev().collect();

    let labels: Vec<String> = oldest_first
        .iter()
        .map(|transaction| {
            transaction
                .date
                .format(AXIS_DATE_FORMAT)
                .unwrap_or_else(|_| transaction.date.to_string())
        })
        .collect();

    let values: Vec<f64> = oldest_first.iter().map(|t| signed_amount(t)).collect();

    let chart = Chart::new()
        .title(
            Title::new()
                .text("Recent Cash Flow")
                .subtext("Your latest transactions, money in and out"),
        )
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .visual_map(VisualMap::new().show(false).pieces(vec![
            VisualMapPiece::new().lte(-1).color("red"),
            VisualMapPiece::new().gte(0).color("green"),
        ]))
        .series(bar::Bar::new().name("Cash Flow").data(values));

    DashboardChart {
        id: "cashflow-chart",
        options: chart.to_string(),
    }
}

fn signed_amount(transaction: &RecentTransaction) -> f64 {
    match transaction.kind {
        TransactionKind::Income => transaction.amount,
        TransactionKind::Expense => -transaction.amount,
    }
}

/// Renders the chart container with its initialization script.
pub(super) fn chart_view(chart: &DashboardChart) -> Markup {
    html! {
        section class="w-full mx-auto" {
            div
                id=(chart.id)
                class="min-h-[380px] rounded bg-white dark:bg-gray-100 shadow-md"
            {}

            (chart_script(chart))
        }
    }
}

/// Generates the JavaScript that initializes the chart.
///
/// The chart arrives inside an htmx fragment long after DOMContentLoaded has
/// fired, so initialization runs immediately rather than waiting on an event.
fn chart_script(chart: &DashboardChart) -> Markup {
    let script_content = format!(
        r#"(function() {{
            const chartDom = document.getElementById("{}");
            const chart = echarts.init(chartDom);
            const option = {};
            chart.setOption(option);

            window.addEventListener('resize', chart.resize);
        }})();"#,
        chart.id, chart.options
    );

    html! {
        script { (PreEscaped(script_content)) }
    }
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}
