//! Card components for the six headline financial metrics.
//!
//! Four small cards (income, expenses, net worth, profit/loss) and two larger
//! overview cards (assets, investments). When the summary aggregator could
//! not be reached every card shows a zero amount; the dashboard never shows
//! an error state for missing metrics.

use maud::{Markup, html};

use crate::{
    api::DashboardSummary,
    html::{CARD_STYLE, CARD_TITLE_STYLE, MUTED_TEXT_STYLE, currency_rounded_with_tooltip},
};

use super::icons::Icon;

/// Renders the grid of the four headline metric cards.
pub(super) fn summary_cards_view(summary: Option<&DashboardSummary>) -> Markup {
    html! {
        section class="w-full mx-auto" {
            div class="grid grid-cols-2 gap-4 lg:grid-cols-4" {
                (summary_card("Total Income", Icon::Wallet, summary.map(|summary| summary.total_income)))
                (summary_card("Total Expenses", Icon::Wallet, summary.map(|summary| summary.total_expenses)))
                (summary_card("Net Worth", Icon::Building, summary.map(|summary| summary.net_worth)))
                (summary_card("Profit/Loss", Icon::TrendingUp, summary.map(|summary| summary.profit_loss)))
            }
        }
    }
}

fn summary_card(title: &str, icon: Icon, amount: Option<f64>) -> Markup {
    html! {
        div class=(CARD_STYLE) {
            div class="flex flex-row items-center justify-between pb-2" {
                h4 class=(CARD_TITLE_STYLE) { (title) }
                (icon.markup("h-4 w-4 text-gray-600 dark:text-gray-400"))
            }

            div class="text-2xl font-bold" {
                (currency_rounded_with_tooltip(amount.unwrap_or(0.0)))
            }
        }
    }
}

/// Renders the assets and investments overview cards.
pub(super) fn overview_cards_view(summary: Option<&DashboardSummary>) -> Markup {
    html! {
        section class="w-full mx-auto" {
            div class="grid grid-cols-1 gap-4 sm:grid-cols-2" {
                (overview_card(
                    "Assets Overview",
                    "Total value of company assets",
                    summary.map(|summary| summary.total_assets),
                ))
                (overview_card(
                    "Investments",
                    "Current value of investment portfolio",
                    summary.map(|summary| summary.total_investments),
                ))
            }
        }
    }
}

fn overview_card(title: &str, description: &str, amount: Option<f64>) -> Markup {
    html! {
        div class=(CARD_STYLE) {
            h3 class="text-xl font-semibold" { (title) }
            p class={(MUTED_TEXT_STYLE) " mb-4"} { (description) }

            div class="text-3xl font-bold" {
                (currency_rounded_with_tooltip(amount.unwrap_or(0.0)))
            }
        }
    }
}
