//! The recent-transactions card.
//!
//! Shows whatever the upstream listing returned, in the order it returned it
//! (most recent first). An empty list and a failed fetch render the same
//! empty state.

use maud::{Markup, html};
use time::{format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    api::{RecentTransaction, TransactionKind},
    endpoints,
    html::{CARD_STYLE, LINK_STYLE, MUTED_TEXT_STYLE, format_currency_rounded},
};

use super::icons::Icon;

/// Display format for transaction dates, e.g. "Mar 01, 2024".
const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[month repr:short] [day], [year]");

fn amount_class(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => "text-green-600 dark:text-green-400",
        TransactionKind::Expense => "text-red-600 dark:text-red-400",
    }
}

fn amount_sign(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => "+",
        TransactionKind::Expense => "-",
    }
}

/// Renders the recent-transactions card, or its empty state when there is
/// nothing to show.
pub(super) fn recent_transactions_view(transactions: &[RecentTransaction]) -> Markup {
    html! {
        section class="w-full mx-auto" {
            div class=(CARD_STYLE) {
                div class="flex items-center justify-between" {
                    h3 class="text-xl font-semibold" { "Recent Transactions" }

                    a
                        href=(endpoints::TRANSACTIONS_VIEW)
                        class={"inline-flex items-center gap-2 " (LINK_STYLE)}
                    {
                        "View all" (Icon::ArrowRight.markup("h-4 w-4"))
                    }
                }

                p class={(MUTED_TEXT_STYLE) " mb-4"} {
                    "Your most recent income and expense transactions"
                }

                @if transactions.is_empty() {
                    (empty_state_view())
                } @else {
                    div class="space-y-4" {
                        @for transaction in transactions {
                            (transaction_row(transaction))
                        }
                    }
                }
            }
        }
    }
}

fn transaction_row(transaction: &RecentTransaction) -> Markup {
    let date = transaction
        .date
        .format(DATE_FORMAT)
        .unwrap_or_else(|_| transaction.date.to_string());

    html! {
        div class="flex items-center" {
            div class="space-y-1" {
                p class="text-sm font-medium leading-none" { (transaction.description) }
                p class=(MUTED_TEXT_STYLE) {
                    (transaction.category.name) " • " (date)
                }
            }

            div class="ml-auto font-medium" {
                span class=(amount_class(transaction.kind)) {
                    (amount_sign(transaction.kind)) (format_currency_rounded(transaction.amount))
                }
            }
        }
    }
}

fn empty_state_view() -> Markup {
    html! {
        div class="text-center py-8 text-gray-600 dark:text-gray-400" {
            p { "No transactions yet" }

            a
                href=(endpoints::TRANSACTIONS_VIEW)
                class="inline-flex items-center gap-2 mt-4 py-2.5 px-5 text-sm
                    font-medium text-gray-900 bg-white rounded border
                    border-gray-200 hover:bg-gray-100 hover:text-blue-700
                    dark:bg-gray-800 dark:text-gray-400 dark:border-gray-600
                    dark:hover:text-white dark:hover:bg-gray-700"
            {
                (Icon::Plus.markup("h-4 w-4")) "Add your first transaction"
            }
        }
    }
}
