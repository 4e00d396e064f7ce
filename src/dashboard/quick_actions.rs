//! The quick-action shortcuts shown on the dashboard.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{CARD_STYLE, CARD_TITLE_STYLE, MUTED_TEXT_STYLE},
};

use super::icons::Icon;

/// A shortcut to one of the finance suite's pages.
pub(super) struct QuickAction {
    /// Card heading.
    pub title: &'static str,
    /// One-line explanation shown under the heading.
    pub description: &'static str,
    /// Where the card links to.
    pub href: &'static str,
    /// Icon shown next to the heading.
    pub icon: Icon,
}

/// The quick actions, in display order.
///
/// Fixed at compile time; rendered identically no matter what the rest of the
/// dashboard is doing.
pub(super) const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        title: "Add Transaction",
        description: "Record a new income or expense",
        href: endpoints::TRANSACTIONS_VIEW,
        icon: Icon::Plus,
    },
    QuickAction {
        title: "View Assets",
        description: "Manage your company assets",
        href: endpoints::ASSETS_VIEW,
        icon: Icon::Building,
    },
    QuickAction {
        title: "Track Investments",
        description: "Monitor your investment portfolio",
        href: endpoints::INVESTMENTS_VIEW,
        icon: Icon::TrendingUp,
    },
    QuickAction {
        title: "Manage Documents",
        description: "Upload and organize financial documents",
        href: endpoints::DOCUMENTS_VIEW,
        icon: Icon::FileText,
    },
];

/// Renders the grid of quick-action cards.
pub(super) fn quick_actions_view() -> Markup {
    html! {
        section class="w-full mx-auto" {
            div class="grid grid-cols-2 gap-4 lg:grid-cols-4" {
                @for action in &QUICK_ACTIONS {
                    (quick_action_card(action))
                }
            }
        }
    }
}

fn quick_action_card(action: &QuickAction) -> Markup {
    html! {
        a
            href=(action.href)
            class={(CARD_STYLE) " block hover:bg-gray-100 dark:hover:bg-gray-700 transition-colors"}
        {
            div class="flex flex-row items-center justify-between pb-2" {
                h4 class=(CARD_TITLE_STYLE) { (action.title) }
                (action.icon.markup("h-5 w-5"))
            }

            div class=(MUTED_TEXT_STYLE) { (action.description) }
        }
    }
}
