//! Dashboard module
//!
//! Provides the landing page showing headline financial metrics, a recent
//! cash-flow chart, quick-action shortcuts, and the most recent transactions.
//! Everything on the page is fetched from the upstream finance API when the
//! page loads.

mod cards;
mod charts;
mod handlers;
mod icons;
mod quick_actions;
mod transactions;

pub use handlers::{get_dashboard_content, get_dashboard_page};
