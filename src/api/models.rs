//! The wire types served by the finance API.
//!
//! Both types are read-only projections of externally owned state. They are
//! fetched once per page visit, held only while rendering, and never written
//! back.

use serde::{Deserialize, Deserializer};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

/// The six headline metrics computed by the summary aggregator.
///
/// All amounts are whole-currency decimal values. Every field except
/// [DashboardSummary::profit_loss] is expected to be non-negative, though
/// nothing is validated here; values are accepted as the aggregator sent
/// them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Total income across the ledger.
    pub total_income: f64,
    /// Total expenses across the ledger.
    pub total_expenses: f64,
    /// Current net worth.
    pub net_worth: f64,
    /// Profit or loss. The only metric that may be negative.
    pub profit_loss: f64,
    /// Total value of company assets.
    pub total_assets: f64,
    /// Current value of the investment portfolio.
    pub total_investments: f64,
}

/// Whether a transaction added to or subtracted from the books.
///
/// The stored amount is always non-negative; the direction of the money is
/// carried here, not in the amount's sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money in.
    Income,
    /// Money out.
    Expense,
}

/// The category label attached to a transaction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionCategory {
    /// Free-text category name, e.g. "Services".
    pub name: String,
}

/// One entry of the recent-transactions listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecentTransaction {
    /// Unique ID assigned by the finance API.
    pub id: i64,
    /// Income or expense. Named `type` on the wire.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Non-negative amount; the sign is conveyed by `kind`.
    pub amount: f64,
    /// Free-text description, e.g. "Consulting".
    pub description: String,
    /// The calendar date of the transaction.
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub date: Date,
    /// The category the transaction was filed under.
    pub category: TransactionCategory,
}

/// Parses the API's ISO-8601 date strings into a calendar date.
///
/// The API serves plain dates ("2024-03-01") but some deployments send full
/// timestamps ("2024-03-01T09:30:00.000Z"), so only the date prefix is read.
fn deserialize_calendar_date<'de, D>(deserializer: D) -> Result<Date, D::Error>
where
    D: Deserializer<'de>,
{
    const ISO_DATE: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

    let text = String::deserialize(deserializer)?;
    let date_part = text.get(..10).unwrap_or(&text);

    Date::parse(date_part, ISO_DATE).map_err(serde::de::Error::custom)
}
