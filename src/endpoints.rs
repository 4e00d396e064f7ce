//! The endpoint URIs.
//!
//! Paths under `/api` belong to the upstream finance API and are joined onto
//! its base URL by [crate::ApiClient]; everything else is served by this app.

/// The root route which redirects to the dashboard page.
pub const ROOT: &str = "/";
/// The landing page showing the financial overview.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The dashboard content fragment, loaded by the page shell once mounted.
pub const DASHBOARD_CONTENT: &str = "/dashboard/content";
/// The page for recording and browsing transactions.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The page for managing company assets.
pub const ASSETS_VIEW: &str = "/assets";
/// The page for monitoring the investment portfolio.
pub const INVESTMENTS_VIEW: &str = "/investments";
/// The page for uploading and organizing financial documents.
pub const DOCUMENTS_VIEW: &str = "/documents";

/// The upstream route that serves the six headline financial metrics.
pub const SUMMARY_API: &str = "/api/dashboard";
/// The upstream route that serves transactions, most recent first.
pub const TRANSACTIONS_API: &str = "/api/transactions";
