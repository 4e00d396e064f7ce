//! The 404 not found page.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

/// Render the 404 page.
///
/// This is also what a visitor gets for the quick-action destinations
/// (transactions, assets, investments, documents) when the corresponding
/// apps are not deployed alongside the dashboard.
pub async fn get_404_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        error_view(
            "Not Found",
            "404",
            "Whoops! That page doesn't exist.",
            "Check the URL or head back to the dashboard.",
        ),
    )
        .into_response()
}
