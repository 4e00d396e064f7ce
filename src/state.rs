//! Implements a struct that holds the state of the dashboard server.

use crate::api::ApiClient;

/// The state shared between route handlers.
///
/// The app holds no data of its own. Everything shown on the dashboard is a
/// read-only projection of state owned by the upstream finance API.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The client for the upstream finance API that owns the ledger data.
    pub api: ApiClient,
}

impl AppState {
    /// Create a new [AppState] backed by the given API client.
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}
