//! A typed client for the upstream finance API.
//!
//! The API owns the ledgers; this app only reads from it. Two routes are
//! consumed: the summary aggregator (six headline metrics) and the
//! transactions listing. Requests are never retried and responses are
//! accepted as-is once they parse, see [ApiError] for the two failure modes.

mod models;

pub use models::{DashboardSummary, RecentTransaction, TransactionCategory, TransactionKind};

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::endpoints;

/// The errors that may occur when calling the upstream finance API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or the response body could not be read.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status. The response body is ignored.
    #[error("unexpected status: {0}")]
    UnexpectedStatus(StatusCode),

    /// The response body was not valid JSON for the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A client for the finance API that owns the ledger data.
///
/// Cloning is cheap, the underlying [Client] holds its connection pool behind
/// an `Arc`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client that joins request paths onto `base_url`,
    /// e.g. `http://localhost:3001`.
    ///
    /// The [Client] is taken as an argument so that callers control its
    /// construction (proxies, timeouts). By default no request timeout is set,
    /// matching the behavior of the dashboard this replaces.
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    /// Fetch the six headline financial metrics from the summary aggregator.
    pub async fn summary(&self) -> Result<DashboardSummary, ApiError> {
        let url = format!("{}{}", self.base_url, endpoints::SUMMARY_API);
        self.get_json(self.http.get(&url)).await
    }

    /// Fetch the `limit` most recent transactions.
    ///
    /// The API returns transactions most-recent-first and the returned order
    /// is preserved. The API may return fewer than `limit` entries, never
    /// more.
    pub async fn recent_transactions(
        &self,
        limit: u32,
    ) -> Result<Vec<RecentTransaction>, ApiError> {
        let url = format!("{}{}", self.base_url, endpoints::TRANSACTIONS_API);
        self.get_json(self.http.get(&url).query(&[("limit", limit)]))
            .await
    }

    async fn get_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus(status));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod api_client_tests {
    use reqwest::{Client, StatusCode};
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    use super::{ApiClient, ApiError, TransactionKind};
    use crate::endpoints;

    fn client_for(mock_server: &MockServer) -> ApiClient {
        ApiClient::new(Client::new(), mock_server.uri())
    }

    #[tokio::test]
    async fn summary_parses_camel_case_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(endpoints::SUMMARY_API))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "totalIncome": 1000.0,
                "totalExpenses": 400.0,
                "netWorth": 5000.0,
                "profitLoss": 600.0,
                "totalAssets": 3000.0,
                "totalInvestments": 2000.0,
            })))
            .mount(&mock_server)
            .await;

        let summary = client_for(&mock_server).summary().await.unwrap();

        assert_eq!(summary.total_income, 1000.0);
        assert_eq!(summary.profit_loss, 600.0);
        assert_eq!(summary.total_investments, 2000.0);
    }

    #[tokio::test]
    async fn summary_returns_status_error_on_non_2xx() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(endpoints::SUMMARY_API))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let error = client_for(&mock_server).summary().await.unwrap_err();

        assert!(matches!(
            error,
            ApiError::UnexpectedStatus(StatusCode::INTERNAL_SERVER_ERROR)
        ));
    }

    #[tokio::test]
    async fn summary_returns_decode_error_on_malformed_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(endpoints::SUMMARY_API))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let error = client_for(&mock_server).summary().await.unwrap_err();

        assert!(matches!(error, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn recent_transactions_sends_limit_and_preserves_order() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(endpoints::TRANSACTIONS_API))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": 2,
                    "type": "expense",
                    "amount": 80.0,
                    "description": "Hosting",
                    "date": "2024-03-02",
                    "category": {"name": "Infrastructure"},
                },
                {
                    "id": 1,
                    "type": "income",
                    "amount": 250.0,
                    "description": "Consulting",
                    "date": "2024-03-01",
                    "category": {"name": "Services"},
                },
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let transactions = client_for(&mock_server)
            .recent_transactions(5)
            .await
            .unwrap();

        // Most-recent-first as returned by the API, not re-sorted.
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].id, 2);
        assert_eq!(transactions[0].kind, TransactionKind::Expense);
        assert_eq!(transactions[1].description, "Consulting");
    }

    #[tokio::test]
    async fn base_url_trailing_slash_is_ignored() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(endpoints::TRANSACTIONS_API))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(Client::new(), format!("{}/", mock_server.uri()));
        let transactions = client.recent_transactions(5).await.unwrap();

        assert!(transactions.is_empty());
    }
}
