//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - The route handler for the page shell, which renders instantly with a
//!   loading indicator
//! - The route handler for the content fragment, which fetches from the
//!   upstream API and replaces the indicator once both fetches have settled
//! - The view function composing the dashboard UI

use axum::extract::{FromRef, State};
use maud::{Markup, PreEscaped, html};

use crate::{
    AppState,
    api::{ApiClient, DashboardSummary, RecentTransaction},
    endpoints,
    html::{HeadElement, PAGE_CONTAINER_STYLE, base, loading_spinner},
};

use super::{
    cards::{overview_cards_view, summary_cards_view},
    charts::{chart_view, recent_cashflow_chart},
    quick_actions::quick_actions_view,
    transactions::recent_transactions_view,
};

/// How many transactions the dashboard requests from the upstream API. The
/// rendered list is never longer than this.
const RECENT_TRANSACTIONS_LIMIT: u32 = 5;

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The client for the finance API that owns the ledger data.
    pub api: ApiClient,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
        }
    }
}

/// Display the dashboard page shell.
///
/// The shell carries no ledger data. Its content element requests the
/// fragment served by [get_dashboard_content] on load, so the loading
/// indicator is visible from mount until both upstream fetches settle and
/// never re-appears afterwards.
pub async fn get_dashboard_page() -> Markup {
    let content = html!(
        div class=(PAGE_CONTAINER_STYLE) {
            header class="w-full mx-auto max-w-screen-xl mb-6" {
                h1 class="text-3xl font-bold" { "Dashboard" }
                p class="text-gray-600 dark:text-gray-400" {
                    "Your income, expenses and investments at a glance"
                }
            }

            div
                class="w-full mx-auto max-w-screen-xl"
                hx-get=(endpoints::DASHBOARD_CONTENT)
                hx-trigger="load"
                hx-swap="outerHTML"
            {
                div class="text-center py-24" {
                    (loading_spinner())
                    p class="mt-4 text-gray-600 dark:text-gray-400" { "Loading dashboard..." }
                }
            }
        }
    );

    let styles = HeadElement::Style(PreEscaped(
        r#"
        #dashboard-content.htmx-added {
            opacity: 0;
        }

        #dashboard-content {
            opacity: 1;
            transition: opacity 200ms ease-out;
        }
        "#
        .to_owned(),
    ));

    base("Dashboard", &[styles], &content)
}

/// Display the dashboard content.
///
/// Both upstream requests are in flight at the same time and either may fail
/// without affecting the other: a failed fetch is logged and rendered the
/// same as missing data. The response is always 200 with HTML; upstream
/// failure is never surfaced to the visitor.
pub async fn get_dashboard_content(State(state): State<DashboardState>) -> Markup {
    let (summary, transactions) = tokio::join!(
        state.api.summary(),
        state.api.recent_transactions(RECENT_TRANSACTIONS_LIMIT),
    );

    let summary = summary
        .inspect_err(|error| tracing::error!("could not fetch dashboard summary: {error}"))
        .ok();

    let transactions = transactions
        .inspect_err(|error| tracing::error!("could not fetch recent transactions: {error}"))
        .unwrap_or_default();

    dashboard_content_view(summary.as_ref(), &transactions)
}

/// Renders the dashboard content: headline cards, cash-flow chart, quick
/// actions, recent transactions, and the assets/investments overview.
///
/// Pure function of its inputs. Absent data renders as zero amounts and
/// empty states, never as an error.
fn dashboard_content_view(
    summary: Option<&DashboardSummary>,
    transactions: &[RecentTransaction],
) -> Markup {
    html!(
        div id="dashboard-content" class="w-full mx-auto max-w-screen-xl space-y-6" {
            (summary_cards_view(summary))

            @if !transactions.is_empty() {
                (chart_view(&recent_cashflow_chart(transactions)))
            }

            (quick_actions_view())

            (recent_transactions_view(transactions))

            (overview_cards_view(summary))
        }
    )
}

#[cfg(test)]
mod tests {
    use axum::extract::State;
    use reqwest::Client;
    use scraper::{Html, Selector};
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    use crate::{ApiClient, endpoints};

    use super::{DashboardState, get_dashboard_content, get_dashboard_page};

    fn state_for(mock_server: &MockServer) -> DashboardState {
        DashboardState {
            api: ApiClient::new(Client::new(), mock_server.uri()),
        }
    }

    async fn mount_summary(mock_server: &MockServer, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(endpoints::SUMMARY_API))
            .respond_with(response)
            .mount(mock_server)
            .await;
    }

    async fn mount_transactions(mock_server: &MockServer, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(endpoints::TRANSACTIONS_API))
            .and(query_param("limit", "5"))
            .respond_with(response)
            .mount(mock_server)
            .await;
    }

    fn quick_action_titles(html: &Html) -> Vec<String> {
        let selector = Selector::parse("a h4").unwrap();
        html.select(&selector)
            .map(|title| title.text().collect())
            .collect()
    }

    #[tokio::test]
    async fn page_shell_shows_loading_indicator_and_fragment_hook() {
        let html = get_dashboard_page().await.into_string();
        let document = Html::parse_document(&html);
        assert!(
            document.errors.is_empty(),
            "Got HTML parsing errors: {:?}",
            document.errors
        );

        assert!(html.contains("Loading dashboard..."));

        let fragment_selector = Selector::parse("div[hx-get]").unwrap();
        let fragment_hook = document
            .select(&fragment_selector)
            .next()
            .expect("page shell should request the content fragment");
        assert_eq!(
            fragment_hook.value().attr("hx-get"),
            Some(endpoints::DASHBOARD_CONTENT)
        );
        assert_eq!(fragment_hook.value().attr("hx-trigger"), Some("load"));
    }

    #[tokio::test]
    async fn content_renders_summary_and_transactions() {
        let mock_server = MockServer::start().await;
        mount_summary(
            &mock_server,
            ResponseTemplate::new(200).set_body_json(json!({
                "totalIncome": 1000.0,
                "totalExpenses": 400.0,
                "netWorth": 5000.0,
                "profitLoss": 600.0,
                "totalAssets": 3000.0,
                "totalInvestments": 2000.0,
            })),
        )
        .await;
        mount_transactions(
            &mock_server,
            ResponseTemplate::new(200).set_body_json(json!([{
                "id": 1,
                "type": "income",
                "amount": 250.0,
                "description": "Consulting",
                "date": "2024-03-01",
                "category": {"name": "Services"},
            }])),
        )
        .await;

        let html = get_dashboard_content(State(state_for(&mock_server)))
            .await
            .into_string();

        assert!(html.contains("$1,000"));
        assert!(html.contains("$600"));
        assert!(html.contains("Consulting"));
        assert!(html.contains("Services • Mar 01, 2024"));
        assert!(html.contains("+$250"));
        assert!(html.contains("text-green-600"));
        assert!(html.contains("id=\"cashflow-chart\""));
        assert!(!html.contains("Loading dashboard..."));
    }

    #[tokio::test]
    async fn content_treats_upstream_failure_as_missing_data() {
        let mock_server = MockServer::start().await;
        mount_summary(&mock_server, ResponseTemplate::new(500)).await;
        mount_transactions(&mock_server, ResponseTemplate::new(500)).await;

        let html = get_dashboard_content(State(state_for(&mock_server)))
            .await
            .into_string();

        assert_eq!(html.matches("$0</span>").count(), 6);
        assert!(html.contains("No transactions yet"));
        assert!(!html.contains("id=\"cashflow-chart\""));
    }

    #[tokio::test]
    async fn fetch_failures_are_isolated_from_each_other() {
        let mock_server = MockServer::start().await;
        mount_summary(&mock_server, ResponseTemplate::new(502)).await;
        mount_transactions(
            &mock_server,
            ResponseTemplate::new(200).set_body_json(json!([{
                "id": 2,
                "type": "expense",
                "amount": 80.0,
                "description": "Hosting",
                "date": "2024-03-02",
                "category": {"name": "Infrastructure"},
            }])),
        )
        .await;

        let html = get_dashboard_content(State(state_for(&mock_server)))
            .await
            .into_string();

        // Summary cards fall back to zero while the listing still renders.
        assert_eq!(html.matches("$0</span>").count(), 6);
        assert!(html.contains("Hosting"));
        assert!(html.contains("-$80"));
        assert!(html.contains("text-red-600"));
    }

    #[tokio::test]
    async fn quick_actions_render_the_same_on_success_and_failure() {
        let mock_server = MockServer::start().await;
        mount_summary(&mock_server, ResponseTemplate::new(500)).await;
        mount_transactions(&mock_server, ResponseTemplate::new(500)).await;

        let failure_html = get_dashboard_content(State(state_for(&mock_server)))
            .await
            .into_string();

        let mock_server = MockServer::start().await;
        mount_summary(
            &mock_server,
            ResponseTemplate::new(200).set_body_json(json!({
                "totalIncome": 1.0,
                "totalExpenses": 2.0,
                "netWorth": 3.0,
                "profitLoss": 4.0,
                "totalAssets": 5.0,
                "totalInvestments": 6.0,
            })),
        )
        .await;
        mount_transactions(
            &mock_server,
            ResponseTemplate::new(200).set_body_json(json!([])),
        )
        .await;

        let success_html = get_dashboard_content(State(state_for(&mock_server)))
            .await
            .into_string();

        let failure_titles = quick_action_titles(&Html::parse_fragment(&failure_html));
        let success_titles = quick_action_titles(&Html::parse_fragment(&success_html));

        assert_eq!(failure_titles.len(), 4);
        assert_eq!(failure_titles, success_titles);
    }

    #[tokio::test]
    async fn empty_listing_skips_the_chart() {
        let mock_server = MockServer::start().await;
        mount_summary(&mock_server, ResponseTemplate::new(500)).await;
        mount_transactions(
            &mock_server,
            ResponseTemplate::new(200).set_body_json(json!([])),
        )
        .await;

        let html = get_dashboard_content(State(state_for(&mock_server)))
            .await
            .into_string();

        assert!(!html.contains("id=\"cashflow-chart\""));
        assert!(html.contains("No transactions yet"));
    }
}
