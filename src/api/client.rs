//! ListenTG Dashboard API Client
//!
//! A thin JSON client for the dashboard web server: snapshot polling, the older
//! stats summary, and message search.

use crate::api::error::ApiError;
use crate::api::types::{DashboardSnapshot, MessageRecord, StatsSnapshot};
use crate::api::{ApiVariant, DashboardApi};
use crate::consts::cli_consts::http;
use crate::environment::Environment;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("listentg-dashboard/", env!("CARGO_PKG_VERSION"));

const DASHBOARD_ENDPOINT: &str = "/api/dashboard-data";
const STATS_ENDPOINT: &str = "/api/stats";
const SEARCH_ENDPOINT: &str = "/api/search";

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    environment: Environment,
    variant: ApiVariant,
}

impl ApiClient {
    pub fn new(environment: Environment, variant: ApiVariant) -> Result<Self, ApiError> {
        let client = ClientBuilder::new()
            .connect_timeout(http::connect_timeout())
            .timeout(http::request_timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            environment,
            variant,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "{}?{}={}",
            self.build_url(SEARCH_ENDPOINT),
            self.variant.search_param(),
            urlencoding::encode(query)
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let response = Self::handle_response_status(response).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait::async_trait]
impl DashboardApi for ApiClient {
    fn base_url(&self) -> String {
        self.environment.api_url()
    }

    async fn fetch_dashboard(&self) -> Result<DashboardSnapshot, ApiError> {
        self.get_json(&self.build_url(DASHBOARD_ENDPOINT)).await
    }

    async fn fetch_stats(&self) -> Result<StatsSnapshot, ApiError> {
        self.get_json(&self.build_url(STATS_ENDPOINT)).await
    }

    async fn search(&self, query: &str) -> Result<Vec<MessageRecord>, ApiError> {
        self.get_json(&self.search_url(query)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(url: &str, variant: ApiVariant) -> ApiClient {
        ApiClient::new(Environment::custom(url).unwrap(), variant).unwrap()
    }

    #[test]
    fn test_build_url_joins_without_double_slash() {
        let client = client("http://localhost:8000/", ApiVariant::Dashboard);
        assert_eq!(
            client.build_url(DASHBOARD_ENDPOINT),
            "http://localhost:8000/api/dashboard-data"
        );
        assert_eq!(client.build_url("api/stats"), "http://localhost:8000/api/stats");
    }

    #[test]
    fn test_search_url_encodes_query() {
        let client = client("http://localhost:8000", ApiVariant::Dashboard);
        assert_eq!(
            client.search_url("rust & tokio"),
            "http://localhost:8000/api/search?q=rust%20%26%20tokio"
        );
    }

    #[test]
    fn test_stats_variant_uses_query_param() {
        let client = client("http://localhost:8000", ApiVariant::Stats);
        assert_eq!(
            client.search_url("你好"),
            "http://localhost:8000/api/search?query=%E4%BD%A0%E5%A5%BD"
        );
    }
}
