use crate::api::error::ApiError;
use crate::api::types::{DashboardSnapshot, MessageRecord, StatsSnapshot};
use serde::{Deserialize, Serialize};

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;
pub mod types;

#[cfg(test)]
use mockall::automock;

/// Which family of endpoints the server exposes.
///
/// `Dashboard` is the current web UI (`/api/dashboard-data`, search via `?q=`);
/// `Stats` is the older page (`/api/stats`, search via `?query=`).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ApiVariant {
    #[default]
    Dashboard,
    Stats,
}

impl ApiVariant {
    /// Name of the query-string parameter the search endpoint expects.
    pub fn search_param(&self) -> &'static str {
        match self {
            ApiVariant::Dashboard => "q",
            ApiVariant::Stats => "query",
        }
    }
}

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DashboardApi: Send + Sync {
    /// Base URL requests are sent to.
    fn base_url(&self) -> String;

    /// Fetch the aggregated dashboard snapshot.
    async fn fetch_dashboard(&self) -> Result<DashboardSnapshot, ApiError>;

    /// Fetch the summary used by the older stats page.
    async fn fetch_stats(&self) -> Result<StatsSnapshot, ApiError>;

    /// Full-text search over archived messages.
    async fn search(&self, query: &str) -> Result<Vec<MessageRecord>, ApiError>;
}
