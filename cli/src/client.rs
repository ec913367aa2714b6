//! HTTP access to the history service.

use std::time::Duration;

use anyhow::{Context, Result};
use human_detect_shared::{
    ErrorResponse, FilterCriteria, HistoryError, HistoryQuery, HistoryResponse, PageState,
};

const USER_AGENT: &str = concat!("hd-cli/", env!("CARGO_PKG_VERSION"));
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin reqwest wrapper around `GET {base}/history`.
#[derive(Debug, Clone)]
pub struct HistoryClient {
    http: reqwest::Client,
    base: String,
}

impl HistoryClient {
    /// Client for the service rooted at `base`; a trailing `/` is ignored.
    pub fn new(base: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            base: base.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL of the history endpoint.
    pub fn history_url(&self) -> String {
        format!("{}/history", self.base)
    }

    /// Fetch one page. Non-2xx bodies become [`HistoryError::Api`].
    pub async fn fetch_page(&self, query: &HistoryQuery) -> Result<HistoryResponse, HistoryError> {
        tracing::debug!(page_index = query.page.index, page_size = query.page.size, "GET history");

        let response = self
            .http
            .get(self.history_url())
            .query(&query.query_pairs())
            .send()
            .await
            .map_err(|e| HistoryError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body: ErrorResponse = response
                .json()
                .await
                .map_err(|e| HistoryError::Decode(format!("HTTP {status}: {e}")))?;
            return Err(HistoryError::Api {
                status: status.as_u16(),
                message: body.message(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| HistoryError::Decode(e.to_string()))
    }

    /// Walk pages `1..=last_page` and concatenate their records.
    ///
    /// `total` is taken from the first page; the walk stops early if a page
    /// comes back empty.
    pub async fn fetch_all(
        &self,
        criteria: &FilterCriteria,
        page_size: u64,
    ) -> Result<HistoryResponse, HistoryError> {
        let mut page = PageState::with_size(page_size);
        let first = self
            .fetch_page(&HistoryQuery::new(criteria.clone(), page))
            .await?;
        let last_page = page.last_page(first.total);
        tracing::info!(total = first.total, last_page, "fetching full history");

        let mut merged = first;
        while page.index < last_page {
            page.index += 1;
            let next = self
                .fetch_page(&HistoryQuery::new(criteria.clone(), page))
                .await?;
            if next.is_empty() {
                tracing::warn!(page_index = page.index, "history ended before the reported total");
                break;
            }
            merged.records.extend(next.records);
        }

        Ok(merged)
    }
}
