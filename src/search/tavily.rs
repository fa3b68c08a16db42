//! Tavily搜索客户端

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{SearchError, SearchSnippet, WebSearchService};
use crate::config::SearchConfig;

#[derive(Serialize)]
struct TavilyRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    max_results: usize,
}

#[derive(Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<TavilyResult>,
}

#[derive(Deserialize)]
struct TavilyResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    content: String,
}

/// Tavily搜索客户端
#[derive(Clone)]
pub struct TavilyClient {
    config: SearchConfig,
    http: reqwest::Client,
}

impl TavilyClient {
    /// 创建搜索客户端
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self { config, http })
    }
}

#[async_trait]
impl WebSearchService for TavilyClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchSnippet>, SearchError> {
        if self.config.api_key.trim().is_empty() {
            return Err(SearchError::MissingApiKey);
        }

        let request = TavilyRequest {
            api_key: &self.config.api_key,
            query,
            max_results: self.config.max_results,
        };

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SearchError::Malformed(format!(
                "search endpoint returned status {}",
                response.status()
            )));
        }

        let payload: TavilyResponse = response.json().await?;
        Ok(payload
            .results
            .into_iter()
            .map(|r| SearchSnippet {
                title: r.title,
                url: r.url,
                content: r.content,
            })
            .collect())
    }
}
