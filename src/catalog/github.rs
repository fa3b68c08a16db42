//! GitHub代码仓目录客户端

use async_trait::async_trait;
use serde::Deserialize;

use super::{CatalogError, DatasetCatalog, ResourceRecord};
use crate::config::CatalogConfig;

#[derive(Deserialize)]
struct GitHubSearchResponse {
    #[serde(default)]
    items: Vec<GitHubRepo>,
}

#[derive(Deserialize)]
struct GitHubRepo {
    #[serde(default)]
    name: String,
    #[serde(default)]
    html_url: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    stargazers_count: u64,
}

/// GitHub仓库检索客户端（次级目录）。
///
/// 未配置令牌时匿名访问，受GitHub更严格的限流约束。
#[derive(Clone)]
pub struct GitHubCatalog {
    config: CatalogConfig,
    http: reqwest::Client,
}

impl GitHubCatalog {
    const API_ENDPOINT: &'static str = "https://api.github.com/search/repositories";

    /// 创建GitHub目录客户端
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .user_agent("marketscout-rs")
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self { config, http })
    }
}

#[async_trait]
impl DatasetCatalog for GitHubCatalog {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<ResourceRecord>, CatalogError> {
        let search_query = format!("{} AI dataset", query);
        let mut request = self
            .http
            .get(Self::API_ENDPOINT)
            .header("Accept", "application/vnd.github.v3+json")
            .query(&[
                ("q", search_query.as_str()),
                ("sort", "stars"),
                ("order", "desc"),
            ]);

        if !self.config.github_token.trim().is_empty() {
            request = request.header(
                "Authorization",
                format!("token {}", self.config.github_token),
            );
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(CatalogError::Malformed(format!(
                "GitHub endpoint returned status {}",
                response.status()
            )));
        }

        let payload: GitHubSearchResponse = response.json().await?;
        Ok(payload
            .items
            .into_iter()
            .take(max_results)
            .map(|repo| ResourceRecord {
                title: repo.name,
                url: repo.html_url,
                source: "GitHub".to_string(),
                description: repo
                    .description
                    .unwrap_or_else(|| "No description available".to_string()),
                downloads: None,
                stars: Some(repo.stargazers_count),
            })
            .collect())
    }
}
