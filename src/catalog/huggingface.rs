//! HuggingFace数据集目录客户端

use async_trait::async_trait;
use serde::Deserialize;

use super::{CatalogError, DatasetCatalog, ResourceRecord};
use crate::config::CatalogConfig;
use crate::utils::truncation::{TruncationLimits, truncate_with_ellipsis};

/// HuggingFace Hub接口返回的数据集条目
#[derive(Deserialize)]
struct HuggingFaceDataset {
    #[serde(default)]
    id: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    downloads: Option<u64>,
}

/// HuggingFace数据集目录客户端（次级目录，匿名访问）
#[derive(Clone)]
pub struct HuggingFaceCatalog {
    http: reqwest::Client,
}

impl HuggingFaceCatalog {
    const API_ENDPOINT: &'static str = "https://huggingface.co/api/datasets";

    /// 创建HuggingFace目录客户端
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .user_agent("marketscout-rs")
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl DatasetCatalog for HuggingFaceCatalog {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<ResourceRecord>, CatalogError> {
        let limit = max_results.to_string();
        let response = self
            .http
            .get(Self::API_ENDPOINT)
            .query(&[("search", query), ("limit", limit.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CatalogError::Malformed(format!(
                "HuggingFace endpoint returned status {}",
                response.status()
            )));
        }

        let datasets: Vec<HuggingFaceDataset> = response.json().await?;
        Ok(datasets
            .into_iter()
            .map(|dataset| {
                let url = format!("https://huggingface.co/datasets/{}", dataset.id);
                let description = truncate_with_ellipsis(
                    &dataset
                        .description
                        .unwrap_or_else(|| "No description available".to_string()),
                    TruncationLimits::CATALOG_DESCRIPTION,
                );
                ResourceRecord {
                    title: dataset.id,
                    url,
                    source: "HuggingFace".to_string(),
                    description,
                    downloads: Some(dataset.downloads.unwrap_or(0)),
                    stars: None,
                }
            })
            .collect())
    }
}
