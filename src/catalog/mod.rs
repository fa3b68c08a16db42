//! 数据集目录检索模块
//!
//! 资源阶段从三个公共目录收集数据集与代码仓：Kaggle为主目录，
//! 逐条用例检索；HuggingFace与GitHub为次级目录，按主题检索。

pub mod format;
pub mod github;
pub mod huggingface;
pub mod kaggle;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use format::format_resources_markdown;
pub use github::GitHubCatalog;
pub use huggingface::HuggingFaceCatalog;
pub use kaggle::KaggleCatalog;

/// 次级目录在资源映射中的固定键：HuggingFace
pub const HUGGINGFACE_KEY: &str = "HuggingFace Datasets";

/// 次级目录在资源映射中的固定键：GitHub
pub const GITHUB_KEY: &str = "GitHub Repositories";

/// 主目录无结果时哨兵记录的标题
pub const NO_RESULT_TITLE: &str = "No specific dataset found";

/// 目录检索错误
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog credentials are not configured")]
    MissingCredentials,
    #[error("Catalog request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Unexpected catalog response: {0}")]
    Malformed(String),
}

/// 单条资源记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub title: String,
    pub url: String,
    pub source: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloads: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars: Option<u64>,
}

impl ResourceRecord {
    /// 主目录查无结果时的哨兵记录
    pub fn no_result_sentinel() -> Self {
        Self {
            title: NO_RESULT_TITLE.to_string(),
            url: "https://www.kaggle.com/datasets".to_string(),
            source: "Kaggle".to_string(),
            description: "Search for relevant datasets on Kaggle".to_string(),
            downloads: None,
            stars: None,
        }
    }

    /// 聚合整体失败时的诊断记录
    pub fn error_record(err: impl std::fmt::Display) -> Self {
        Self {
            title: format!("Dataset API Error: {}", err),
            url: String::new(),
            source: "Error".to_string(),
            description: "Failed to fetch datasets from the primary catalog. \
                          Make sure API credentials are set up."
                .to_string(),
            downloads: None,
            stars: None,
        }
    }

    /// 是否为哨兵/诊断类记录，正文中渲染为占位行
    pub fn is_placeholder(&self) -> bool {
        self.title.contains("Error") || self.title == NO_RESULT_TITLE
    }
}

/// 按插入顺序维护“用例 -> 资源记录列表”的映射。
///
/// 渲染契约要求键序与插入序一致，因此底层用Vec而非HashMap。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceMap {
    entries: Vec<(String, Vec<ResourceRecord>)>,
}

impl ResourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入一个键，键已存在时覆盖原值、保留原位置
    pub fn insert(&mut self, key: impl Into<String>, records: Vec<ResourceRecord>) {
        let key = key.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = records;
        } else {
            self.entries.push((key, records));
        }
    }

    pub fn get(&self, key: &str) -> Option<&[ResourceRecord]> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ResourceRecord])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 聚合整体失败时的降级映射，仅含一个"Error"键
    pub fn error_map(err: impl std::fmt::Display) -> Self {
        let mut map = Self::new();
        map.insert("Error", vec![ResourceRecord::error_record(err)]);
        map
    }
}

/// 数据集目录检索接口。
///
/// 真实实现为三个目录客户端，测试中可注入伪实现。
#[async_trait]
pub trait DatasetCatalog: Send + Sync {
    /// 按查询词检索目录，返回至多`max_results`条记录
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<ResourceRecord>, CatalogError>;
}
