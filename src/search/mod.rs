//! 联网搜索模块
//!
//! 调研阶段先检索再提示，搜索失败不应中断管道。

pub mod tavily;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use tavily::TavilyClient;

/// 联网搜索返回的单条结果摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSnippet {
    pub title: String,
    pub url: String,
    pub content: String,
}

/// 联网搜索错误
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Search API key is not configured")]
    MissingApiKey,
    #[error("Search request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Unexpected search response: {0}")]
    Malformed(String),
}

/// 联网搜索服务接口。
///
/// 真实实现为[`TavilyClient`]，测试中可注入伪实现。
#[async_trait]
pub trait WebSearchService: Send + Sync {
    /// 执行一次搜索，返回结果摘要列表
    async fn search(&self, query: &str) -> Result<Vec<SearchSnippet>, SearchError>;
}
