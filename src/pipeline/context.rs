//! 管道上下文

use std::sync::Arc;

use crate::catalog::DatasetCatalog;
use crate::config::Config;
use crate::llm::CompletionService;
use crate::search::WebSearchService;

/// 管道上下文，携带配置与各外部服务句柄。
///
/// 服务以注入的trait对象持有，不经任何全局单例，
/// 测试中可整体替换为伪实现。
#[derive(Clone)]
pub struct PipelineContext {
    pub config: Config,
    /// 模型补全服务
    pub llm: Arc<dyn CompletionService>,
    /// 联网检索服务
    pub web_search: Arc<dyn WebSearchService>,
    /// 主数据集目录（逐用例检索）
    pub primary_catalog: Arc<dyn DatasetCatalog>,
    /// HuggingFace数据集目录（按主题检索）
    pub huggingface_catalog: Arc<dyn DatasetCatalog>,
    /// GitHub仓库目录（按主题检索）
    pub github_catalog: Arc<dyn DatasetCatalog>,
}
