//! 四阶段顺序管道
//!
//! 调研 -> 用例 -> 资源 -> 提案。管道对外总是产出完整报告，
//! 单个阶段的失败只体现为该字段的诊断文本。

pub mod agents;
pub mod context;
pub mod extract;
pub mod orchestrator;
pub mod state;

use std::sync::Arc;

use anyhow::Result;

use crate::catalog::{GitHubCatalog, HuggingFaceCatalog, KaggleCatalog};
use crate::config::Config;
use crate::llm::LLMClient;
use crate::outlet;
use crate::search::TavilyClient;
pub use context::PipelineContext;
pub use orchestrator::PipelineOrchestrator;
pub use state::{PipelineReport, PipelineState};

/// 在给定上下文中运行完整管道
pub async fn run_pipeline(context: &PipelineContext, subject: &str) -> PipelineReport {
    PipelineOrchestrator.run(context, subject).await
}

/// 可执行入口：组装真实服务、运行管道并按配置落盘报告
pub async fn launch(config: &Config, subject: &str) -> Result<PipelineReport> {
    let llm_client = LLMClient::new(config.clone())?;
    // 预检失败只告警，各阶段的兜底文案保证管道照常产出
    if let Err(e) = llm_client.check_connection().await {
        eprintln!("⚠️ 模型连通性预检未通过，阶段将以诊断文本兜底: {}", e);
    }

    let context = PipelineContext {
        config: config.clone(),
        llm: Arc::new(llm_client),
        web_search: Arc::new(TavilyClient::new(config.search.clone())?),
        primary_catalog: Arc::new(KaggleCatalog::new(config.catalog.clone())?),
        huggingface_catalog: Arc::new(HuggingFaceCatalog::new(config.catalog.clone())?),
        github_catalog: Arc::new(GitHubCatalog::new(config.catalog.clone())?),
    };

    let report = run_pipeline(&context, subject).await;

    if config.save_reports {
        outlet::save_reports(config, &report)?;
    } else {
        println!("⏭️ 已按配置跳过报告落盘");
    }

    Ok(report)
}
