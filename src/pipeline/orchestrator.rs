//! 管道编排器

use crate::pipeline::agents::{ProposalAgent, ResearchAgent, ResourceAgent, UseCaseAgent};
use crate::pipeline::context::PipelineContext;
use crate::pipeline::state::{PipelineReport, PipelineState};

/// 顺序执行调研、用例、资源、提案四个阶段。
///
/// 各阶段自行吞掉失败并产出诊断文本，编排器本身没有失败路径。
#[derive(Default)]
pub struct PipelineOrchestrator;

impl PipelineOrchestrator {
    /// 运行完整管道，返回四个字段全部非空的报告
    pub async fn run(&self, context: &PipelineContext, subject: &str) -> PipelineReport {
        println!("🚀 开始分析主题: {}", subject);
        let mut state = PipelineState::new(subject);

        println!("🔍 阶段 1/4: 市场调研...");
        let research = ResearchAgent.execute(context, &state.subject).await;
        state.research = Some(research);

        println!("💡 阶段 2/4: 用例构想...");
        let use_cases = UseCaseAgent
            .execute(context, state.research.as_deref().unwrap_or_default())
            .await;
        state.use_cases = Some(use_cases);

        println!("📊 阶段 3/4: 资源收集...");
        let resources = ResourceAgent
            .execute(
                context,
                state.use_cases.as_deref().unwrap_or_default(),
                &state.subject,
            )
            .await;
        state.resources = Some(resources);

        println!("📝 阶段 4/4: 提案综合...");
        let proposal = ProposalAgent
            .execute(
                context,
                state.research.as_deref().unwrap_or_default(),
                state.use_cases.as_deref().unwrap_or_default(),
                state.resources.as_deref().unwrap_or_default(),
            )
            .await;
        state.proposal = Some(proposal);

        println!("✅ 四个阶段全部完成");
        state.into_report()
    }
}
