//! 提案综合阶段

use anyhow::Result;

use crate::pipeline::context::PipelineContext;
use crate::pipeline::state::EMPTY_PROPOSAL_FALLBACK;
use crate::utils::truncation::{TruncationLimits, truncate_with_ellipsis};

/// 提案撰写人 - 负责汇总前序阶段产出并生成商业提案
#[derive(Default)]
pub struct ProposalAgent;

impl ProposalAgent {
    const SYSTEM_PROMPT: &'static str = r#"You are a senior consultant. Create a business proposal that includes:
1. Executive summary
2. Top recommended use cases with implementation priority
3. Expected business impact and ROI considerations
4. Technical requirements and resource recommendations
5. Implementation roadmap"#;

    /// 执行提案阶段，任何失败都转化为诊断文本，保证返回非空
    pub async fn execute(
        &self,
        context: &PipelineContext,
        research: &str,
        use_cases: &str,
        resources: &str,
    ) -> String {
        match self.run(context, research, use_cases, resources).await {
            Ok(text) => text,
            Err(e) => format!("Proposal error: {}", e),
        }
    }

    async fn run(
        &self,
        context: &PipelineContext,
        research: &str,
        use_cases: &str,
        resources: &str,
    ) -> Result<String> {
        // 三路输入各自截断，控制提示词规模；提案输出本身不截断
        let query = format!(
            "Research: {}\nUse Cases: {}\nResources: {}\n\nCreate brief proposal",
            truncate_with_ellipsis(research, TruncationLimits::PROPOSAL_RESEARCH_INPUT),
            truncate_with_ellipsis(use_cases, TruncationLimits::PROPOSAL_USE_CASES_INPUT),
            truncate_with_ellipsis(resources, TruncationLimits::PROPOSAL_RESOURCES_INPUT),
        );

        let response = context.llm.complete(Self::SYSTEM_PROMPT, &query).await?;

        if response.trim().is_empty() {
            return Ok(EMPTY_PROPOSAL_FALLBACK.to_string());
        }
        Ok(response)
    }
}
