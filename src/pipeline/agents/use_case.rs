//! 用例构想阶段

use anyhow::Result;

use crate::pipeline::context::PipelineContext;
use crate::pipeline::state::EMPTY_USE_CASES_FALLBACK;
use crate::utils::truncation::{TruncationLimits, truncate_with_ellipsis};

/// 用例构想师 - 负责基于调研摘要提出可落地的AI用例
#[derive(Default)]
pub struct UseCaseAgent;

impl UseCaseAgent {
    const SYSTEM_PROMPT: &'static str = r#"You are an AI solutions architect. Analyze the research and identify relevant AI/ML use cases that address:
1. Operational efficiency improvements
2. Customer experience enhancements
3. Revenue growth opportunities
4. Competitive advantages through AI adoption

For each use case, provide:
- Clear title and description
- Business problem it solves
- Required AI technologies
- Expected impact and benefits
- Implementation complexity (Low/Medium/High)"#;

    /// 执行用例阶段，任何失败都转化为诊断文本，保证返回非空
    pub async fn execute(&self, context: &PipelineContext, research: &str) -> String {
        match self.run(context, research).await {
            Ok(text) => text,
            Err(e) => format!("Use case error: {}", e),
        }
    }

    async fn run(&self, context: &PipelineContext, research: &str) -> Result<String> {
        let truncated_research =
            truncate_with_ellipsis(research, TruncationLimits::USE_CASE_INPUT);
        let query = format!("Based on: {}\n\nSuggest 2 AI use cases", truncated_research);

        let response = context.llm.complete(Self::SYSTEM_PROMPT, &query).await?;

        if response.trim().is_empty() {
            return Ok(EMPTY_USE_CASES_FALLBACK.to_string());
        }
        Ok(truncate_with_ellipsis(
            &response,
            TruncationLimits::USE_CASE_OUTPUT,
        ))
    }
}
