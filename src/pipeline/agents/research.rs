//! 市场调研阶段

use anyhow::Result;

use crate::pipeline::context::PipelineContext;
use crate::pipeline::state::EMPTY_RESEARCH_FALLBACK;
use crate::search::SearchSnippet;
use crate::utils::truncation::{TruncationLimits, truncate_with_ellipsis};

/// 市场调研员 - 负责联网检索主题背景并生成行业调研摘要
#[derive(Default)]
pub struct ResearchAgent;

impl ResearchAgent {
    const SYSTEM_PROMPT: &'static str = r#"You are an expert market research analyst. Research the provided company/industry and identify:
1. Industry segment and characteristics
2. Company's key offerings and strategic focus areas
3. Major competitors and their AI initiatives
4. Current challenges and opportunities

Provide comprehensive, well-structured research with citations from reliable sources."#;

    /// 执行调研阶段，任何失败都转化为诊断文本，保证返回非空
    pub async fn execute(&self, context: &PipelineContext, subject: &str) -> String {
        match self.run(context, subject).await {
            Ok(text) => text,
            Err(e) => format!("Research error: {}", e),
        }
    }

    async fn run(&self, context: &PipelineContext, subject: &str) -> Result<String> {
        let query = format!("Research {} industry overview and key facts", subject);

        // 检索失败不阻断本阶段，降级为纯模型推理
        let snippets = match context.web_search.search(&query).await {
            Ok(snippets) => snippets,
            Err(e) => {
                eprintln!("⚠️ 联网检索失败，改用纯模型推理: {}", e);
                Vec::new()
            }
        };

        let user_prompt = Self::build_prompt(&query, &snippets);
        let response = context.llm.complete(Self::SYSTEM_PROMPT, &user_prompt).await?;

        if response.trim().is_empty() {
            return Ok(EMPTY_RESEARCH_FALLBACK.to_string());
        }
        Ok(truncate_with_ellipsis(
            &response,
            TruncationLimits::RESEARCH_OUTPUT,
        ))
    }

    /// 将检索摘要拼接进用户提示词
    fn build_prompt(query: &str, snippets: &[SearchSnippet]) -> String {
        if snippets.is_empty() {
            return query.to_string();
        }

        let mut prompt = format!("{}\n\nWeb search findings:\n", query);
        for snippet in snippets {
            prompt.push_str(&format!(
                "- {} ({}): {}\n",
                snippet.title, snippet.url, snippet.content
            ));
        }
        prompt
    }
}
