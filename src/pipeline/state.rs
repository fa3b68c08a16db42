//! 管道运行状态与最终报告

use serde::{Deserialize, Serialize};

/// 阶段兜底文案：调研无输出
pub const EMPTY_RESEARCH_FALLBACK: &str = "No research results found";

/// 阶段兜底文案：用例无输出
pub const EMPTY_USE_CASES_FALLBACK: &str = "No use cases generated";

/// 阶段兜底文案：资源清单缺失
pub const EMPTY_RESOURCES_FALLBACK: &str = "No resources collected";

/// 阶段兜底文案：提案无输出
pub const EMPTY_PROPOSAL_FALLBACK: &str = "No proposal generated";

/// 单次运行的瞬时状态。
///
/// 四个阶段字段由对应阶段按执行顺序各写入一次，
/// 后续阶段只读取此前已填充的字段。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineState {
    pub subject: String,
    pub research: Option<String>,
    pub use_cases: Option<String>,
    pub resources: Option<String>,
    pub proposal: Option<String>,
}

impl PipelineState {
    /// 以分析主题初始化状态
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            ..Default::default()
        }
    }

    /// 汇总为最终报告。
    ///
    /// 正常流程中四个字段必然已填充；缺失时落到阶段兜底文案，
    /// 保证报告字段全部非空。
    pub fn into_report(self) -> PipelineReport {
        PipelineReport {
            subject: self.subject,
            research: self
                .research
                .unwrap_or_else(|| EMPTY_RESEARCH_FALLBACK.to_string()),
            use_cases: self
                .use_cases
                .unwrap_or_else(|| EMPTY_USE_CASES_FALLBACK.to_string()),
            resources: self
                .resources
                .unwrap_or_else(|| EMPTY_RESOURCES_FALLBACK.to_string()),
            proposal: self
                .proposal
                .unwrap_or_else(|| EMPTY_PROPOSAL_FALLBACK.to_string()),
        }
    }
}

/// 单次运行的最终产出，四个文本字段保证非空
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineReport {
    pub subject: String,
    pub research: String,
    pub use_cases: String,
    pub resources: String,
    pub proposal: String,
}
