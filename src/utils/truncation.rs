/// 截断溢出时追加的省略标记
pub const ELLIPSIS: &str = "...";

/// 管道各阶段之间传递文本时使用的硬性字符截断上限。
///
/// 上限以 `char` 计数，用于控制发送给模型的上下文规模，
/// 超限的文本由 [`truncate_with_ellipsis`] 追加省略标记。
pub struct TruncationLimits;

impl TruncationLimits {
    /// 调研阶段输出入库前的上限
    pub const RESEARCH_OUTPUT: usize = 500;
    /// 调研文本作为用例阶段输入时的上限
    pub const USE_CASE_INPUT: usize = 300;
    /// 用例阶段输出入库前的上限
    pub const USE_CASE_OUTPUT: usize = 400;
    /// 提案阶段输入中调研文本的上限
    pub const PROPOSAL_RESEARCH_INPUT: usize = 200;
    /// 提案阶段输入中用例文本的上限
    pub const PROPOSAL_USE_CASES_INPUT: usize = 200;
    /// 提案阶段输入中资源清单的上限
    pub const PROPOSAL_RESOURCES_INPUT: usize = 100;
    /// 数据集描述在资源记录中的上限
    pub const CATALOG_DESCRIPTION: usize = 200;
}

/// 按字符数硬截断文本，超限时在结尾追加省略标记。
///
/// 未超限的文本原样返回，不追加任何标记。
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}
