//! 用例条目提取
//!
//! 从用例阶段的自由文本中切分出独立条目，供资源检索逐条使用。

/// 资源检索最多取用的用例条目数
pub const MAX_RESOURCE_LOOKUPS: usize = 2;

/// 判断一行是否开启新条目。
///
/// 三类标记：`-`/`*` 项目符号、`1.` 形式的数字编号、含 `:` 的标题行。
fn starts_new_item(line: &str) -> bool {
    if line.starts_with('-') || line.starts_with('*') {
        return true;
    }
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() < line.len() && rest.starts_with('.') {
        return true;
    }
    line.contains(':')
}

/// 从用例文本中提取条目列表。
///
/// 标记行开启新条目，其余非空行以空格续接到当前条目，
/// 首个标记之前的引言同样并入首条。对任意输入都返回至少一个条目：
/// 全文不含任何标记行时，回退为引用主题的合成条目。
pub fn extract_use_case_items(use_cases: &str, subject: &str) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    let mut current_item = String::new();
    let mut saw_marker = false;

    for line in use_cases.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if starts_new_item(line) {
            saw_marker = true;
            if !current_item.is_empty() {
                items.push(current_item.trim().to_string());
            }
            current_item = line.to_string();
        } else {
            if !current_item.is_empty() {
                current_item.push(' ');
            }
            current_item.push_str(line);
        }
    }
    if !current_item.is_empty() {
        items.push(current_item.trim().to_string());
    }

    if !saw_marker || items.is_empty() {
        return vec![format!("AI applications in {}", subject)];
    }

    items
}
