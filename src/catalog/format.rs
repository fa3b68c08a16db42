//! 资源映射的Markdown渲染

use super::ResourceMap;

/// 将资源映射渲染为Markdown文档。
///
/// 输出只取决于映射内容：键按插入顺序渲染为二级标题，
/// 空列表或仅含哨兵/诊断记录的键渲染为占位行。
pub fn format_resources_markdown(resource_map: &ResourceMap) -> String {
    let mut markdown_content = String::from("# AI Implementation Resources\n\n");

    for (use_case, resources) in resource_map.iter() {
        markdown_content.push_str(&format!("## Use Case: {}\n\n", use_case));

        if resources.is_empty() || (resources.len() == 1 && resources[0].is_placeholder()) {
            markdown_content.push_str("No specific resources found for this use case.\n\n");
            continue;
        }

        for resource in resources {
            if resource.url.is_empty() {
                markdown_content.push_str(&format!(
                    "- **{}** ({})\n",
                    resource.title, resource.source
                ));
            } else {
                markdown_content.push_str(&format!(
                    "- **[{}]({})** ({})\n",
                    resource.title, resource.url, resource.source
                ));
            }

            markdown_content.push_str(&format!("  - {}\n", resource.description));
            if let Some(downloads) = resource.downloads {
                markdown_content.push_str(&format!("  - Downloads: {}\n", downloads));
            }
            if let Some(stars) = resource.stars {
                markdown_content.push_str(&format!("  - Stars: {}\n", stars));
            }
            markdown_content.push('\n');
        }
    }

    markdown_content
}
