//! 报告落盘
//!
//! 每次运行在输出目录产出三个文件：资源清单、架构图、完整报告。
//! 文件名带主题slug与时间戳，历史产物不会被覆盖。

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;

use crate::config::Config;
use crate::pipeline::state::PipelineReport;

/// 架构示意图，随每次运行原样写出
const ARCHITECTURE_DIAGRAM: &str = r#"flowchart TD
    A[User Input: Company/Industry] --> B[Research Agent]

    subgraph MultiAgentSystem [Multi-Agent Architecture]
        B[Research Agent] --> C[Use Case Agent]
        C --> D[Resource Agent]
        D --> E[Proposal Agent]
    end

    B --> F[Web Search<br>Tavily API]
    D --> G[Dataset Platforms<br>Kaggle, HuggingFace, GitHub]

    E --> H[Final Report]
    E --> I[Use Cases with References]
    E --> J[Resource Assets]

    style MultiAgentSystem fill:#f9f9f9,stroke:#333,stroke-width:2px
"#;

/// 将报告写入输出目录，返回写出的文件路径列表
pub fn save_reports(config: &Config, report: &PipelineReport) -> Result<Vec<PathBuf>> {
    println!("\n🖊️ 报告存储中...");
    let output_dir = &config.output_path;
    fs::create_dir_all(output_dir)
        .with_context(|| format!("无法创建输出目录: {}", output_dir.display()))?;

    let now = Local::now();
    let slug = subject_slug(&report.subject);
    let stamp = now.format("%Y%m%d_%H%M%S").to_string();
    let generated_at = now.format("%Y-%m-%d %H:%M:%S").to_string();

    let files = [
        (
            format!("resources_{}_{}.md", slug, stamp),
            render_resources_page(report, &generated_at),
        ),
        (
            format!("architecture_{}_{}.mmd", slug, stamp),
            ARCHITECTURE_DIAGRAM.to_string(),
        ),
        (
            format!("full_report_{}_{}.md", slug, stamp),
            render_full_report(report, &generated_at),
        ),
    ];

    let mut saved = Vec::with_capacity(files.len());
    for (filename, content) in files {
        let path = output_dir.join(filename);
        fs::write(&path, content).with_context(|| format!("无法写入报告: {}", path.display()))?;
        println!("💾 已保存: {}", path.display());
        saved.push(path);
    }

    println!("💾 报告保存完成，输出目录: {}", output_dir.display());
    Ok(saved)
}

/// 主题转文件名slug：空格换下划线并转小写
fn subject_slug(subject: &str) -> String {
    subject.replace(' ', "_").to_lowercase()
}

/// 渲染独立的资源清单页
pub fn render_resources_page(report: &PipelineReport, generated_at: &str) -> String {
    format!(
        "# AI Resources for {}\n\n\
         *Generated on {}*\n\n\
         {}\n\n\
         ---\n\
         *This resource list was generated automatically using a multi-agent AI system.*\n",
        report.subject, generated_at, report.resources
    )
}

/// 渲染四个阶段合并的完整报告
pub fn render_full_report(report: &PipelineReport, generated_at: &str) -> String {
    format!(
        "# AI Use Case Analysis for {}\n\n\
         *Generated on {}*\n\n\
         ## Executive Summary\n\n\
         This report provides a comprehensive analysis of AI and Generative AI use cases for {}, \
         including market research, potential applications, and implementation resources.\n\n\
         ## Market Research\n\n\
         {}\n\n\
         ## AI Use Cases\n\n\
         {}\n\n\
         ## Resource Assets\n\n\
         {}\n\n\
         ## Final Proposal\n\n\
         {}\n\n\
         ---\n\
         *This report was generated automatically using a multi-agent AI system.*\n",
        report.subject,
        generated_at,
        report.subject,
        report.research,
        report.use_cases,
        report.resources,
        report.proposal
    )
}

// Include tests
#[cfg(test)]
mod tests;
