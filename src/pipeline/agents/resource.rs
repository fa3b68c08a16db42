//! 资源收集阶段

use anyhow::Result;

use crate::catalog::{
    CatalogError, GITHUB_KEY, HUGGINGFACE_KEY, ResourceMap, ResourceRecord,
    format_resources_markdown,
};
use crate::pipeline::context::PipelineContext;
use crate::pipeline::extract::{MAX_RESOURCE_LOOKUPS, extract_use_case_items};
use crate::utils::threads::do_parallel_with_limit;

/// 资源收集员 - 负责为用例匹配数据集与开源仓库并渲染资源清单
#[derive(Default)]
pub struct ResourceAgent;

impl ResourceAgent {
    /// 执行资源阶段，任何失败都转化为诊断文本，保证返回非空
    pub async fn execute(
        &self,
        context: &PipelineContext,
        use_cases: &str,
        subject: &str,
    ) -> String {
        match self.run(context, use_cases, subject).await {
            Ok(markdown) => markdown,
            Err(e) => format!("Resource error: {}", e),
        }
    }

    async fn run(
        &self,
        context: &PipelineContext,
        use_cases: &str,
        subject: &str,
    ) -> Result<String> {
        let mut resource_map = self
            .collect_primary_resources(context, use_cases, subject)
            .await;

        // 次级目录按主题检索，与具体用例无关；失败或为空时直接略过
        let max_results = context.config.catalog.max_results;
        let (huggingface, github) = tokio::join!(
            context.huggingface_catalog.search(subject, max_results),
            context.github_catalog.search(subject, max_results),
        );

        match huggingface {
            Ok(records) if !records.is_empty() => {
                resource_map.insert(HUGGINGFACE_KEY, records);
            }
            Ok(_) => {}
            Err(e) => eprintln!("⚠️ HuggingFace检索失败，略过该目录: {}", e),
        }
        match github {
            Ok(records) if !records.is_empty() => {
                resource_map.insert(GITHUB_KEY, records);
            }
            Ok(_) => {}
            Err(e) => eprintln!("⚠️ GitHub检索失败，略过该目录: {}", e),
        }

        Ok(format_resources_markdown(&resource_map))
    }

    /// 逐条用例并发检索主目录。
    ///
    /// 聚合过程整体失败时降级为单键错误映射，不让错误越过本阶段。
    async fn collect_primary_resources(
        &self,
        context: &PipelineContext,
        use_cases: &str,
        subject: &str,
    ) -> ResourceMap {
        match self.try_collect_primary(context, use_cases, subject).await {
            Ok(map) => map,
            Err(e) => {
                eprintln!("⚠️ 主目录聚合失败，输出错误占位: {}", e);
                ResourceMap::error_map(&e)
            }
        }
    }

    async fn try_collect_primary(
        &self,
        context: &PipelineContext,
        use_cases: &str,
        subject: &str,
    ) -> Result<ResourceMap, CatalogError> {
        let items = extract_use_case_items(use_cases, subject);
        let selected: Vec<String> = items.into_iter().take(MAX_RESOURCE_LOOKUPS).collect();

        println!("📊 检索主目录，共 {} 条用例", selected.len());

        let max_results = context.config.catalog.max_results;
        let queries: Vec<String> = selected
            .iter()
            .map(|case| format!("{} {}", case, subject))
            .collect();
        let search_tasks: Vec<_> = queries
            .iter()
            .map(|query| context.primary_catalog.search(query, max_results))
            .collect();
        let results =
            do_parallel_with_limit(search_tasks, context.config.catalog.max_parallels).await;

        let mut resource_map = ResourceMap::new();
        for (case, result) in selected.iter().zip(results) {
            let records = result?;
            let records = if records.is_empty() {
                vec![ResourceRecord::no_result_sentinel()]
            } else {
                records
            };
            resource_map.insert(case.clone(), records);
        }
        Ok(resource_map)
    }
}
