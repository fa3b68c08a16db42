#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::config::Config;
    use crate::outlet::{render_full_report, render_resources_page, save_reports};
    use crate::pipeline::state::PipelineReport;

    fn sample_report() -> PipelineReport {
        PipelineReport {
            subject: "Retail Banking".to_string(),
            research: "Research body".to_string(),
            use_cases: "- Fraud detection".to_string(),
            resources: "# AI Implementation Resources\n\n## Use Case: Fraud detection\n".to_string(),
            proposal: "Proposal body".to_string(),
        }
    }

    fn config_in(dir: &TempDir) -> Config {
        let mut config = Config::default();
        config.output_path = dir.path().to_path_buf();
        config
    }

    #[test]
    fn test_save_reports_writes_three_files() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(&temp_dir);
        let report = sample_report();

        let saved = save_reports(&config, &report).unwrap();

        assert_eq!(saved.len(), 3);
        for path in &saved {
            assert!(path.exists(), "missing artifact: {}", path.display());
        }
    }

    #[test]
    fn test_filenames_carry_subject_slug() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(&temp_dir);
        let report = sample_report();

        let saved = save_reports(&config, &report).unwrap();
        let names: Vec<String> = saved
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert!(names[0].starts_with("resources_retail_banking_"));
        assert!(names[0].ends_with(".md"));
        assert!(names[1].starts_with("architecture_retail_banking_"));
        assert!(names[1].ends_with(".mmd"));
        assert!(names[2].starts_with("full_report_retail_banking_"));
        assert!(names[2].ends_with(".md"));
    }

    #[test]
    fn test_architecture_file_contains_flowchart() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(&temp_dir);

        let saved = save_reports(&config, &sample_report()).unwrap();
        let diagram = fs::read_to_string(&saved[1]).unwrap();

        assert!(diagram.starts_with("flowchart TD"));
        assert!(diagram.contains("subgraph MultiAgentSystem [Multi-Agent Architecture]"));
        assert!(diagram.contains("B --> F[Web Search<br>Tavily API]"));
        assert!(diagram.contains("D --> G[Dataset Platforms<br>Kaggle, HuggingFace, GitHub]"));
    }

    #[test]
    fn test_render_full_report_layout() {
        let report = sample_report();
        let rendered = render_full_report(&report, "2025-01-01 00:00:00");

        assert!(rendered.starts_with("# AI Use Case Analysis for Retail Banking\n"));
        assert!(rendered.contains("*Generated on 2025-01-01 00:00:00*"));
        assert!(rendered.contains("## Executive Summary"));

        let research_at = rendered.find("## Market Research").unwrap();
        let use_cases_at = rendered.find("## AI Use Cases").unwrap();
        let resources_at = rendered.find("## Resource Assets").unwrap();
        let proposal_at = rendered.find("## Final Proposal").unwrap();
        assert!(research_at < use_cases_at);
        assert!(use_cases_at < resources_at);
        assert!(resources_at < proposal_at);

        assert!(rendered.contains("## Market Research\n\nResearch body\n"));
        assert!(rendered.contains("## Final Proposal\n\nProposal body\n"));
        assert!(rendered.ends_with(
            "---\n*This report was generated automatically using a multi-agent AI system.*\n"
        ));
    }

    #[test]
    fn test_render_resources_page_layout() {
        let report = sample_report();
        let rendered = render_resources_page(&report, "2025-01-01 00:00:00");

        assert!(rendered.starts_with("# AI Resources for Retail Banking\n"));
        assert!(rendered.contains("*Generated on 2025-01-01 00:00:00*"));
        assert!(rendered.contains(&report.resources));
        assert!(rendered.ends_with(
            "---\n*This resource list was generated automatically using a multi-agent AI system.*\n"
        ));
    }

    #[test]
    fn test_save_reports_keeps_existing_artifacts() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(&temp_dir);
        let stale = temp_dir.path().join("full_report_other_20200101_000000.md");
        fs::write(&stale, "old run").unwrap();

        save_reports(&config, &sample_report()).unwrap();

        assert!(stale.exists());
        assert_eq!(fs::read_to_string(&stale).unwrap(), "old run");
    }
}
