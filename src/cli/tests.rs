#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::config::LLMProvider;
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_args_subject_required() {
        let parsed = Args::try_parse_from(&["marketscout-rs"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_args_default_values() {
        let args = Args::try_parse_from(&["marketscout-rs", "Retail Banking"]).unwrap();

        assert_eq!(args.subject, "Retail Banking");
        assert_eq!(args.config, None);
        assert_eq!(args.output_path, None);
        assert!(!args.no_save);
        assert!(!args.verbose);
    }

    #[test]
    fn test_args_short_options() {
        let args = Args::try_parse_from(&[
            "marketscout-rs",
            "Retail Banking",
            "-c", "/test/marketscout.toml",
            "-o", "/test/output",
            "-v"
        ]).unwrap();

        assert_eq!(args.config, Some(PathBuf::from("/test/marketscout.toml")));
        assert_eq!(args.output_path, Some(PathBuf::from("/test/output")));
        assert!(args.verbose);
    }

    #[test]
    fn test_args_llm_options() {
        let args = Args::try_parse_from(&[
            "marketscout-rs",
            "Telecom",
            "--llm-provider", "openai",
            "--llm-api-key", "test-key",
            "--llm-api-base-url", "https://api.openai.com/v1",
            "--model", "gpt-4o-mini",
            "--max-tokens", "2048",
            "--temperature", "0.7"
        ]).unwrap();

        assert_eq!(args.llm_provider, Some("openai".to_string()));
        assert_eq!(args.llm_api_key, Some("test-key".to_string()));
        assert_eq!(args.llm_api_base_url, Some("https://api.openai.com/v1".to_string()));
        assert_eq!(args.model, Some("gpt-4o-mini".to_string()));
        assert_eq!(args.max_tokens, Some(2048));
        assert_eq!(args.temperature, Some(0.7));
    }

    #[test]
    fn test_args_service_options() {
        let args = Args::try_parse_from(&[
            "marketscout-rs",
            "Telecom",
            "--search-api-key", "tvly-key",
            "--github-token", "gh-token",
            "--no-save"
        ]).unwrap();

        assert_eq!(args.search_api_key, Some("tvly-key".to_string()));
        assert_eq!(args.github_token, Some("gh-token".to_string()));
        assert!(args.no_save);
    }

    #[test]
    fn test_into_config_applies_overrides() {
        let args = Args::try_parse_from(&[
            "marketscout-rs",
            "Retail Banking",
            "-o", "/test/reports",
            "--llm-provider", "openai",
            "--model", "gpt-4o-mini",
            "--max-tokens", "2048",
            "--temperature", "0.7",
            "--search-api-key", "tvly-key",
            "--github-token", "gh-token",
            "--no-save",
            "-v"
        ]).unwrap();

        let config = args.into_config();

        assert_eq!(config.output_path, PathBuf::from("/test/reports"));
        assert_eq!(config.llm.provider, LLMProvider::OpenAI);
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.max_tokens, 2048);
        assert_eq!(config.llm.temperature, 0.7);
        assert_eq!(config.search.api_key, "tvly-key");
        assert_eq!(config.catalog.github_token, "gh-token");
        assert!(!config.save_reports);
        assert!(config.verbose);
    }

    #[test]
    fn test_into_config_reads_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("marketscout.toml");
        fs::write(
            &config_path,
            r#"
output_path = "./custom.reports"
save_reports = false

[llm]
model = "file-model"
max_tokens = 512
"#,
        )
        .unwrap();

        let args = Args::try_parse_from(&[
            "marketscout-rs",
            "Retail Banking",
            "-c", config_path.to_str().unwrap()
        ]).unwrap();

        let config = args.into_config();

        assert_eq!(config.output_path, PathBuf::from("./custom.reports"));
        assert!(!config.save_reports);
        assert_eq!(config.llm.model, "file-model");
        assert_eq!(config.llm.max_tokens, 512);
    }

    #[test]
    fn test_into_config_flags_override_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("marketscout.toml");
        fs::write(
            &config_path,
            r#"
[llm]
model = "file-model"
"#,
        )
        .unwrap();

        let args = Args::try_parse_from(&[
            "marketscout-rs",
            "Retail Banking",
            "-c", config_path.to_str().unwrap(),
            "--model", "flag-model"
        ]).unwrap();

        let config = args.into_config();
        assert_eq!(config.llm.model, "flag-model");
    }

    #[test]
    fn test_into_config_unknown_provider_keeps_default() {
        let args = Args::try_parse_from(&[
            "marketscout-rs",
            "Retail Banking",
            "--llm-provider", "invalid"
        ]).unwrap();

        let config = args.into_config();
        assert_eq!(config.llm.provider, LLMProvider::Groq);
    }

    #[test]
    fn test_into_config_unreadable_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("broken.toml");
        fs::write(&config_path, "definitely not toml = [").unwrap();

        let args = Args::try_parse_from(&[
            "marketscout-rs",
            "Retail Banking",
            "-c", config_path.to_str().unwrap()
        ]).unwrap();

        let config = args.into_config();
        assert_eq!(config.llm.provider, LLMProvider::Groq);
        assert!(config.save_reports);
    }
}
