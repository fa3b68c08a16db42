#[cfg(test)]
mod tests {
    use crate::config::{CatalogConfig, Config, LLMConfig, LLMProvider, SearchConfig};
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.output_path, PathBuf::from("./marketscout.reports"));
        assert!(config.save_reports);
        assert!(!config.verbose);
    }

    #[test]
    fn test_llm_provider_default() {
        let provider = LLMProvider::default();
        assert_eq!(provider, LLMProvider::Groq);
    }

    #[test]
    fn test_llm_provider_from_str() {
        assert_eq!("groq".parse::<LLMProvider>().unwrap(), LLMProvider::Groq);
        assert_eq!(
            "openai".parse::<LLMProvider>().unwrap(),
            LLMProvider::OpenAI
        );
        assert_eq!(
            "deepseek".parse::<LLMProvider>().unwrap(),
            LLMProvider::DeepSeek
        );
        assert_eq!(
            "openrouter".parse::<LLMProvider>().unwrap(),
            LLMProvider::OpenRouter
        );
        assert_eq!(
            "anthropic".parse::<LLMProvider>().unwrap(),
            LLMProvider::Anthropic
        );
        assert_eq!(
            "ollama".parse::<LLMProvider>().unwrap(),
            LLMProvider::Ollama
        );
        assert_eq!("GROQ".parse::<LLMProvider>().unwrap(), LLMProvider::Groq);

        assert!("invalid".parse::<LLMProvider>().is_err());
    }

    #[test]
    fn test_llm_provider_display() {
        assert_eq!(LLMProvider::Groq.to_string(), "groq");
        assert_eq!(LLMProvider::OpenAI.to_string(), "openai");
        assert_eq!(LLMProvider::DeepSeek.to_string(), "deepseek");
        assert_eq!(LLMProvider::OpenRouter.to_string(), "openrouter");
        assert_eq!(LLMProvider::Anthropic.to_string(), "anthropic");
        assert_eq!(LLMProvider::Ollama.to_string(), "ollama");
    }

    #[test]
    fn test_llm_config_default() {
        let config = LLMConfig::default();

        assert_eq!(config.provider, LLMProvider::Groq);
        // api_key may be empty if env var is not set
        assert_eq!(config.api_base_url, "https://api.groq.com/openai/v1");
        assert_eq!(config.model, "llama-3.3-70b-versatile");
        assert_eq!(config.max_tokens, 300);
        assert_eq!(config.temperature, 0.1);
        assert_eq!(config.retry_attempts, 3);
        assert_eq!(config.retry_delay_ms, 1000);
        assert_eq!(config.timeout_seconds, 120);
    }

    #[test]
    fn test_search_config_default() {
        let config = SearchConfig::default();

        assert_eq!(config.endpoint, "https://api.tavily.com/search");
        assert_eq!(config.max_results, 1);
        assert_eq!(config.timeout_seconds, 10);
    }

    #[test]
    fn test_catalog_config_default() {
        let config = CatalogConfig::default();

        assert_eq!(config.max_results, 2);
        assert_eq!(config.max_parallels, 2);
        assert_eq!(config.timeout_seconds, 10);
    }

    #[test]
    fn test_config_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("marketscout.toml");

        let config_content = r#"output_path = "./reports"
save_reports = false
verbose = true

[llm]
provider = "openai"
model = "gpt-4o-mini"
max_tokens = 512

[search]
max_results = 3

[catalog]
max_results = 5
"#;

        std::fs::write(&config_path, config_content).unwrap();

        let config = Config::from_file(&config_path).unwrap();

        assert_eq!(config.output_path, PathBuf::from("./reports"));
        assert!(!config.save_reports);
        assert!(config.verbose);
        assert_eq!(config.llm.provider, LLMProvider::OpenAI);
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.max_tokens, 512);
        assert_eq!(config.search.max_results, 3);
        assert_eq!(config.catalog.max_results, 5);
    }

    #[test]
    fn test_config_from_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("marketscout.toml");

        std::fs::write(&config_path, "verbose = true\n").unwrap();

        let config = Config::from_file(&config_path).unwrap();

        assert!(config.verbose);
        assert_eq!(config.output_path, PathBuf::from("./marketscout.reports"));
        assert_eq!(config.llm.model, "llama-3.3-70b-versatile");
        assert_eq!(config.catalog.max_results, 2);
    }

    #[test]
    fn test_config_from_missing_file() {
        let config = Config::from_file(&PathBuf::from("/nonexistent/marketscout.toml"));
        assert!(config.is_err());
    }
}
