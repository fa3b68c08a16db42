use crate::config::{Config, LLMProvider};
use clap::Parser;
use std::path::PathBuf;

/// MarketScout - 由Rust与AI驱动的市场调研与AI用例提案引擎
#[derive(Parser, Debug)]
#[command(name = "MarketScout (marketscout-rs)")]
#[command(
    about = "AI-based market research engine. It researches a company or industry, proposes AI/GenAI use cases, matches implementation datasets, and generates a business proposal report."
)]
#[command(author = "Sopaco")]
#[command(version)]
pub struct Args {
    /// 要分析的公司或行业
    pub subject: String,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 报告输出路径
    #[arg(short, long)]
    pub output_path: Option<PathBuf>,

    /// LLM Provider (groq, openai, deepseek, openrouter, anthropic, ollama)
    #[arg(long)]
    pub llm_provider: Option<String>,

    /// LLM API KEY
    #[arg(long)]
    pub llm_api_key: Option<String>,

    /// LLM API基地址
    #[arg(long)]
    pub llm_api_base_url: Option<String>,

    /// 推理模型名称
    #[arg(long)]
    pub model: Option<String>,

    /// 最大tokens数
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// 温度参数
    #[arg(long)]
    pub temperature: Option<f64>,

    /// 联网检索API KEY (Tavily)
    #[arg(long)]
    pub search_api_key: Option<String>,

    /// GitHub访问令牌，用于提升检索配额
    #[arg(long)]
    pub github_token: Option<String>,

    /// 只在终端输出结果，不落盘报告
    #[arg(long)]
    pub no_save: bool,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 将CLI参数转换为配置，命令行标志覆盖配置文件取值
    pub fn into_config(self) -> Config {
        let mut config = match &self.config {
            // 显式指定了配置文件路径，从该路径加载
            Some(config_path) => Config::from_file(config_path).unwrap_or_else(|e| {
                eprintln!(
                    "⚠️ 警告: 无法读取配置文件 {:?}，使用默认配置: {}",
                    config_path, e
                );
                Config::default()
            }),
            None => {
                // 没有显式指定配置文件，尝试从默认位置加载
                let default_config_path = std::env::current_dir()
                    .unwrap_or_else(|_| PathBuf::from("."))
                    .join("marketscout.toml");

                if default_config_path.exists() {
                    Config::from_file(&default_config_path).unwrap_or_else(|e| {
                        eprintln!(
                            "⚠️ 警告: 无法读取默认配置文件 {:?}，使用默认配置: {}",
                            default_config_path, e
                        );
                        Config::default()
                    })
                } else {
                    Config::default()
                }
            }
        };

        // 覆盖输出配置
        if let Some(output_path) = self.output_path {
            config.output_path = output_path;
        }
        if self.no_save {
            config.save_reports = false;
        }
        if self.verbose {
            config.verbose = true;
        }

        // 覆盖LLM配置
        if let Some(provider_str) = self.llm_provider {
            if let Ok(provider) = provider_str.parse::<LLMProvider>() {
                config.llm.provider = provider;
            } else {
                eprintln!(
                    "⚠️ 警告: 未知的provider: {}，使用默认provider",
                    provider_str
                );
            }
        }
        if let Some(llm_api_key) = self.llm_api_key {
            config.llm.api_key = llm_api_key;
        }
        if let Some(llm_api_base_url) = self.llm_api_base_url {
            config.llm.api_base_url = llm_api_base_url;
        }
        if let Some(model) = self.model {
            config.llm.model = model;
        }
        if let Some(max_tokens) = self.max_tokens {
            config.llm.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature {
            config.llm.temperature = temperature;
        }

        // 覆盖检索与目录配置
        if let Some(search_api_key) = self.search_api_key {
            config.search.api_key = search_api_key;
        }
        if let Some(github_token) = self.github_token {
            config.catalog.github_token = github_token;
        }

        config
    }
}

// Include tests
#[cfg(test)]
mod tests;
