pub mod catalog;
pub mod cli;
pub mod config;
pub mod llm;
pub mod outlet;
pub mod pipeline;
pub mod search;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use pipeline::{PipelineContext, PipelineReport, launch, run_pipeline};
