use crate::pipeline::launch;
use anyhow::Result;
use clap::Parser;

mod catalog;
mod cli;
mod config;
mod llm;
mod outlet;
mod pipeline;
mod search;
mod utils;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();
    let subject = args.subject.clone();
    let config = args.into_config();

    launch(&config, &subject).await?;
    Ok(())
}
