//! Continuity command-line entry point.

use clap::{Parser, Subcommand};
use continuity::config::{ConfigLoadOptions, ContinuityConfig};
use continuity::memory::{KnowledgeStore, MemoryRecord};
use continuity::server::AppState;
use continuity::{build_resolver, init_logging, open_store};
use log::{debug, info};
use std::path::PathBuf;
use std::sync::Arc;

/// Command-line options for the Continuity agent.
#[derive(Parser)]
#[command(name = "continuity", version, about)]
struct Cli {
    /// Optional path to a continuity.json5 config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Override the knowledge store path
    #[arg(long, global = true)]
    memory_path: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP service (default)
    Serve {
        /// Interface to bind
        #[arg(long)]
        host: Option<String>,
        /// Port to bind
        #[arg(long)]
        port: Option<u16>,
    },
    /// Answer one question from memory or the language model
    Ask {
        /// Question to resolve
        question: String,
    },
    /// Teach the agent an issue and its solution
    Add {
        #[arg(long)]
        issue: String,
        #[arg(long)]
        solution: String,
    },
    /// Print stored knowledge, oldest first
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;
    let mut options = ConfigLoadOptions::new(&cwd);
    if let Some(path) = &cli.config {
        options = options.with_config_path(path);
    }
    let mut config = ContinuityConfig::load(&options, |name| std::env::var(name).ok())?;
    if let Some(path) = cli.memory_path {
        config.memory.path = path;
    }

    match cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
    }) {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            config.validate()?;
            let store = open_store(&config)?;
            let resolver = build_resolver(&config, store, |name| std::env::var(name).ok())?;
            info!(
                "starting service (memory={}, model={})",
                config.memory.path, config.provider.model
            );
            continuity::server::serve(
                &config.server.bind_address(),
                Arc::new(AppState::new(resolver)),
            )
            .await?;
        }
        Command::Ask { question } => {
            config.validate()?;
            let store = open_store(&config)?;
            let resolver = build_resolver(&config, store, |name| std::env::var(name).ok())?;
            let resolution = resolver.resolve(&question).await?;
            println!("{}", resolution.response);
            println!();
            println!("({})", resolution.context());
        }
        Command::Add { issue, solution } => {
            config.validate()?;
            let store = open_store(&config)?;
            store.append(MemoryRecord::new(issue, solution)).await?;
            println!("Memory added successfully");
        }
        Command::List => {
            config.validate()?;
            let store = open_store(&config)?;
            let records = store.load_all().await?;
            debug!("listing knowledge records (count={})", records.len());
            if records.is_empty() {
                println!("No knowledge stored in {}", config.memory.path);
            }
            for (idx, record) in records.iter().enumerate() {
                println!("{}. {}\n   {}", idx + 1, record.issue, record.solution);
            }
        }
    }
    Ok(())
}
