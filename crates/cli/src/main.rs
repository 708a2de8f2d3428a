//! Faqbot CLI
//!
//! Main entry point for the faqbot command-line tool: ask questions against
//! a local question/response store and manage its contents.

mod commands;

use clap::{Parser, Subcommand};
use commands::{
    AddCommand, AskCommand, ChatCommand, ImportCommand, StatsCommand, TemplateCommand,
};
use faqbot_core::{config::AppConfig, logging, SeedPolicy};
use faqbot_store::{MemoryStore, QaStore, SqliteStore};
use std::path::PathBuf;
use std::process::ExitCode;

/// Faqbot - question/response lookup backed by SQLite
#[derive(Parser, Debug)]
#[command(name = "faqbot")]
#[command(about = "Question/response lookup backed by SQLite", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to workspace directory (default: current directory)
    #[arg(short, long, global = true, env = "FAQBOT_WORKSPACE")]
    workspace: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, global = true, env = "FAQBOT_CONFIG")]
    config: Option<PathBuf>,

    /// Database file (default: .faqbot/chatbot.db in the workspace)
    #[arg(long, global = true, env = "FAQBOT_DB")]
    db: Option<PathBuf>,

    /// When to insert the built-in records (if-empty, always, never)
    #[arg(long, global = true, env = "FAQBOT_SEED")]
    seed: Option<SeedPolicy>,

    /// Keep records in memory only; nothing is written to disk
    #[arg(long, global = true)]
    in_memory: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask a question
    Ask(AskCommand),

    /// Interactive question loop
    Chat(ChatCommand),

    /// Add a question/response pair
    Add(AddCommand),

    /// Import pairs from a spreadsheet
    Import(ImportCommand),

    /// Write the import template
    Template(TemplateCommand),

    /// Show store statistics
    Stats(StatsCommand),
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.workspace, cli.config)?.with_overrides(
        cli.db,
        cli.seed,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    logging::init_logging(config.log_level.as_deref(), config.no_color, config.log_json)?;

    tracing::info!("Faqbot starting");
    tracing::debug!("Workspace: {:?}", config.workspace);
    tracing::debug!("Database: {:?}", config.resolved_db_path());
    tracing::debug!("Seed policy: {}", config.seed);

    config.validate()?;

    let store: Box<dyn QaStore> = if cli.in_memory {
        Box::new(MemoryStore::new())
    } else {
        Box::new(SqliteStore::new(config.resolved_db_path()))
    };

    // Nothing works without a usable store.
    store.initialize(config.seed)?;

    let command_name = match &cli.command {
        Commands::Ask(_) => "ask",
        Commands::Chat(_) => "chat",
        Commands::Add(_) => "add",
        Commands::Import(_) => "import",
        Commands::Template(_) => "template",
        Commands::Stats(_) => "stats",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    let store = &*store;
    let result = match cli.command {
        Commands::Ask(cmd) => cmd.execute(store),
        Commands::Chat(cmd) => cmd.execute(store),
        Commands::Add(cmd) => cmd.execute(store),
        Commands::Import(cmd) => cmd.execute(store, &config),
        Commands::Template(cmd) => cmd.execute(),
        Commands::Stats(cmd) => cmd.execute(store, &config, cli.in_memory),
    };

    if result.is_ok() {
        tracing::info!("Command completed successfully");
    }

    result
}
