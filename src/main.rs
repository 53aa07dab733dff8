//! Wordle board and folder tree - CLI
//!
//! TUI and line-mode front ends for the two widgets.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordle_tree::{
    commands::run_simple,
    config::{GameConfig, RowBounds, WORDLE_API_URL},
    game::Session,
    interactive::{App, TreeApp, run_tree_tui, run_tui},
    tree::{TreeView, default_structure},
    wordlists::SourceKind,
};

#[derive(Parser)]
#[command(
    name = "wordle_tree",
    about = "Terminal Wordle board and collapsible folder tree",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'remote' (default), 'embedded', or path to a file
    #[arg(short, long, global = true, default_value = "remote")]
    source: String,

    /// Remote word list endpoint
    #[arg(long, global = true, env = "WORDLE_API_URL", default_value = WORDLE_API_URL)]
    endpoint: String,

    /// Fewest rows a board can have
    #[arg(long, global = true, default_value_t = 2)]
    min_rows: usize,

    /// Most rows a board can have
    #[arg(long, global = true, default_value_t = 5)]
    max_rows: usize,

    /// Show the secret word on screen
    #[arg(long, global = true, env = "WORDLE_DEV_ENV")]
    dev: bool,

    /// Log file (RUST_LOG controls the level)
    #[arg(long, global = true, default_value = "wordle_tree.log")]
    log_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive Wordle TUI (default)
    Play,

    /// Line-mode Wordle without the TUI
    Simple,

    /// Collapsible folder tree viewer
    Tree,
}

/// Log to a file; the terminal belongs to the UI
fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false) // No color codes in log file
        .init();

    Ok(())
}

fn game_config(cli: &Cli) -> Result<GameConfig> {
    let row_bounds = RowBounds::new(cli.min_rows, cli.max_rows)?;
    let source = SourceKind::parse(&cli.source, &cli.endpoint);
    Ok(GameConfig::new(source, row_bounds).with_dev_mode(cli.dev))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let config = game_config(&cli)?;
    tracing::info!(source = ?config.source, rows = ?config.row_bounds, dev = config.dev_mode, "starting");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Tree => run_tree_command(),
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    let app = App::new(Session::new(config), config.source.open());
    run_tui(app)
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let source = config.source.open();
    run_simple(Session::new(config), source.as_ref())
}

fn run_tree_command() -> Result<()> {
    let app = TreeApp::new(TreeView::new(default_structure()));
    run_tree_tui(app)
}
