//! mrulauncher CLI.
//!
//! With no arguments, shows the launcher bar. `update` rebuilds the command
//! store from the search path. Anything else prints usage.

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mru_engine::config::default_db_path;
use mru_engine::{LauncherConfig, Session, StoreFile};

mod tui;
mod ui;
mod update;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "MRULAUNCHER_LOG";

#[derive(Parser, Debug)]
#[command(name = "mrulauncher")]
#[command(about = "Most-recently-used command launcher")]
struct Cli {
    /// Store file (default: $HOME/.config/mrulauncher.txt)
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Update the command store, searching $PATH when no paths are given
    Update {
        /// Directories to search
        paths: Vec<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> miette::Result<()> {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            // Unknown commands get the usage text rather than a parse error.
            print_usage();
            return Ok(());
        }
        Err(e) => e.exit(),
    };

    let config = LauncherConfig::new(cli.db.or_else(default_db_path));

    match cli.command {
        None => {
            if atty::is(atty::Stream::Stdout) {
                tui::run(Session::open(config)).await?;
            } else {
                eprintln!("Run 'mrulauncher --help' for usage or 'mrulauncher' in a terminal to show the bar.");
                std::process::exit(1);
            }
        }

        Some(Commands::Update { paths }) => {
            update::run(paths, &StoreFile::new(config.db_path))?;
        }
    }

    Ok(())
}

/// Install the tracing subscriber, writing to stderr.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

fn print_usage() {
    let mut cmd = Cli::command();
    let _ = cmd.print_help();
    println!();
}
