//! Book and author tracker driven by dispatched actions.
//!
//! Keeps its state in `.bookshelf/state.json`. Every command that changes
//! the state loads it, runs actions through the composed reducer, and writes
//! the result back.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bookshelf::exit_codes;
use bookshelf::io::config::load_config;
use bookshelf::io::init::{BookshelfPaths, InitOptions, init_bookshelf};
use bookshelf::io::state_store::{load_state, render_state};
use bookshelf::logging;
use bookshelf::replay::{ReplayOutcome, dispatch_from_root, replay_from_root};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bookshelf",
    version,
    about = "Track books and authors through composed reducers"
)]
struct Cli {
    /// Project root containing `.bookshelf/`.
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Log more to stderr (`-v` info, `-vv` debug). `RUST_LOG` overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create `.bookshelf/` with default config, empty state, and action schema.
    Init {
        /// Overwrite existing files.
        #[arg(short, long)]
        force: bool,
    },
    /// Apply one JSON action (e.g. `{"type":"REMOVE_BOOK","id":1}`).
    Dispatch {
        /// Action as JSON text.
        action: String,
    },
    /// Apply every action in a JSON Lines file, in order.
    Replay {
        /// Path to the action log.
        log: PathBuf,
    },
    /// Print the current state as JSON.
    Show,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let code = match run(cli) {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Init { force } => cmd_init(&cli.root, force),
        Command::Dispatch { action } => {
            report(dispatch_from_root(&cli.root, &action)?);
            Ok(())
        }
        Command::Replay { log } => {
            report(replay_from_root(&cli.root, &log)?);
            Ok(())
        }
        Command::Show => cmd_show(&cli.root),
    }
}

fn cmd_init(root: &Path, force: bool) -> Result<()> {
    let paths = init_bookshelf(root, &InitOptions { force })?;
    println!("initialized {}", paths.dir.display());
    Ok(())
}

fn cmd_show(root: &Path) -> Result<()> {
    let paths = BookshelfPaths::new(root);
    let config = load_config(&paths.config_path).context("load config.toml")?;
    let state = load_state(&paths.state_path).context("load state.json")?;
    print!("{}", render_state(&state, config.output.pretty)?);
    Ok(())
}

fn report(outcome: ReplayOutcome) {
    println!(
        "applied {} action(s): {} author(s), {} book(s)",
        outcome.applied, outcome.authors, outcome.books
    );
}
