//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use stacks::config::LibraryConfig;
use stacks::output::OutputMode;

/// stacks - Library circulation from the command line
#[derive(Parser, Debug)]
#[command(
    name = "stacks",
    version,
    about = "Library circulation: books, patrons, check-outs",
    long_about = "Track books, patrons and the check-outs between them.\n\n\
                  The catalog is read from a TOML config file at start-up.\n\
                  Patrons who owe fees cannot check out books."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to $STACKS_CONFIG or ~/.config/stacks/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a config file holding the sample catalog
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Run the built-in two-book, two-patron demonstration
    Demo,

    /// List books in the catalog
    Books {
        /// Only books that are lent out
        #[arg(long)]
        out: bool,

        /// Only books of this genre: fiction, non_fiction, periodical, biography, children (or 0-4)
        #[arg(short, long)]
        genre: Option<String>,
    },

    /// List patrons in the catalog
    Patrons {
        /// Only patrons who owe fees
        #[arg(long)]
        owing: bool,
    },

    /// Check a book out to a patron
    Checkout {
        /// ISBN of the book
        isbn: String,
        /// Card number of the patron
        card_number: String,
    },

    /// Check a book back in from a patron
    Checkin {
        /// ISBN of the book
        isbn: String,
        /// Card number of the patron
        card_number: String,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config_path = cli.config.unwrap_or_else(LibraryConfig::config_path);

    match cli.command {
        Some(Command::Init { force }) => commands::init(&config_path, force, output_mode),
        Some(Command::Demo) => commands::demo(output_mode),
        Some(Command::Books { out, genre }) => {
            commands::books(&config_path, out, genre.as_deref(), output_mode)
        },
        Some(Command::Patrons { owing }) => commands::patrons(&config_path, owing, output_mode),
        Some(Command::Checkout { isbn, card_number }) => {
            commands::checkout(&config_path, &isbn, &card_number, output_mode)
        },
        Some(Command::Checkin { isbn, card_number }) => {
            commands::checkin(&config_path, &isbn, &card_number, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": stacks::VERSION
                    })
                );
            } else {
                println!("stacks v{}", stacks::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": stacks::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("stacks v{}", stacks::VERSION);
                println!("\nRun 'stacks --help' for usage");
                println!("Run 'stacks demo' to see it in action");
            }
            Ok(())
        },
    }
}
