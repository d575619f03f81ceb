//! CMT CLI - inspect what the desktop shell and web API would show.
//!
//! # Usage
//!
//! ```bash
//! # Print the theme tokens as JSON
//! cmt theme
//!
//! # List registered screens in order
//! cmt screens
//!
//! # Resolve the window size for a 1920x1080 monitor
//! cmt window --display 1920x1080 --mode adaptive
//!
//! # Print a stub API payload exactly as served
//! cmt payload inventory
//!
//! # Search the stub collections
//! cmt search buffer --types inventory,order
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand, ValueEnum};

mod commands;

use commands::CliError;

#[derive(Parser)]
#[command(name = "cmt")]
#[command(author, version, about = "Centralized Management Tools developer CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the theme tokens as JSON
    Theme,
    /// List the shell's screens in registration order
    Screens,
    /// Resolve the desktop window geometry
    Window {
        /// Monitor size as WIDTHxHEIGHT; omit to simulate no display
        #[arg(short, long)]
        display: Option<String>,

        /// Sizing mode (`fixed` or `adaptive`)
        #[arg(short, long, env = "CMT_WINDOW_MODE", default_value = "adaptive")]
        mode: String,
    },
    /// Print a stub API payload
    Payload {
        #[arg(value_enum)]
        collection: Collection,
    },
    /// Search the stub collections
    Search {
        /// Case-insensitive substring to look for
        query: String,

        /// Comma-separated record kinds (`inventory`, `order`, `sample`)
        #[arg(short, long)]
        types: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Collection {
    Inventory,
    Orders,
    Samples,
    Settings,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cmt_cli=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut out = std::io::stdout().lock();
    match cli.command {
        Commands::Theme => commands::show::theme(&mut out)?,
        Commands::Screens => commands::show::screens(&mut out)?,
        Commands::Window { display, mode } => {
            commands::window::resolve(&mut out, display.as_deref(), &mode)?;
        }
        Commands::Payload { collection } => {
            let collection = match collection {
                Collection::Inventory => commands::show::Payload::Inventory,
                Collection::Orders => commands::show::Payload::Orders,
                Collection::Samples => commands::show::Payload::Samples,
                Collection::Settings => commands::show::Payload::Settings,
            };
            commands::show::payload(&mut out, collection)?;
        }
        Commands::Search { query, types } => {
            commands::search::run(&mut out, &query, types.as_deref())?;
        }
    }
    Ok(())
}
