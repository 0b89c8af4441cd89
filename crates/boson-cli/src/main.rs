//! Boson CLI - validate and convert domain entities between keyed, wire and canonical forms.

use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod input;
mod logging;
mod output;

use commands::{canonicalize, convert, reasons, validate};

#[derive(Parser)]
#[command(name = "boson")]
#[command(about = "Boson domain entity validation and conversion CLI")]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Entity kinds the CLI understands.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum EntityKind {
    /// Dispute over an exchange
    Dispute,
    /// Offer durations
    OfferDurations,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an entity given as a keyed object or a wire array
    Validate {
        /// Entity kind
        kind: EntityKind,
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Exit with error code if the entity is invalid
        #[arg(long)]
        strict: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert a keyed object to its wire array
    ToStruct {
        /// Entity kind
        kind: EntityKind,
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
    },
    /// Convert a wire array to its keyed object
    FromStruct {
        /// Entity kind
        kind: EntityKind,
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
    },
    /// Show the canonical string form of an entity
    Canonicalize {
        /// Entity kind
        kind: EntityKind,
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
    },
    /// List known revert reasons
    Reasons {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Validate {
            kind,
            input,
            strict,
            json,
        } => validate::run(kind, input, strict, json),
        Commands::ToStruct { kind, input } => convert::to_struct(kind, input),
        Commands::FromStruct { kind, input } => convert::from_struct(kind, input),
        Commands::Canonicalize { kind, input } => canonicalize::run(kind, input),
        Commands::Reasons { json } => reasons::run(json),
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
