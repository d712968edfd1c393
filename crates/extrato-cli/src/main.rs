mod cache;
mod commands;
mod lookup;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "extrato",
    version,
    about = "Ledger extraction and categorization for fixed-layout bank statements"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the transaction ledger from statement files (no categorization)
    Extract {
        /// Statement files (PDF, or pre-extracted .txt), in upload order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the extracted ledger to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Cache extracted text here, keyed by document content hash
        #[arg(long, value_name = "DIR")]
        cache_dir: Option<PathBuf>,
    },
    /// Extract, categorize and summarize statements
    Ingest {
        /// Statement files (PDF, or pre-extracted .txt), in upload order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// CSV of historical (description,category,count) rows
        #[arg(short, long, value_name = "FILE")]
        lookup: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Cache extracted text here, keyed by document content hash
        #[arg(long, value_name = "DIR")]
        cache_dir: Option<PathBuf>,
    },
    /// Inspect the category rule table derived from a lookup CSV
    Rules {
        #[command(subcommand)]
        action: RulesAction,
    },
}

#[derive(Subcommand)]
enum RulesAction {
    /// Print the resolved one-category-per-description table
    Show {
        /// CSV of historical (description,category,count) rows
        #[arg(short, long, value_name = "FILE")]
        lookup: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Validate a lookup CSV without printing the table
    Validate {
        /// CSV of historical (description,category,count) rows
        #[arg(short, long, value_name = "FILE")]
        lookup: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            files,
            output,
            out,
            cache_dir,
        } => commands::extract::run(files, &output, out, cache_dir),
        Commands::Ingest {
            files,
            lookup,
            output,
            cache_dir,
        } => commands::ingest::run(files, lookup, &output, cache_dir),
        Commands::Rules { action } => match action {
            RulesAction::Show { lookup, output } => commands::rules::show(&lookup, &output),
            RulesAction::Validate { lookup } => commands::rules::validate(&lookup),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
