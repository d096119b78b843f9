mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "keskus",
    version,
    about = "Review and summarize electrical panel diagram extractions"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a PDF to the extraction service and cache the result
    Extract {
        /// Path to the PDF file
        pdf_file: PathBuf,

        /// Extraction service base URL
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,

        /// Also write the raw extraction response to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Summarize an extraction (a JSON file, or the cached one)
    Summary {
        /// Path to a raw extraction response JSON (default: cached)
        input_file: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Include cable columns
        #[arg(long)]
        show_cable: bool,

        /// Split combined protection values into input/output
        #[arg(long)]
        split_suoja: bool,
    },
    /// Export an extraction summary to an xlsx spreadsheet
    Export {
        /// Path to a raw extraction response JSON (default: cached)
        input_file: Option<PathBuf>,

        /// Output file (default: device-summary-<date>.xlsx)
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Include cable columns
        #[arg(long)]
        show_cable: bool,

        /// Split combined protection values into input/output
        #[arg(long)]
        split_suoja: bool,
    },
    /// Inspect the symbol catalog
    Symbols {
        #[command(subcommand)]
        action: SymbolsAction,
    },
    /// Inspect or clear the local session cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[derive(Subcommand)]
enum SymbolsAction {
    /// List all known panel symbols
    List,
}

#[derive(Subcommand)]
enum CacheAction {
    /// Show what is currently cached
    Show,
    /// Remove the cached PDF and extraction result
    Clear,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            pdf_file,
            base_url,
            out,
        } => commands::extract::run(pdf_file, base_url, out),
        Commands::Summary {
            input_file,
            output,
            show_cable,
            split_suoja,
        } => commands::summary::run(input_file, &output, show_cable, split_suoja),
        Commands::Export {
            input_file,
            out,
            show_cable,
            split_suoja,
        } => commands::export::run(input_file, out, show_cable, split_suoja),
        Commands::Symbols { action } => match action {
            SymbolsAction::List => commands::symbols::list(),
        },
        Commands::Cache { action } => match action {
            CacheAction::Show => commands::cache::show(),
            CacheAction::Clear => commands::cache::clear(),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
