//! quizlens CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quizlens", version, about = "Quiz-attempt analytics engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a quiz-response CSV, compute every metric, render the report
    Analyze {
        /// URL or local path of the CSV export
        source: String,

        /// Dataset label shown in the report (defaults to the source)
        #[arg(long)]
        label: Option<String>,

        /// Output directory for rendered artifacts
        #[arg(long, default_value = "./quizlens-results")]
        output: PathBuf,

        /// Output format: text, json, html, markdown, all
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Fetch a CSV and check only its schema
    Validate {
        /// URL or local path of the CSV export
        source: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizlens=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            source,
            label,
            output,
            format,
        } => commands::analyze::execute(source, label, output, format).await,
        Commands::Validate { source } => commands::validate::execute(source).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
