mod commands;
mod manifest;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "testbank",
    version,
    about = "Extract structured question banks from MCQ exam PDFs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a single exam PDF into question records
    Parse {
        /// Path to the exam PDF
        input_file: PathBuf,

        /// Write records to a JSON file instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Process every PDF in the uploads directory into JSON test files
    Process {
        /// Directory scanned for source PDFs
        #[arg(long, default_value = "uploads")]
        uploads: PathBuf,

        /// Directory receiving JSON output and the manifest
        #[arg(long, default_value = "tests")]
        tests: PathBuf,

        /// Keep source PDFs after successful processing
        #[arg(long)]
        keep: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse { input_file, out } => commands::parse::run(input_file, out),
        Commands::Process {
            uploads,
            tests,
            keep,
        } => commands::process::run(uploads, tests, keep),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
