mod commands;
mod diagnostics;
mod info;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mdlinks", about = "Extract Markdown links with line numbers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report unresolved references and unreadable files
    Check {
        /// File or directory to check
        #[arg(default_value = ".")]
        path: PathBuf,
        /// Emit machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show version, link syntax, configuration, and current state
    Info {
        /// Emit machine-readable JSON instead of markdown
        #[arg(long)]
        json: bool,
    },
    /// List every link found under a path
    Scan {
        /// File or directory to scan
        #[arg(default_value = ".")]
        path: PathBuf,
        /// Emit machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { path, json } => run_fallible(commands::check(&path, json)),
        Commands::Info { json } => {
            commands::info(json);
            ExitCode::SUCCESS
        },
        Commands::Scan { path, json } => run_fallible(commands::scan(&path, json)),
    }
}

/// Unwrap a command result, rendering any failure as a diagnostic on stderr.
fn run_fallible(result: Result<ExitCode, mdlinks::Error>) -> ExitCode {
    match result {
        Ok(code) => code,
        Err(e) => {
            diagnostics::print_error(&e);
            ExitCode::from(3)
        },
    }
}
