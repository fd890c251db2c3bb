#![forbid(unsafe_code)]

mod actions;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "chainview")]
#[command(about = "Chainview supply-chain query operations CLI")]
struct Cli {
    /// Emit machine-readable JSON instead of plain text
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the six catalog tables in a SQLite store
    Init {
        #[arg(long)]
        db: PathBuf,
        /// Also insert a small demo dataset
        #[arg(long, default_value_t = false)]
        seed: bool,
    },
    /// Run one natural-language question through the pipeline
    Ask {
        #[arg(long)]
        db: PathBuf,
        question: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command {
        Commands::Init { db, seed } => match actions::init_store(&db, seed) {
            Ok(summary) => {
                if cli.json {
                    println!("{}", serde_json::json!({ "initialized": true, "db": db, "seeded": seed }));
                } else {
                    println!("{summary}");
                }
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error initializing store: {e}");
                ExitCode::from(2)
            }
        },
        Commands::Ask { db, question } => match actions::ask(&db, &question) {
            Ok(response) => {
                let success = response.success;
                if cli.json {
                    match serde_json::to_string_pretty(&response) {
                        Ok(rendered) => println!("{rendered}"),
                        Err(e) => {
                            eprintln!("Error rendering response: {e}");
                            return ExitCode::from(2);
                        }
                    }
                } else {
                    actions::print_plain(&response);
                }
                if success {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::from(1)
                }
            }
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::from(2)
            }
        },
    }
}
