use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cwab::{AppError, GenerateOptions};

#[derive(Parser)]
#[command(name = "cwab")]
#[command(version)]
#[command(
    about = "Generate CWA bulk-load outcome submission XML files",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a submission file from the built-in or configured batch
    #[clap(visible_alias = "g")]
    Generate {
        /// Batch configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Override the output destination
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Override the number of generated outcomes
        #[arg(short = 'n', long)]
        count: Option<u32>,
    },
    /// Print one time-derived surname token
    #[clap(visible_alias = "t")]
    Token,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate { config, output, count } => {
            cwab::generate(GenerateOptions { config, output, count }).map(|_| ())
        }
        Commands::Token => {
            println!("{}", cwab::surname_token());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
