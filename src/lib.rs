//! cwab: Generate CWA bulk-load outcome submission XML files.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::PathBuf;

use app::commands::generate;
use domain::BatchConfig;
use services::FilesystemSink;

pub use app::commands::generate::{GenerateOptions, GenerateSummary};
pub use domain::{AppError, surname_token};

/// Generate a submission file from the built-in or configured batch.
///
/// Loads the batch configuration (when a file is given), applies the CLI
/// overrides, and writes the finished document to the destination.
pub fn generate(options: GenerateOptions) -> Result<GenerateSummary, AppError> {
    let mut batch = match &options.config {
        Some(path) => BatchConfig::load(path)?,
        None => BatchConfig::default(),
    };
    if let Some(output) = &options.output {
        batch.output = output.display().to_string();
    }
    if let Some(count) = options.count {
        batch.outcomes = count;
    }

    let destination = PathBuf::from(&batch.output);
    let sink = FilesystemSink::new(destination.clone());

    let summary = generate::execute(&sink, &batch, destination)?;
    println!("✅ Wrote {} outcomes to {}", summary.outcomes, summary.destination.display());
    Ok(summary)
}
