use std::path::PathBuf;

use crate::domain::{AppError, BatchConfig, SubmissionDocument, UfnSequence, surname_token};
use crate::ports::SubmissionSink;

/// Options for the generate command.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Batch configuration file; the built-in batch is used when absent.
    pub config: Option<PathBuf>,
    /// Override for the configured output destination.
    pub output: Option<PathBuf>,
    /// Override for the configured number of outcomes.
    pub count: Option<u32>,
}

/// Result of a completed generate run.
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    /// Number of outcome records written.
    pub outcomes: u32,
    /// Destination the document was written to.
    pub destination: PathBuf,
}

/// Execute the generate command against the given sink.
///
/// Appends the schedule header, derives one record per requested outcome
/// from the template (fresh surname token and next UFN each, as independent
/// immutable values), appends the footer, and hands the closed document's
/// lines to the sink.
pub fn execute<S>(
    sink: &S,
    batch: &BatchConfig,
    destination: PathBuf,
) -> Result<GenerateSummary, AppError>
where
    S: SubmissionSink,
{
    let mut document = SubmissionDocument::new();
    document.append_header(&batch.schedule.header())?;

    let template = batch.template.outcome();
    let mut ufns = UfnSequence::new(batch.ufn.start_day, &batch.ufn.month_year);

    for _ in 0..batch.outcomes {
        let outcome = template
            .with_item("CLIENT_SURNAME", surname_token())
            .with_item("UFN", ufns.next_ufn());
        document.append_outcome(&outcome)?;
    }

    document.append_footer()?;
    sink.write_document(&document.into_lines()?)?;

    Ok(GenerateSummary { outcomes: batch.outcomes, destination })
}
