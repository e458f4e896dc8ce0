use crate::domain::AppError;

/// Destination for a finished submission document.
pub trait SubmissionSink {
    /// Write every line followed by a `\n` terminator, fully replacing any
    /// existing content at the destination.
    fn write_document(&self, lines: &[String]) -> Result<(), AppError>;
}
