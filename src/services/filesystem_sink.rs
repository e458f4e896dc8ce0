use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::SubmissionSink;

/// Filesystem-based submission sink implementation.
///
/// Opens the destination for truncate-write, writes all lines, and closes it
/// within the call. No atomic rename: an interruption mid-write leaves a
/// partial file behind.
#[derive(Debug, Clone)]
pub struct FilesystemSink {
    path: PathBuf,
}

impl FilesystemSink {
    /// Create a sink writing to the given destination path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unwritable(&self, source: io::Error) -> AppError {
        AppError::DestinationUnwritable { path: self.path.display().to_string(), source }
    }
}

impl SubmissionSink for FilesystemSink {
    fn write_document(&self, lines: &[String]) -> Result<(), AppError> {
        let file = File::create(&self.path).map_err(|e| self.unwritable(e))?;
        let mut writer = BufWriter::new(file);
        for line in lines {
            writeln!(writer, "{}", line).map_err(|e| self.unwritable(e))?;
        }
        writer.flush().map_err(|e| self.unwritable(e))?;
        Ok(())
    }
}
