mod submission_sink;

pub use submission_sink::SubmissionSink;
