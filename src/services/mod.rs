mod filesystem_sink;

pub use filesystem_sink::FilesystemSink;
