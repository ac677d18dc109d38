/// Filesystem adapters for presenting the results panel
mod file_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
