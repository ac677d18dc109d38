use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish a failed check from a
/// compatible or incompatible verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The server reported the build as compatible
    Success = 0,
    /// The server reported the build as incompatible
    Incompatible = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (incomplete selection, request failure, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::Incompatible => write!(f, "Incompatible (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for loading component lists and checking builds.
///
/// Uses thiserror to derive Display and Error traits automatically.
#[derive(Debug, Error)]
pub enum CheckerError {
    #[error("Request to {url} failed\nDetails: {details}")]
    Transport { url: String, details: String },

    #[error("Server answered {url} with status {status} {status_text}")]
    Status {
        url: String,
        status: u16,
        status_text: String,
    },

    #[error("Response from {url} is not valid JSON\nDetails: {details}")]
    Decode { url: String, details: String },

    #[error("Unrecognized compatibility response: {details}")]
    UnrecognizedResponse { details: String },

    #[error("Invalid config: {message}\n\n💡 Hint: {hint}")]
    Config { message: String, hint: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}
