use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SweepError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to walk {}: {source}", root.display())]
    TraversalError {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Root is not a directory: {}", root.display())]
    NotADirectory { root: PathBuf },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl SweepError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SweepError::ConfigError { .. } | SweepError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            SweepError::TraversalError { .. }
            | SweepError::NotADirectory { .. }
            | SweepError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SweepError::TraversalError { root, .. } => {
                format!("Could not read the docs tree at {}", root.display())
            }
            SweepError::NotADirectory { root } => {
                format!("{} is not a directory", root.display())
            }
            SweepError::IoError(e) => format!("File system error: {}", e),
            SweepError::ConfigError { message } => format!("Configuration problem: {}", message),
            SweepError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SweepError::TraversalError { .. } => {
                "Check that the root exists, is readable, and contains no symlink loops"
            }
            SweepError::NotADirectory { .. } => "Point --root at the docs directory itself",
            SweepError::IoError(_) => "Check file permissions and available disk space",
            SweepError::ConfigError { .. } => "Check the config file syntax and referenced env vars",
            SweepError::InvalidConfigValueError { .. } => "Fix the reported setting and rerun",
        }
    }
}

pub type Result<T> = std::result::Result<T, SweepError>;
