use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodeCatError {
    #[error("Source directory not found: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path validation failed: {path}")]
    InvalidPath { path: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for CodeCatError {
    fn user_message(&self) -> String {
        match self {
            CodeCatError::SourceNotFound { path } => {
                format!("The source directory \"{}\" was not found", path.display())
            }
            CodeCatError::Read { path, source } => {
                format!("Could not read {}: {}", path.display(), source)
            }
            CodeCatError::Write { path, source } => {
                format!("Could not write {}: {}", path.display(), source)
            }
            CodeCatError::InvalidPath { path } => {
                format!("Invalid path: {}", path)
            }
            CodeCatError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            CodeCatError::Io(source) => {
                format!("IO error: {}", source)
            }
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            CodeCatError::SourceNotFound { .. } => Some(
                "Make sure you are running codecat from your project's root directory."
                    .to_string(),
            ),
            CodeCatError::Write { .. } => Some(
                "Check that the output location is writable and has free space.".to_string(),
            ),
            CodeCatError::Config { .. } => Some(
                "Adjust Config::default() in src/config.rs and rebuild.".to_string(),
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CodeCatError>;
