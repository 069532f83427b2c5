use crate::error::{CodeCatError, Result};
use std::collections::HashSet;
use std::path::PathBuf;

/// Compiled-in run configuration. There are no command-line flags and no
/// config file: editing `Config::default()` and rebuilding is the documented
/// way to reconfigure a run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the traversal starts from, relative to the working directory.
    pub source_dir: PathBuf,
    /// File the concatenated snapshot is written to. Overwritten on every run.
    pub output_file: PathBuf,
    /// File-name suffixes that select files for extraction. Case-sensitive,
    /// dot included ("" would match everything).
    pub extensions: Vec<String>,
    /// Directory names pruned from the traversal wherever they occur.
    /// Exact name match, not a path or glob match.
    pub ignored_dirs: HashSet<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("lib"),
            output_file: PathBuf::from("extracted_code.txt"),
            extensions: vec![".dart".to_string()],
            ignored_dirs: [".dart_tool", "build", ".idea", "generated", "test"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(CodeCatError::Config {
                message: "At least one file extension must be specified".to_string(),
            });
        }

        if self.source_dir.as_os_str().is_empty() {
            return Err(CodeCatError::Config {
                message: "Source directory must not be empty".to_string(),
            });
        }

        if self.output_file.as_os_str().is_empty() {
            return Err(CodeCatError::Config {
                message: "Output file path must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
