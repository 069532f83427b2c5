use crate::error::{CodeCatError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the assembled bundle in a single shot, truncating any previous
/// output file at the same path. There is no append mode, no backup of the
/// prior output, and no retry on failure.
pub struct BundleWriter {
    output_path: PathBuf,
}

impl BundleWriter {
    pub fn new<P: Into<PathBuf>>(output_path: P) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    pub fn write(&self, text: &str) -> Result<()> {
        fs::write(&self.output_path, text).map_err(|source| CodeCatError::Write {
            path: self.output_path.clone(),
            source,
        })
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.txt");

        let writer = BundleWriter::new(&path);
        writer.write("hello").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_overwrites_previous_output() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.txt");
        fs::write(&path, "a much longer previous run's output").unwrap();

        let writer = BundleWriter::new(&path);
        writer.write("short").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_write_failure_names_output_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing_dir").join("out.txt");

        let writer = BundleWriter::new(&path);
        let result = writer.write("hello");

        match result {
            Err(CodeCatError::Write { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Write error, got {:?}", other.err()),
        }
    }
}
