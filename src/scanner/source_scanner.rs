use crate::config::Config;
use crate::error::{CodeCatError, Result};
use crate::extractor::FileBlock;
use crate::scanner::file_filter::FileFilter;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Per-file notification emitted while the traversal runs, so the caller can
/// report progress as files are discovered.
pub enum ScanEvent<'a> {
    Extracted { path: &'a str },
    Failed { error: &'a CodeCatError },
}

/// Everything a completed traversal produced: the blocks in discovery order
/// and the diagnostics for files that could not be read.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub blocks: Vec<FileBlock>,
    pub errors: Vec<String>,
}

impl ScanOutcome {
    pub fn total_bytes(&self) -> u64 {
        self.blocks.iter().map(|b| b.content.len() as u64).sum()
    }
}

pub struct SourceScanner {
    /// Invocation root; block paths are expressed relative to this.
    base: PathBuf,
    /// The directory actually walked (`base` joined with the configured
    /// source directory).
    root: PathBuf,
    /// Source directory as configured, used in user-facing messages.
    source_dir: PathBuf,
    filter: FileFilter,
}

impl SourceScanner {
    pub fn new<P: Into<PathBuf>>(base: P, config: &Config) -> Self {
        let base = base.into();
        let root = base.join(&config.source_dir);

        Self {
            base,
            root,
            source_dir: config.source_dir.clone(),
            filter: FileFilter::new(config),
        }
    }

    /// Walks the source tree depth-first and reads every matching file.
    ///
    /// A file that cannot be opened or decoded is reported through the event
    /// callback and recorded in the outcome, never aborting the run. Only a
    /// missing or non-directory root fails the whole scan.
    pub fn scan(&self, on_event: Option<&dyn Fn(ScanEvent)>) -> Result<ScanOutcome> {
        if !self.root.exists() {
            return Err(CodeCatError::SourceNotFound {
                path: self.source_dir.clone(),
            });
        }

        if !self.root.is_dir() {
            return Err(CodeCatError::InvalidPath {
                path: format!("{} is not a directory", self.source_dir.display()),
            });
        }

        let mut outcome = ScanOutcome::default();

        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| self.should_traverse(e));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let error = CodeCatError::Io(std::io::Error::other(err));
                    self.report_failure(&error, on_event, &mut outcome);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            if !self.filter.matches_extension(entry.path()) {
                continue;
            }

            match self.read_block(entry.path()) {
                Ok(block) => {
                    if let Some(callback) = on_event {
                        callback(ScanEvent::Extracted {
                            path: &block.relative_path,
                        });
                    }
                    outcome.blocks.push(block);
                }
                Err(error) => {
                    self.report_failure(&error, on_event, &mut outcome);
                }
            }
        }

        Ok(outcome)
    }

    fn should_traverse(&self, entry: &DirEntry) -> bool {
        // The root itself is always entered; pruning applies to children.
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }

        self.filter.should_traverse_directory(entry.path())
    }

    fn read_block(&self, path: &Path) -> Result<FileBlock> {
        let relative_path = self.display_path(path)?;

        // Strict UTF-8: a file that does not decode is an InvalidData error.
        let content = fs::read_to_string(path).map_err(|source| CodeCatError::Read {
            path: PathBuf::from(&relative_path),
            source,
        })?;

        Ok(FileBlock::new(relative_path, content))
    }

    /// Path relative to the invocation root, with separators normalized to
    /// forward slashes regardless of host platform.
    fn display_path(&self, path: &Path) -> Result<String> {
        let relative = path
            .strip_prefix(&self.base)
            .map_err(|_| CodeCatError::InvalidPath {
                path: format!(
                    "Cannot express {} relative to {}",
                    path.display(),
                    self.base.display()
                ),
            })?;

        Ok(relative.to_string_lossy().replace('\\', "/"))
    }

    fn report_failure(
        &self,
        error: &CodeCatError,
        on_event: Option<&dyn Fn(ScanEvent)>,
        outcome: &mut ScanOutcome,
    ) {
        if let Some(callback) = on_event {
            callback(ScanEvent::Failed { error });
        }
        outcome.errors.push(error.to_string());
    }
}
