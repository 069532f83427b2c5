pub mod config;
pub mod error;
pub mod extractor;
pub mod scanner;
pub mod ui;

// Public API re-exports
pub use config::Config;
pub use error::{CodeCatError, Result, UserFriendlyError};
pub use extractor::{assemble, BundleWriter, ExtractionSummary, FileBlock};
pub use scanner::{FileFilter, ScanEvent, ScanOutcome, SourceScanner};
pub use ui::Reporter;

use std::path::PathBuf;

/// Main library interface: walks the configured source directory and writes
/// the flattened snapshot in one pass.
pub struct CodeCat {
    config: Config,
    reporter: Reporter,
    base: Option<PathBuf>,
}

impl CodeCat {
    pub fn new(config: Config, quiet: bool) -> Self {
        Self {
            config,
            reporter: Reporter::new(quiet),
            base: None,
        }
    }

    /// Overrides the invocation root, which defaults to the current working
    /// directory. Relative block paths are expressed against this.
    pub fn with_base<P: Into<PathBuf>>(mut self, base: P) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Runs the whole extraction: validate, scan, assemble, write.
    ///
    /// Per-file read failures are reported as they happen and do not abort
    /// the run. A missing source directory aborts before anything is written,
    /// so the previous output file (if any) is left untouched.
    pub fn run(&self) -> Result<ExtractionSummary> {
        self.config.validate()?;

        let base = match &self.base {
            Some(base) => base.clone(),
            None => std::env::current_dir()?,
        };

        let mut summary = ExtractionSummary::start();
        self.reporter.start_banner(&self.config.source_dir);

        let scanner = SourceScanner::new(base, &self.config);
        let outcome = scanner.scan(Some(&|event| match event {
            ScanEvent::Extracted { path } => self.reporter.extracted(path),
            ScanEvent::Failed { error } => self.reporter.failed(error),
        }))?;

        if outcome.blocks.is_empty() {
            self.reporter.warning(&format!(
                "No files matching {} found under \"{}\"",
                self.config.extensions.join(", "),
                self.config.source_dir.display()
            ));
        }

        let text = assemble(&outcome.blocks);

        let writer = BundleWriter::new(&self.config.output_file);
        writer.write(&text)?;

        summary.files_extracted = outcome.blocks.len();
        summary.files_failed = outcome.errors.len();
        summary.total_bytes = text.len() as u64;

        self.reporter.success_banner(writer.output_path());
        self.reporter.print_summary(&summary);

        Ok(summary)
    }

    pub fn handle_error(&self, error: &CodeCatError) {
        self.reporter.print_user_friendly_error(error);
    }
}
