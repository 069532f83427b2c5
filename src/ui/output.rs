use crate::error::{CodeCatError, UserFriendlyError};
use crate::extractor::ExtractionSummary;
use console::{style, Emoji, Term};
use std::path::Path;
use std::time::Duration;

// Emojis with text fallbacks
static CHECKMARK: Emoji = Emoji("✅ ", "✓ ");
static CROSS: Emoji = Emoji("❌ ", "✗ ");
static INFO: Emoji = Emoji("ℹ️  ", "i ");
static ROCKET: Emoji = Emoji("🚀 ", "> ");
static PARTY: Emoji = Emoji("🎉 ", "* ");

/// Console reporter for the run: a start banner, one line per file, and a
/// terminal success or failure banner.
pub struct Reporter {
    #[allow(dead_code)]
    term: Term,
    use_colors: bool,
    quiet: bool,
}

impl Reporter {
    pub fn new(quiet: bool) -> Self {
        let term = Term::stdout();
        let use_colors = term.features().colors_supported() && !quiet;

        Self {
            term,
            use_colors,
            quiet,
        }
    }

    pub fn start_banner(&self, source_dir: &Path) {
        if self.quiet {
            return;
        }

        let message = format!(
            "Starting extraction from directory: \"{}\"...",
            source_dir.display()
        );
        if self.use_colors {
            println!("{}{}", ROCKET, style(message).bold());
        } else {
            println!("> {}", message);
        }
    }

    pub fn extracted(&self, relative_path: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            println!("{}Extracted: {}", CHECKMARK, style(relative_path).green());
        } else {
            println!("✓ Extracted: {}", relative_path);
        }
    }

    /// Prints even in quiet mode: per-file failures are always surfaced,
    /// never silently swallowed.
    pub fn failed(&self, error: &CodeCatError) {
        if self.use_colors {
            eprintln!("{}{}", CROSS, style(error.user_message()).red());
        } else {
            eprintln!("✗ {}", error.user_message());
        }
    }

    pub fn success_banner(&self, output_path: &Path) {
        if self.quiet {
            return;
        }

        let message = format!(
            "Success! All code has been extracted to \"{}\".",
            output_path.display()
        );
        println!();
        if self.use_colors {
            println!("{}{}", PARTY, style(message).green().bold());
        } else {
            println!("* {}", message);
        }
    }

    pub fn warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            println!("{}", style(message).yellow());
        } else {
            println!("! {}", message);
        }
    }

    pub fn print_summary(&self, summary: &ExtractionSummary) {
        if self.quiet {
            return;
        }

        println!(
            "  Files extracted: {}",
            self.highlight(summary.files_extracted.to_string())
        );
        if summary.files_failed > 0 {
            println!(
                "  Files skipped:   {}",
                self.highlight(summary.files_failed.to_string())
            );
        }
        println!(
            "  Bytes written:   {}",
            self.highlight(format_bytes(summary.total_bytes))
        );
        println!(
            "  Time taken:      {}",
            self.highlight(format_duration(summary.elapsed()))
        );
    }

    pub fn print_user_friendly_error(&self, error: &CodeCatError) {
        if self.use_colors {
            eprintln!("{}{}", CROSS, style(error.user_message()).red().bold());
        } else {
            eprintln!("✗ {}", error.user_message());
        }

        if let Some(suggestion) = error.suggestion() {
            if self.use_colors {
                eprintln!("{}{}", INFO, style(suggestion).cyan());
            } else {
                eprintln!("i {}", suggestion);
            }
        }
    }

    fn highlight(&self, value: String) -> String {
        if self.use_colors {
            style(value).cyan().bold().to_string()
        } else {
            value
        }
    }
}

fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 60 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs > 0 {
        format!("{}s", secs)
    } else {
        format!("{}ms", duration.as_millis())
    }
}
