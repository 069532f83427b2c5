use std::time::{Duration, Instant};

/// One source file formatted for the output bundle: a header naming the
/// file's relative path, then the file's raw content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBlock {
    /// Path relative to the invocation root, forward-slash separators.
    pub relative_path: String,
    /// Verbatim decoded file content.
    pub content: String,
}

impl FileBlock {
    pub fn new<P: Into<String>, C: Into<String>>(relative_path: P, content: C) -> Self {
        Self {
            relative_path: relative_path.into(),
            content: content.into(),
        }
    }

    /// Header line, one blank line, content, exactly one trailing newline.
    pub fn render(&self) -> String {
        format!("// ===== {} =====\n\n{}\n", self.relative_path, self.content)
    }
}

/// Joins rendered blocks in traversal order. Each block already ends with a
/// newline, so the `\n` join leaves exactly one blank line between a block's
/// content and the next header.
pub fn assemble(blocks: &[FileBlock]) -> String {
    blocks
        .iter()
        .map(FileBlock::render)
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone)]
pub struct ExtractionSummary {
    pub files_extracted: usize,
    pub files_failed: usize,
    pub total_bytes: u64,
    start_time: Instant,
}

impl ExtractionSummary {
    pub fn start() -> Self {
        Self {
            files_extracted: 0,
            files_failed: 0,
            total_bytes: 0,
            start_time: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_render_shape() {
        let block = FileBlock::new("lib/a.dart", "class A {}");
        assert_eq!(block.render(), "// ===== lib/a.dart =====\n\nclass A {}\n");
    }

    #[test]
    fn test_render_appends_exactly_one_newline() {
        let block = FileBlock::new("lib/a.dart", "line\n");
        // Content ending in a newline keeps it and still gains one more.
        assert_eq!(block.render(), "// ===== lib/a.dart =====\n\nline\n\n");
    }

    #[test]
    fn test_assemble_separates_blocks_with_blank_line() {
        let blocks = vec![
            FileBlock::new("lib/a.dart", "class A {}"),
            FileBlock::new("lib/b.dart", "class B {}"),
        ];

        let expected = "// ===== lib/a.dart =====\n\nclass A {}\n\
                        \n\
                        // ===== lib/b.dart =====\n\nclass B {}\n";
        assert_eq!(assemble(&blocks), expected);
    }

    #[test]
    fn test_assemble_empty() {
        assert_eq!(assemble(&[]), "");
    }

    #[test]
    fn test_assemble_preserves_order() {
        let blocks = vec![
            FileBlock::new("lib/z.dart", "z"),
            FileBlock::new("lib/a.dart", "a"),
        ];

        let output = assemble(&blocks);
        let z_pos = output.find("lib/z.dart").unwrap();
        let a_pos = output.find("lib/a.dart").unwrap();
        assert!(z_pos < a_pos);
    }

    #[test]
    fn test_summary_counters() {
        let mut summary = ExtractionSummary::start();
        summary.files_extracted = 3;
        summary.files_failed = 1;
        summary.total_bytes = 42;

        assert_eq!(summary.files_extracted, 3);
        assert_eq!(summary.files_failed, 1);
        assert_eq!(summary.total_bytes, 42);
    }
}
