use crate::config::Config;
use std::collections::HashSet;
use std::path::Path;

/// Membership tests for the traversal: which files are extracted and which
/// directories are descended into.
pub struct FileFilter {
    extensions: Vec<String>,
    ignored_dirs: HashSet<String>,
}

impl FileFilter {
    pub fn new(config: &Config) -> Self {
        Self {
            extensions: config.extensions.clone(),
            ignored_dirs: config.ignored_dirs.clone(),
        }
    }

    /// Suffix match against the configured extensions. Case-sensitive:
    /// ".dart" matches "foo.dart" but not "foo.Dart".
    pub fn matches_extension(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };

        self.extensions.iter().any(|ext| name.ends_with(ext))
    }

    /// Exact name match against the ignored set. A pruned directory is never
    /// descended into, so nothing beneath it is visited at any depth.
    pub fn should_traverse_directory(&self, path: &Path) -> bool {
        match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => !self.ignored_dirs.contains(name),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_filter() -> FileFilter {
        let mut config = Config::default();
        config.extensions = vec![".dart".to_string(), ".yaml".to_string()];
        config.ignored_dirs = ["build", ".dart_tool", "test"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        FileFilter::new(&config)
    }

    #[test]
    fn test_extension_suffix_match() {
        let filter = create_test_filter();

        assert!(filter.matches_extension(Path::new("main.dart")));
        assert!(filter.matches_extension(Path::new("lib/src/widget.dart")));
        assert!(filter.matches_extension(Path::new("pubspec.yaml")));

        assert!(!filter.matches_extension(Path::new("notes.txt")));
        assert!(!filter.matches_extension(Path::new("dart")));
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        let filter = create_test_filter();

        assert!(!filter.matches_extension(Path::new("main.Dart")));
        assert!(!filter.matches_extension(Path::new("main.DART")));
    }

    #[test]
    fn test_suffix_not_substring() {
        let filter = create_test_filter();

        // The extension must end the name, not merely occur in it.
        assert!(!filter.matches_extension(Path::new("main.dart.bak")));
        // A bare suffix match still applies without a separating dot rule.
        assert!(filter.matches_extension(Path::new("weird.dart")));
    }

    #[test]
    fn test_directory_pruning_by_exact_name() {
        let filter = create_test_filter();

        assert!(!filter.should_traverse_directory(Path::new("build")));
        assert!(!filter.should_traverse_directory(Path::new("lib/build")));
        assert!(!filter.should_traverse_directory(Path::new(".dart_tool")));

        assert!(filter.should_traverse_directory(Path::new("src")));
        assert!(filter.should_traverse_directory(Path::new("builder")));
        assert!(filter.should_traverse_directory(Path::new("Build")));
    }
}
