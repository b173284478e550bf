//! File system scanner for discovering data files.
//!
//! Recursively scans directories to find `.txt` data files, honouring
//! manifest exclude patterns.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// Result of scanning for data files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Discovered data files, in walk order.
    pub files: Vec<PathBuf>,
}

impl ScanResult {
    /// Create a new empty scan result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of discovered files.
    pub fn total(&self) -> usize {
        self.files.len()
    }

    /// Check if no files were discovered.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Merge another scan result into this one.
    pub fn merge(&mut self, other: ScanResult) {
        self.files.extend(other.files);
    }
}

/// Scan a directory for data files.
///
/// Recursively walks the directory and collects every `.txt` file not
/// excluded by the manifest.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        return result;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        if manifest.is_excluded(path) {
            continue;
        }

        if is_data_file(path) {
            result.files.push(path.to_path_buf());
        }
    }

    result
}

/// Scan multiple source paths.
pub fn scan_sources(sources: &[String], base_path: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    for source in sources {
        let source_path = if Path::new(source).is_absolute() {
            PathBuf::from(source)
        } else {
            base_path.join(source)
        };

        let scan = scan_directory(&source_path, manifest);
        result.merge(scan);
    }

    result
}

/// Whether a path looks like a data file (`.txt` extension).
pub fn is_data_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("txt")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_is_data_file() {
        assert!(is_data_file(Path::new("ships.txt")));
        assert!(is_data_file(Path::new("data/missions/intro.txt")));
        assert!(!is_data_file(Path::new("readme.md")));
        assert!(!is_data_file(Path::new("notes")));
        assert!(!is_data_file(Path::new("archive.txt.bak")));
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempdir().unwrap();
        let manifest = Manifest::default();

        let result = scan_directory(dir.path(), &manifest);

        assert!(result.is_empty());
        assert_eq!(result.total(), 0);
    }

    #[test]
    fn test_scan_with_data_files() {
        let dir = tempdir().unwrap();

        fs::write(dir.path().join("ships.txt"), "ship X\n").unwrap();
        fs::write(dir.path().join("outfits.txt"), "outfit Y\n").unwrap();
        fs::write(dir.path().join("readme.md"), "# Readme").unwrap();

        let manifest = Manifest::default();
        let result = scan_directory(dir.path(), &manifest);

        assert_eq!(result.total(), 2);
    }

    #[test]
    fn test_scan_recursive() {
        let dir = tempdir().unwrap();

        fs::create_dir_all(dir.path().join("data/missions")).unwrap();
        fs::write(dir.path().join("data/ships.txt"), "ship X\n").unwrap();
        fs::write(dir.path().join("data/missions/intro.txt"), "mission A\n").unwrap();

        let manifest = Manifest::default();
        let result = scan_directory(dir.path(), &manifest);

        assert_eq!(result.total(), 2);
    }

    #[test]
    fn test_scan_with_excludes() {
        let dir = tempdir().unwrap();

        fs::create_dir_all(dir.path().join("drafts")).unwrap();
        fs::write(dir.path().join("ships.txt"), "ship X\n").unwrap();
        fs::write(dir.path().join("drafts/wip.txt"), "ship Y\n").unwrap();

        let manifest = Manifest {
            excludes: vec!["**/drafts/*".to_string()],
            ..Default::default()
        };

        let result = scan_directory(dir.path(), &manifest);

        assert_eq!(result.total(), 1);
        assert!(result.files[0].to_string_lossy().contains("ships"));
    }

    #[test]
    fn test_scan_result_merge() {
        let mut a = ScanResult::new();
        a.files.push(PathBuf::from("a.txt"));

        let mut b = ScanResult::new();
        b.files.push(PathBuf::from("b.txt"));

        a.merge(b);

        assert_eq!(a.total(), 2);
    }

    #[test]
    fn test_scan_nonexistent_directory() {
        let manifest = Manifest::default();
        let result = scan_directory(Path::new("/nonexistent/path"), &manifest);

        assert!(result.is_empty());
    }
}
