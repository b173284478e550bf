//! Data file loader - parses discovered files into documents.
//!
//! Takes scan results and loads every file, collecting per-file failures
//! into one aggregate report rather than stopping at the first.

use std::path::PathBuf;

use crate::error::{GroveError, Result};
use crate::parser::Document;

use super::scanner::ScanResult;

/// A data file parsed into its document tree.
#[derive(Debug)]
pub struct LoadedFile {
    /// Where the file was found.
    pub path: PathBuf,
    /// The parsed tree.
    pub document: Document,
}

/// Load every file in a scan result.
///
/// Parsing itself cannot fail (the grammar has no reject path), so the
/// only failures collected here are stream-level: unreadable files,
/// invalid encodings.
pub fn load_files(scan: &ScanResult) -> Result<Vec<LoadedFile>> {
    let mut loaded = Vec::new();
    let mut errors: Vec<String> = Vec::new();

    for path in &scan.files {
        match Document::load(path) {
            Ok(document) => loaded.push(LoadedFile {
                path: path.clone(),
                document,
            }),
            Err(e) => {
                errors.push(format!("{}: {}", path.display(), e));
            }
        }
    }

    if !errors.is_empty() {
        return Err(GroveError::Load {
            message: format!(
                "Failed to load {} file(s):\n  {}",
                errors.len(),
                errors.join("\n  ")
            ),
            help: Some("Fix the errors above and try again".to_string()),
        });
    }

    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_empty_scan() {
        let scan = ScanResult::default();

        let loaded = load_files(&scan).unwrap();

        assert!(loaded.is_empty());
    }

    #[test]
    fn test_load_data_files() {
        let dir = tempdir().unwrap();
        let ships = dir.path().join("ships.txt");
        let outfits = dir.path().join("outfits.txt");

        fs::write(&ships, "ship \"Kestrel\"\n\tbunks 12\n").unwrap();
        fs::write(&outfits, "outfit \"Blaster\"\n\tcost 5000\n").unwrap();

        let mut scan = ScanResult::default();
        scan.files.push(ships);
        scan.files.push(outfits);

        let loaded = load_files(&scan).unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].document.nodes()[0].token(1), "Kestrel");
        assert_eq!(loaded[1].document.nodes()[0].children()[0].value(1), 5000.0);
    }

    #[test]
    fn test_missing_file_error_is_aggregated() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.txt");
        fs::write(&good, "entry\n").unwrap();

        let mut scan = ScanResult::default();
        scan.files.push(good);
        scan.files.push(dir.path().join("missing.txt"));

        let result = load_files(&scan);

        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("missing.txt"));
    }
}
