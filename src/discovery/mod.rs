//! File discovery and loading for grove projects.
//!
//! This module handles finding and loading all data files from a project
//! directory, either by convention (every `.txt` under the root) or via
//! a `grove.yaml` manifest.
//!
//! # Example
//!
//! ```ignore
//! use grove::discovery::discover;
//!
//! let result = discover("./my-project")?;
//! println!("Found {} data files", result.scan.total());
//!
//! let files = result.into_files()?;
//! ```

mod loader;
mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use loader::{load_files, LoadedFile};
pub use manifest::Manifest;
pub use scanner::{is_data_file, scan_directory, scan_sources, ScanResult};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "grove.yaml";

/// Result of discovering data files in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (may be default if no grove.yaml found).
    pub manifest: Manifest,

    /// Whether a grove.yaml manifest was found.
    pub has_manifest: bool,

    /// Scan results with discovered files.
    pub scan: ScanResult,
}

impl DiscoveryResult {
    /// Load every discovered file into its document tree.
    pub fn into_files(self) -> Result<Vec<LoadedFile>> {
        load_files(&self.scan)
    }
}

/// Discover data files in a project directory.
///
/// Looks for a `grove.yaml` manifest in the root directory. If found,
/// uses the manifest's source paths. Otherwise, scans the entire
/// directory for `.txt` data files.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    let sources = manifest.effective_sources();
    let scan = scan_sources(&sources, &root, &manifest);

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        scan,
    })
}

/// Discover data files from specific paths (no manifest lookup).
///
/// Directories are scanned recursively; files are taken as given, so a
/// file named on the command line is included whatever its extension.
pub fn discover_paths(paths: &[PathBuf]) -> Result<DiscoveryResult> {
    let manifest = Manifest::default();
    let mut scan = ScanResult::new();

    for path in paths {
        if path.is_dir() {
            let dir_scan = scan_directory(path, &manifest);
            scan.merge(dir_scan);
        } else {
            scan.files.push(path.clone());
        }
    }

    let root = paths
        .first()
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest: false,
        scan,
    })
}
