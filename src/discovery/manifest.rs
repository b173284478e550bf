//! Project manifest (grove.yaml) parsing.
//!
//! The manifest defines project configuration: which directories hold
//! data files, which paths to skip, and the default validation mode.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GroveError, Result};

/// Project manifest loaded from grove.yaml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Source directories to scan for data files.
    /// Defaults to current directory if empty.
    #[serde(default)]
    pub sources: Vec<String>,

    /// Patterns to exclude from discovery.
    #[serde(default)]
    pub excludes: Vec<String>,

    /// Treat lint warnings as failures in `grove validate`.
    #[serde(default)]
    pub strict: bool,
}

impl Manifest {
    /// Load manifest from a grove.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GroveError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| GroveError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check grove.yaml syntax".to_string()),
        })
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.excludes {
            if Self::matches_pattern(&path_str, pattern) {
                return true;
            }
        }

        false
    }

    /// Simple glob pattern matching.
    fn matches_pattern(path: &str, pattern: &str) -> bool {
        if pattern.starts_with("**/") {
            // Match anywhere in path: **/foo/* matches any path containing /foo/
            let suffix = &pattern[3..];
            if suffix.ends_with("/*") {
                let dir = &suffix[..suffix.len() - 2];
                return path.contains(&format!("{}/", dir))
                    || path.contains(&format!("/{}/", dir))
                    || path.starts_with(&format!("{}/", dir));
            }
            return path.contains(suffix) || path.ends_with(suffix);
        }

        if pattern.starts_with('*') && !pattern.contains('/') {
            // Match file extension or suffix
            let suffix = &pattern[1..];
            return path.ends_with(suffix);
        }

        if pattern.ends_with("/*") {
            // Match directory contents
            let prefix = &pattern[..pattern.len() - 2];
            return path.starts_with(&format!("{}/", prefix))
                || path.contains(&format!("/{}/", prefix));
        }

        // Exact match or contains
        path.contains(pattern)
    }

    /// Get effective source paths, defaulting to current directory.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }
}
