//! Test fixture loader for relata golden datasets.
//!
//! Golden files describe a binary table, the requested variables, and the
//! expected discovery output. Tests in any crate of the workspace load them
//! through [`load_golden`].

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    if path.join("golden").exists() && path.ends_with("test-fixtures") {
        return path;
    }
    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load `golden/<name>.json`.
pub fn load_golden(name: &str) -> GoldenCase {
    load_fixture(&format!("golden/{name}.json"))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    let Ok(entries) = std::fs::read_dir(&dir) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

/// One named column of a golden table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldenColumn {
    pub name: String,
    pub values: Vec<i64>,
}

/// Expected type-level cause, identified by cause name and window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpectedCause {
    pub cause: String,
    pub window: [usize; 2],
    pub prob: f64,
    pub token_count: usize,
}

/// Expected survivor of pruning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpectedScore {
    pub cause: String,
    pub window: [usize; 2],
    pub score: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldenExpectation {
    pub type_level: Vec<ExpectedCause>,
    pub significant: Vec<ExpectedScore>,
}

/// A complete golden discovery case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldenCase {
    pub description: String,
    pub columns: Vec<GoldenColumn>,
    pub causes: Vec<String>,
    pub effect: String,
    pub max_lag: usize,
    #[serde(default)]
    pub lone_candidate: Option<String>,
    pub expected: GoldenExpectation,
}
