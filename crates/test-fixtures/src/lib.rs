//! Test fixture loader for the golden scoring datasets.
//!
//! Fixtures live next to this crate under `golden/` and are located at compile
//! time, so any crate in the workspace can load them from its tests.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the golden fixtures.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("golden")
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

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted.
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

/// A golden scoring dataset: one preset, many expected outcomes.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringGolden {
    pub preset: String,
    pub description: String,
    pub cases: Vec<ScoringCase>,
}

/// One scenario with hand-computed expectations.
///
/// `standards` uses the snake_case tier name (`"very_low"` .. `"very_high"`).
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringCase {
    pub name: String,
    #[serde(default = "default_base")]
    pub base_enjoyment: f64,
    pub affinity: f64,
    pub trait_matches: usize,
    pub standards: String,
    pub expected_enjoyment: f64,
    pub expected_multiplier: f64,
    pub expected_success: f64,
    pub expected_rating: String,
}

fn default_base() -> f64 {
    0.5
}

/// Load every golden scoring dataset.
pub fn scoring_goldens() -> Vec<ScoringGolden> {
    list_fixtures("scoring")
        .iter()
        .map(|p| {
            let name = p
                .strip_prefix(fixtures_root())
                .unwrap_or(p)
                .to_string_lossy()
                .into_owned();
            load_fixture(&name)
        })
        .collect()
}
