// crates/huekit-cli/src/config.rs
//
// huekit.toml: extraction defaults plus the hand-authored meaning table.
//
//   extract_count = 5
//
//   [meanings]
//   "FF5733" = "Sunset orange. Optimism and appetite."

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use directories::{BaseDirs, ProjectDirs};
use huekit_core::extract::DEFAULT_COUNT;
use huekit_core::MeaningTable;
use log::debug;
use serde::Deserialize;

const CONFIG_FILE_NAME: &str = "huekit.toml";
const MAX_EXTRACT_COUNT: usize = 32;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub extract_count: usize,
    pub meanings: MeaningTable,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            extract_count: DEFAULT_COUNT,
            meanings: MeaningTable::new(),
        }
    }
}

impl AppConfig {
    /// An explicit path must exist and parse. Otherwise the first candidate
    /// that parses wins; broken candidates are reported and skipped.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        for path in Self::candidate_paths() {
            if let Ok(contents) = fs::read_to_string(&path) {
                match toml::from_str::<Self>(&contents) {
                    Ok(cfg) => {
                        debug!("config loaded from {}", path.display());
                        return Ok(cfg);
                    }
                    Err(err) => {
                        eprintln!("Failed to parse config {}: {err}", path.display());
                    }
                }
            }
        }
        Ok(Self::default())
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let cfg: Self = toml::from_str(&contents)
            .with_context(|| format!("parse config {}", path.display()))?;
        debug!(
            "config loaded from {} ({} meanings)",
            path.display(),
            cfg.meanings.len()
        );
        Ok(cfg)
    }

    pub fn extract_count(&self) -> usize {
        self.extract_count.clamp(1, MAX_EXTRACT_COUNT)
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(dir) = exe_path.parent() {
                paths.push(dir.join(CONFIG_FILE_NAME));
            }
        }

        if let Some(proj_dirs) = ProjectDirs::from("dev", "Huekit", "Huekit") {
            paths.push(proj_dirs.config_dir().join(CONFIG_FILE_NAME));
        }

        if let Some(base_dirs) = BaseDirs::new() {
            paths.push(base_dirs.config_dir().join("huekit").join(CONFIG_FILE_NAME));
        }

        paths
    }
}
