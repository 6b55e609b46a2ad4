use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::source::{FileSource, ShareSource};

/// Documents processed when nothing else is configured.
pub const DEFAULT_SOURCES: [&str; 2] = ["input1.json", "input2.json"];

/// Which share documents a run processes, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub sources: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: DEFAULT_SOURCES.into_iter().map(PathBuf::from).collect(),
        }
    }
}

impl Config {
    /// Load a JSON config file: `{"sources": ["a.json", "b.json"]}`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Explicit paths win over a config file, which wins over the defaults.
    pub fn resolve(paths: Vec<PathBuf>, config_file: Option<&Path>) -> Result<Self> {
        if !paths.is_empty() {
            return Ok(Self { sources: paths });
        }
        match config_file {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn share_sources(&self) -> Vec<Box<dyn ShareSource>> {
        self.sources
            .iter()
            .map(|p| Box::new(FileSource::new(p)) as Box<dyn ShareSource>)
            .collect()
    }
}
