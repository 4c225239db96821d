//! Run settings: built-in defaults plus an optional TOML file.
//!
//! - `SimConfig::default()` → the settings of the original exploration runs
//! - `SimConfig::from_toml_file(path)` → user overrides, every field optional
//! - `SimConfig::load(&cli_path)` → `--config FILE`, else ~/.qma/config.toml if present

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::error::SimError;
use crate::core::sweep::KGrid;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub divergence: DivergenceSettings,
    pub explore: ExploreSettings,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DivergenceSettings {
    pub k: f64,
    pub steps: usize,
}

impl Default for DivergenceSettings {
    fn default() -> Self {
        Self { k: 0.41, steps: 10_000 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExploreSettings {
    pub escape_radius: f64,
    pub steps: usize,
    pub k_start: f64,
    pub k_end: f64,
    pub points: usize,
    /// Worker threads for sweeps; 0 lets rayon decide.
    pub threads: usize,
}

impl Default for ExploreSettings {
    fn default() -> Self {
        Self {
            escape_radius: 5.0,
            steps: 100,
            k_start: 0.4,
            k_end: 0.8,
            points: 41,
            threads: 0,
        }
    }
}

impl ExploreSettings {
    pub fn grid(&self) -> KGrid {
        KGrid::new(self.k_start, self.k_end, self.points)
    }
}

impl SimConfig {
    pub fn from_toml_str(txt: &str) -> Result<Self> {
        let cfg: SimConfig = toml::from_str(txt).context("parsing config TOML")?;
        Ok(cfg)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&txt).with_context(|| format!("loading {}", path.display()))
    }

    /// An explicit path must exist; the default path is optional.
    pub fn load(cli_path: &Option<PathBuf>) -> Result<Self> {
        if let Some(p) = cli_path {
            return Self::from_toml_file(p);
        }
        match default_config_path() {
            Some(p) if p.exists() => Self::from_toml_file(&p),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if !self.divergence.k.is_finite() {
            return Err(SimError::invalid_config("divergence.k must be finite"));
        }
        let radius = self.explore.escape_radius;
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimError::invalid_config(
                "explore.escape_radius must be a positive finite number",
            ));
        }
        self.explore.grid().validate()
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    // ~/.qma/config.toml (C:\Users\you\.qma\config.toml on Windows)
    dirs_next::home_dir().map(|h| h.join(".qma").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}
