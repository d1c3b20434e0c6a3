//! Tunable constants for arranging maps and building edges.

use serde::Deserialize;
use std::path::Path;

use crate::connection::{ConnectionManager, DuplicatePolicy, EdgeDefaults};
use crate::layout::{LayoutEngine, UnreachablePolicy};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Whole-map layout settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Horizontal distance between adjacent levels.
    pub level_spacing: f64,
    /// Vertical distance between nodes sharing a level.
    pub node_spacing: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub unreachable: UnreachablePolicy,
    /// Fraction of the arranged extent added around the fit-view box.
    pub fit_padding: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            level_spacing: 250.0,
            node_spacing: 100.0,
            center_x: 400.0,
            center_y: 300.0,
            unreachable: UnreachablePolicy::default(),
            fit_padding: 0.2,
        }
    }
}

/// Offsets used when re-placing the descendants of one node.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SubtreeSpacing {
    pub horizontal: f64,
    pub vertical: f64,
}

impl Default for SubtreeSpacing {
    fn default() -> Self {
        Self {
            horizontal: 150.0,
            vertical: 100.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub layout: LayoutConfig,
    pub subtree: SubtreeSpacing,
    pub edges: EdgeDefaults,
    /// Applied when a new edge is merged into a map's edge list.
    pub duplicates: DuplicatePolicy,
}

impl Config {
    /// Parse a (possibly partial) JSON config; missing keys keep defaults.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn layout_engine(&self) -> LayoutEngine {
        LayoutEngine::new(self.layout.clone(), self.subtree)
    }

    pub fn connection_manager(&self) -> ConnectionManager {
        ConnectionManager::new(self.edges.clone()).with_duplicates(self.duplicates)
    }
}

pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    Config::from_json(&contents)
}
