//! Data structures for layout computation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::Node;

/// Where nodes that the root cannot reach end up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnreachablePolicy {
    /// Share level 0 with the root, ranked after it in input order.
    LevelZero,
    /// One synthetic level past the deepest reached level.
    #[default]
    TrailingLevel,
}

impl UnreachablePolicy {
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "level-zero" => Some(Self::LevelZero),
            "trailing-level" => Some(Self::TrailingLevel),
            _ => None,
        }
    }
}

/// Node id -> BFS level, valid for one layout call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LevelMap {
    pub(crate) levels: BTreeMap<String, usize>,
}

impl LevelMap {
    pub fn get(&self, id: &str) -> Option<usize> {
        self.levels.get(id).copied()
    }

    pub fn max_level(&self) -> usize {
        self.levels.values().copied().max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.levels.iter().map(|(id, &level)| (id.as_str(), level))
    }
}

/// Rectangle the camera should frame after an arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitView {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl FitView {
    /// True when the node box lies entirely inside this view.
    pub fn contains(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
        x >= self.x
            && y >= self.y
            && x + width <= self.x + self.width
            && y + height <= self.y + self.height
    }
}

/// The complete layout result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Arrangement {
    pub nodes: Vec<Node>,
    pub levels: LevelMap,
    /// None only for an empty map.
    pub fit_view: Option<FitView>,
}
