//! Layout engine core implementation.

use log::debug;

use crate::config::{LayoutConfig, SubtreeSpacing};
use crate::measure::TextMetrics;
use crate::model::{Edge, Node};

use super::levels::assign_levels;
use super::placement::place_nodes;
use super::subtree::layout_subtree;
use super::types::{Arrangement, FitView, UnreachablePolicy};
use super::viewport::fit_view;

/// Layout engine configuration and computation.
#[derive(Default)]
pub struct LayoutEngine {
    pub(crate) config: LayoutConfig,
    pub(crate) subtree: SubtreeSpacing,
    pub(crate) metrics: TextMetrics,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig, subtree: SubtreeSpacing) -> Self {
        Self {
            config,
            subtree,
            metrics: TextMetrics::default(),
        }
    }

    pub fn with_unreachable(mut self, policy: UnreachablePolicy) -> Self {
        self.config.unreachable = policy;
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Positioned copy of `nodes`. Everything but `position` passes through.
    pub fn layout(&self, nodes: &[Node], edges: &[Edge]) -> Vec<Node> {
        self.arrange(nodes, edges).nodes
    }

    /// Full result: positions, the level of every node, and the box the
    /// viewport should fit once the new positions are applied.
    pub fn arrange(&self, nodes: &[Node], edges: &[Edge]) -> Arrangement {
        // Phase 1: level assignment
        let levels = assign_levels(nodes, edges, self.config.unreachable);

        // Phase 2: placement
        let placed = place_nodes(nodes, &levels, &self.config);

        // Phase 3: fit view
        let view = fit_view(&placed, &self.metrics, self.config.fit_padding);

        debug!(
            "arranged {} nodes over {} levels ({} edges)",
            placed.len(),
            if levels.is_empty() { 0 } else { levels.max_level() + 1 },
            edges.len()
        );

        Arrangement {
            nodes: placed,
            levels,
            fit_view: view,
        }
    }

    /// Like [`arrange`](Self::arrange), handing the fit-view box to
    /// `on_fit` before returning. Not called for an empty map.
    pub fn arrange_then<F>(&self, nodes: &[Node], edges: &[Edge], on_fit: F) -> Arrangement
    where
        F: FnOnce(&FitView),
    {
        let arrangement = self.arrange(nodes, edges);
        if let Some(view) = &arrangement.fit_view {
            on_fit(view);
        }
        arrangement
    }

    pub fn layout_subtree(&self, nodes: &[Node], edges: &[Edge], root_id: &str) -> Vec<Node> {
        layout_subtree(nodes, edges, root_id, &self.subtree)
    }
}
