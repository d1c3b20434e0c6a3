//! Node placement from levels.

use crate::config::LayoutConfig;
use crate::model::{Node, Position};

use super::levels::group_nodes_by_level;
use super::types::LevelMap;

/// Position every node: one column per level, columns centered on
/// `center_x`, nodes inside a column centered on `center_y`.
pub fn place_nodes(nodes: &[Node], levels: &LevelMap, config: &LayoutConfig) -> Vec<Node> {
    let grouped = group_nodes_by_level(nodes, levels);
    let half_span = levels.max_level() as f64 / 2.0;
    let mut placed = Vec::with_capacity(nodes.len());

    for (level, column) in grouped.iter().enumerate() {
        let x = config.center_x + (level as f64 - half_span) * config.level_spacing;
        let middle_rank = (column.len() as f64 - 1.0) / 2.0;

        for (rank, node) in column.iter().enumerate() {
            let y = config.center_y + (rank as f64 - middle_rank) * config.node_spacing;
            let mut node = (*node).clone();
            node.position = Position::new(x, y);
            placed.push(node);
        }
    }

    restore_input_order(nodes, placed)
}

/// Grouping walks level by level; hand nodes back in the caller's order.
fn restore_input_order(nodes: &[Node], mut placed: Vec<Node>) -> Vec<Node> {
    let mut ordered = Vec::with_capacity(nodes.len());
    for node in nodes {
        if let Some(idx) = placed.iter().position(|p| p.id == node.id) {
            ordered.push(placed.swap_remove(idx));
        }
    }
    ordered
}
