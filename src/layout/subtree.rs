//! Re-place the descendants of one node around it.

use log::debug;
use std::collections::{HashMap, HashSet, VecDeque};

use crate::config::SubtreeSpacing;
use crate::model::{Edge, Node, Position};

/// Children of a node are the targets of its outgoing edges, taken in node
/// input order. Each child column sits `spacing.horizontal` right of its
/// parent, vertically centered on the parent. Nodes outside the subtree keep
/// their position; an unknown root leaves everything unchanged.
pub fn layout_subtree(
    nodes: &[Node],
    edges: &[Edge],
    root_id: &str,
    spacing: &SubtreeSpacing,
) -> Vec<Node> {
    let mut placed = nodes.to_vec();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for (idx, node) in nodes.iter().enumerate() {
        index.entry(node.id.as_str()).or_insert(idx);
    }

    if !index.contains_key(root_id) {
        debug!("subtree root {} not in map", root_id);
        return placed;
    }

    let mut targets: HashMap<&str, HashSet<&str>> = HashMap::new();
    for edge in edges {
        targets
            .entry(edge.source.as_str())
            .or_default()
            .insert(edge.target.as_str());
    }

    let mut visited: HashSet<&str> = HashSet::from([root_id]);
    let mut queue: VecDeque<&str> = VecDeque::from([root_id]);

    while let Some(parent_id) = queue.pop_front() {
        let Some(child_ids) = targets.get(parent_id) else {
            continue;
        };
        let children: Vec<&Node> = nodes
            .iter()
            .filter(|n| child_ids.contains(n.id.as_str()) && !visited.contains(n.id.as_str()))
            .collect();
        if children.is_empty() {
            continue;
        }

        let parent = placed[index[parent_id]].position;
        let start_y = parent.y - (children.len() - 1) as f64 * spacing.vertical / 2.0;

        for (i, child) in children.into_iter().enumerate() {
            let child_id = child.id.as_str();
            if !visited.insert(child_id) {
                continue;
            }
            placed[index[child_id]].position = Position::new(
                parent.x + spacing.horizontal,
                start_y + i as f64 * spacing.vertical,
            );
            queue.push_back(child_id);
        }
    }

    placed
}
