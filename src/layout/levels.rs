//! Breadth-first level assignment from the first node.

use log::warn;
use std::collections::{HashMap, HashSet, VecDeque};

use crate::model::{Edge, Node};

use super::types::{LevelMap, UnreachablePolicy};

/// Assign every node a level: hop count from `nodes[0]` along
/// `source -> target` edges, first discovery wins. Nodes the root cannot
/// reach are placed according to `policy`.
pub fn assign_levels(nodes: &[Node], edges: &[Edge], policy: UnreachablePolicy) -> LevelMap {
    let mut map = LevelMap::default();
    let Some(root) = nodes.first() else {
        return map;
    };

    let outgoing = build_outgoing(nodes, edges);
    let levels = &mut map.levels;

    levels.insert(root.id.clone(), 0);
    let mut queue: VecDeque<&str> = VecDeque::from([root.id.as_str()]);

    while let Some(current) = queue.pop_front() {
        let next = levels[current] + 1;
        for &target in outgoing.get(current).into_iter().flatten() {
            if levels.contains_key(target) {
                continue;
            }
            levels.insert(target.to_string(), next);
            queue.push_back(target);
        }
    }

    let fallback = match policy {
        UnreachablePolicy::LevelZero => 0,
        UnreachablePolicy::TrailingLevel => levels.values().copied().max().unwrap_or(0) + 1,
    };
    for node in nodes {
        if !levels.contains_key(node.id.as_str()) {
            levels.insert(node.id.clone(), fallback);
        }
    }

    map
}

/// Source id -> targets, in edge order. Edges naming an unknown node are
/// dropped.
fn build_outgoing<'a>(nodes: &'a [Node], edges: &'a [Edge]) -> HashMap<&'a str, Vec<&'a str>> {
    let known: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    let mut outgoing: HashMap<&str, Vec<&str>> = HashMap::new();

    for edge in edges {
        if !known.contains(edge.source.as_str()) || !known.contains(edge.target.as_str()) {
            warn!("skipping edge {}: endpoint not in map", edge.id);
            continue;
        }
        outgoing
            .entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
    }

    outgoing
}

/// Group nodes by level, keeping input order inside each level.
pub fn group_nodes_by_level<'a>(nodes: &'a [Node], levels: &LevelMap) -> Vec<Vec<&'a Node>> {
    let mut grouped: Vec<Vec<&Node>> = vec![Vec::new(); levels.max_level() + 1];
    for node in nodes {
        let level = levels.get(&node.id).unwrap_or(0);
        grouped[level].push(node);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(ids: &[&str]) -> Vec<Node> {
        ids.iter().map(|id| Node::new(*id)).collect()
    }

    fn edges(pairs: &[(&str, &str)]) -> Vec<Edge> {
        pairs.iter().map(|(s, t)| Edge::between(*s, *t)).collect()
    }

    #[test]
    fn test_empty() {
        let levels = assign_levels(&[], &[], UnreachablePolicy::TrailingLevel);
        assert!(levels.is_empty());
    }

    #[test]
    fn test_fan_out() {
        let levels = assign_levels(
            &nodes(&["n1", "n2", "n3"]),
            &edges(&[("n1", "n2"), ("n1", "n3")]),
            UnreachablePolicy::TrailingLevel,
        );
        assert_eq!(levels.get("n1"), Some(0));
        assert_eq!(levels.get("n2"), Some(1));
        assert_eq!(levels.get("n3"), Some(1));
        assert_eq!(levels.max_level(), 1);
    }

    #[test]
    fn test_shortest_hop_count_wins() {
        // a -> b -> c -> d, plus shortcut a -> d listed last
        let levels = assign_levels(
            &nodes(&["a", "b", "c", "d"]),
            &edges(&[("a", "b"), ("b", "c"), ("c", "d"), ("a", "d")]),
            UnreachablePolicy::TrailingLevel,
        );
        assert_eq!(levels.get("c"), Some(2));
        assert_eq!(levels.get("d"), Some(1));
    }

    #[test]
    fn test_cycle_terminates() {
        let levels = assign_levels(
            &nodes(&["n1", "n2"]),
            &edges(&[("n1", "n2"), ("n2", "n1")]),
            UnreachablePolicy::TrailingLevel,
        );
        assert_eq!(levels.get("n1"), Some(0));
        assert_eq!(levels.get("n2"), Some(1));
        assert_eq!(levels.len(), 2);
    }

    #[test]
    fn test_edges_are_directed() {
        // Only b -> a exists, so the root a reaches nothing.
        let levels = assign_levels(
            &nodes(&["a", "b"]),
            &edges(&[("b", "a")]),
            UnreachablePolicy::LevelZero,
        );
        assert_eq!(levels.get("b"), Some(0));
    }

    #[test]
    fn test_unreachable_trailing_level() {
        let levels = assign_levels(
            &nodes(&["root", "child", "grandchild", "island", "other"]),
            &edges(&[("root", "child"), ("child", "grandchild"), ("island", "other")]),
            UnreachablePolicy::TrailingLevel,
        );
        assert_eq!(levels.get("grandchild"), Some(2));
        assert_eq!(levels.get("island"), Some(3));
        assert_eq!(levels.get("other"), Some(3));
    }

    #[test]
    fn test_unreachable_level_zero() {
        let levels = assign_levels(
            &nodes(&["root", "child", "island"]),
            &edges(&[("root", "child")]),
            UnreachablePolicy::LevelZero,
        );
        assert_eq!(levels.get("island"), Some(0));
        assert_eq!(levels.max_level(), 1);
    }

    #[test]
    fn test_lone_root_trailing() {
        let levels = assign_levels(&nodes(&["root", "loose"]), &[], UnreachablePolicy::TrailingLevel);
        assert_eq!(levels.get("root"), Some(0));
        assert_eq!(levels.get("loose"), Some(1));
    }

    #[test]
    fn test_dangling_edges_ignored() {
        let levels = assign_levels(
            &nodes(&["a", "b"]),
            &edges(&[("a", "ghost"), ("ghost", "b"), ("a", "b")]),
            UnreachablePolicy::TrailingLevel,
        );
        assert_eq!(levels.get("ghost"), None);
        assert_eq!(levels.get("b"), Some(1));
    }

    #[test]
    fn test_self_loop_ignored() {
        let levels = assign_levels(
            &nodes(&["a", "b"]),
            &edges(&[("a", "a"), ("a", "b")]),
            UnreachablePolicy::TrailingLevel,
        );
        assert_eq!(levels.get("a"), Some(0));
        assert_eq!(levels.get("b"), Some(1));
    }

    #[test]
    fn test_group_preserves_input_order() {
        let ns = nodes(&["r", "z", "a", "m"]);
        let levels = assign_levels(
            &ns,
            &edges(&[("r", "m"), ("r", "a"), ("r", "z")]),
            UnreachablePolicy::TrailingLevel,
        );
        let grouped = group_nodes_by_level(&ns, &levels);
        let ids: Vec<&str> = grouped[1].iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }
}
