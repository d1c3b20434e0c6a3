//! Operations on the caller-owned edge collection.

use serde::Deserialize;

use crate::model::Edge;

use super::ConnectError;

/// What to do when an edge with the same ordered endpoints already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Append anyway; the collection may hold two `edge-a-b`.
    Allow,
    #[default]
    Reject,
}

pub fn append_edge(
    edges: &mut Vec<Edge>,
    edge: Edge,
    policy: DuplicatePolicy,
) -> Result<(), ConnectError> {
    if policy == DuplicatePolicy::Reject && edges.iter().any(|e| e.joins(&edge.source, &edge.target))
    {
        return Err(ConnectError::AlreadyConnected {
            from: edge.source,
            to: edge.target,
        });
    }
    edges.push(edge);
    Ok(())
}

/// Move an existing edge to new endpoints, keeping its render hints. A None
/// or empty endpoint keeps the old one. The edge gets a fresh id and moves to
/// the end of the collection. Under `Reject` the move fails if another edge
/// already joins the new endpoints.
pub fn reconnect(
    edges: &mut Vec<Edge>,
    edge_id: &str,
    source: Option<&str>,
    target: Option<&str>,
    policy: DuplicatePolicy,
) -> Result<(), ConnectError> {
    let idx = edges
        .iter()
        .position(|e| e.id == edge_id)
        .ok_or_else(|| ConnectError::UnknownEdge(edge_id.to_string()))?;

    let source = source
        .filter(|s| !s.is_empty())
        .unwrap_or(&edges[idx].source)
        .to_string();
    let target = target
        .filter(|t| !t.is_empty())
        .unwrap_or(&edges[idx].target)
        .to_string();
    if source == target {
        return Err(ConnectError::SelfConnection(source));
    }

    let taken = edges
        .iter()
        .enumerate()
        .any(|(i, e)| i != idx && e.joins(&source, &target));
    if policy == DuplicatePolicy::Reject && taken {
        return Err(ConnectError::AlreadyConnected {
            from: source,
            to: target,
        });
    }

    let mut edge = edges.remove(idx);
    edge.id = Edge::id_for(&source, &target);
    edge.source = source;
    edge.target = target;
    edges.push(edge);
    Ok(())
}

pub fn remove_edge(edges: &mut Vec<Edge>, edge_id: &str) -> bool {
    let before = edges.len();
    edges.retain(|e| e.id != edge_id);
    edges.len() != before
}

/// Remove every `source -> target` edge; returns how many went.
pub fn remove_between(edges: &mut Vec<Edge>, source: &str, target: &str) -> usize {
    let before = edges.len();
    edges.retain(|e| !e.joins(source, target));
    before - edges.len()
}

pub fn connections_of<'a>(edges: &'a [Edge], node_id: &str) -> Vec<&'a Edge> {
    edges.iter().filter(|e| e.touches(node_id)).collect()
}
