use log::debug;
use serde::Deserialize;

use crate::model::{Edge, EdgeStyle, Marker, MarkerKind};

use super::ConnectError;
use super::edges::{self, DuplicatePolicy, append_edge};

/// Render hints stamped on every new edge.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EdgeDefaults {
    #[serde(rename = "type")]
    pub kind: String,
    pub animated: bool,
    pub marker: MarkerKind,
    pub stroke: String,
    pub stroke_width: f64,
}

impl Default for EdgeDefaults {
    fn default() -> Self {
        Self {
            kind: "smoothstep".to_string(),
            animated: false,
            marker: MarkerKind::ArrowClosed,
            stroke: "hsl(var(--border))".to_string(),
            stroke_width: 2.0,
        }
    }
}

impl EdgeDefaults {
    fn build(&self, source: &str, target: &str) -> Edge {
        Edge {
            kind: Some(self.kind.clone()),
            animated: self.animated,
            marker_end: Some(Marker::new(self.marker)),
            style: Some(EdgeStyle {
                stroke: Some(self.stroke.clone()),
                stroke_width: Some(self.stroke_width),
                stroke_dasharray: None,
            }),
            ..Edge::between(source, target)
        }
    }
}

/// Builds edges and tracks which node, if any, a connection gesture started
/// from. Owned by whoever handles the UI events; at most one gesture is in
/// flight and a new one replaces it.
#[derive(Debug, Clone, Default)]
pub struct ConnectionManager {
    defaults: EdgeDefaults,
    duplicates: DuplicatePolicy,
    connecting_from: Option<String>,
}

impl ConnectionManager {
    pub fn new(defaults: EdgeDefaults) -> Self {
        Self {
            defaults,
            duplicates: DuplicatePolicy::default(),
            connecting_from: None,
        }
    }

    pub fn with_duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    pub fn defaults(&self) -> &EdgeDefaults {
        &self.defaults
    }

    /// Validate the endpoints and build a styled edge. Does not touch any
    /// edge collection.
    pub fn create_edge(&self, source: &str, target: &str) -> Result<Edge, ConnectError> {
        if source.is_empty() || target.is_empty() {
            return Err(ConnectError::MissingEndpoint);
        }
        if source == target {
            debug!("rejected self connection on {}", source);
            return Err(ConnectError::SelfConnection(source.to_string()));
        }
        Ok(self.defaults.build(source, target))
    }

    /// Build an edge and append it to `edges` under the duplicate policy.
    pub fn connect(
        &self,
        edges: &mut Vec<Edge>,
        source: &str,
        target: &str,
    ) -> Result<(), ConnectError> {
        let edge = self.create_edge(source, target)?;
        append_edge(edges, edge, self.duplicates)
    }

    /// Move an edge to new endpoints under the duplicate policy.
    pub fn reconnect(
        &self,
        edges: &mut Vec<Edge>,
        edge_id: &str,
        source: Option<&str>,
        target: Option<&str>,
    ) -> Result<(), ConnectError> {
        edges::reconnect(edges, edge_id, source, target, self.duplicates)
    }

    pub fn begin_connection(&mut self, node_id: impl Into<String>) {
        self.connecting_from = Some(node_id.into());
    }

    pub fn connecting_from(&self) -> Option<&str> {
        self.connecting_from.as_deref()
    }

    pub fn is_connecting(&self) -> bool {
        self.connecting_from.is_some()
    }

    pub fn clear(&mut self) {
        self.connecting_from = None;
    }

    /// Finish the gesture on `target`. None when no gesture is in flight;
    /// otherwise the cursor is cleared whatever the outcome.
    pub fn complete_connection(&mut self, target: &str) -> Option<Result<Edge, ConnectError>> {
        let source = self.connecting_from.take()?;
        Some(self.create_edge(&source, target))
    }
}
