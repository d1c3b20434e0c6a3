//! Edge construction and the in-flight connection gesture.

mod edges;
mod manager;

pub use edges::{DuplicatePolicy, append_edge, connections_of, reconnect, remove_between, remove_edge};
pub use manager::{ConnectionManager, EdgeDefaults};

/// Why a connection was not made. Always recoverable; the caller decides
/// whether to tell the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectError {
    #[error("Cannot connect node {0} to itself")]
    SelfConnection(String),
    #[error("Connection needs both a source and a target node")]
    MissingEndpoint,
    #[error("Nodes {from} and {to} are already connected")]
    AlreadyConnected { from: String, to: String },
    #[error("Unknown edge: {0}")]
    UnknownEdge(String),
}
