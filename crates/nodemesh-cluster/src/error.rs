//! Mesh client error types.

use thiserror::Error;

use nodemesh_core::NodeId;

use crate::plane::ControlError;

/// Result type alias for mesh client operations.
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors surfaced by the mesh client.
///
/// Every variant names the operation that failed; nothing is retried or
/// swallowed before it reaches the caller.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A snapshot capture against the control plane failed.
    #[error("cluster query {op} failed: {source}")]
    Query {
        op: &'static str,
        source: ControlError,
    },

    /// An administrative command was rejected by the control plane.
    #[error("cluster command {op} failed: {source}")]
    Command {
        op: &'static str,
        source: ControlError,
    },

    /// A per-node status lookup was given an identifier outside the
    /// snapshot.
    #[error("node {node} out of range (max {max})")]
    NodeOutOfRange { node: NodeId, max: u32 },
}
