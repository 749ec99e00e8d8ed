//! Control-plane boundary.
//!
//! The mesh client is a pure client of an external cluster-control
//! resource; [`ControlPlane`] is the complete verb set it relies on.
//! Implementations own the actual orchestration and failure recovery.
//! All calls are synchronous, and node state may change between any two
//! calls, including between a snapshot and a later command.

use thiserror::Error;

use nodemesh_core::{ClusterId, ClusterLimits, NodeId, NodeSet, NodeStatus};

/// Result alias for control-plane calls.
pub type ControlResult<T> = Result<T, ControlError>;

/// Errors reported by a control-plane implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControlError {
    #[error("node {0} is not present on the cluster")]
    NotPresent(NodeId),

    #[error("node {0} is not online")]
    NotOnline(NodeId),

    #[error("node {0} is not known to the cluster")]
    UnknownNode(NodeId),

    #[error("sub-cluster {0} does not exist")]
    NoSuchCluster(ClusterId),

    #[error("sub-cluster {0} is not up")]
    ClusterDown(ClusterId),

    #[error("control-plane state error: {0}")]
    State(String),
}

/// The external cluster-control resource.
pub trait ControlPlane: Send + Sync {
    /// Cluster-wide bounds, fixed for the life of the plane.
    fn limits(&self) -> ControlResult<ClusterLimits>;

    /// Status of every node identifier up to `max_nodes`, captured in a
    /// single call.
    fn node_statuses(&self) -> ControlResult<Vec<NodeStatus>>;

    /// Up/down state of every sub-cluster up to `max_clusters`.
    fn cluster_states(&self) -> ControlResult<Vec<bool>>;

    /// Bring the present nodes in `targets` online.
    fn add_nodes(&self, targets: &NodeSet) -> ControlResult<()>;

    /// Take the online nodes in `targets` out of cluster operation.
    fn remove_nodes(&self, targets: &NodeSet) -> ControlResult<()>;

    /// Declare the nodes in `targets` failed.
    fn fail_nodes(&self, targets: &NodeSet) -> ControlResult<()>;

    /// Power the nodes in `targets` off.
    fn poweroff_nodes(&self, targets: &NodeSet) -> ControlResult<()>;

    /// Boot `subcluster` from the nodes in `targets`.
    fn start(&self, targets: &NodeSet, subcluster: ClusterId) -> ControlResult<()>;

    /// Shut `subcluster` down.
    fn shutdown(&self, subcluster: ClusterId) -> ControlResult<()>;

    /// Reboot `subcluster`.
    fn reboot(&self, subcluster: ClusterId) -> ControlResult<()>;
}
