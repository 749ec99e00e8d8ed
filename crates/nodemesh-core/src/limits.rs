//! Identifier and limit types shared across the mesh.

use serde::{Deserialize, Serialize};

/// Identifier of a single node in the cluster.
///
/// Valid identifiers lie in `[0, max_nodes)` for the cluster's
/// [`ClusterLimits`].
pub type NodeId = u32;

/// Identifier of a logical sub-cluster. The default sub-cluster is 0.
pub type ClusterId = u32;

/// Cluster-wide bounds.
///
/// Read from the control plane once when a client initializes and
/// immutable for the rest of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterLimits {
    /// Upper bound (exclusive) on node identifiers.
    pub max_nodes: u32,
    /// Upper bound (exclusive) on sub-cluster identifiers.
    pub max_clusters: u32,
}

impl ClusterLimits {
    pub fn new(max_nodes: u32, max_clusters: u32) -> Self {
        Self {
            max_nodes,
            max_clusters,
        }
    }

    /// Whether `node` is a valid node identifier under these limits.
    pub fn holds_node(&self, node: NodeId) -> bool {
        node < self.max_nodes
    }

    /// Whether `subcluster` is a valid sub-cluster identifier.
    pub fn holds_cluster(&self, subcluster: ClusterId) -> bool {
        subcluster < self.max_clusters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_exclusive() {
        let limits = ClusterLimits::new(4, 2);
        assert!(limits.holds_node(0));
        assert!(limits.holds_node(3));
        assert!(!limits.holds_node(4));
        assert!(limits.holds_cluster(1));
        assert!(!limits.holds_cluster(2));
    }
}
