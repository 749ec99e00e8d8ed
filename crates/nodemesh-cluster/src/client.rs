//! Mesh client — the entry point to a control plane.

use std::sync::Arc;

use tracing::debug;

use nodemesh_core::ClusterLimits;

use crate::clusters::ClusterView;
use crate::control::ClusterControl;
use crate::error::{MeshError, MeshResult};
use crate::plane::ControlPlane;
use crate::registry::NodeRegistry;

/// Client handle over a control plane.
///
/// Reads the cluster limits exactly once at init; they are immutable
/// for the life of the client. Clones share the plane.
#[derive(Clone)]
pub struct MeshClient {
    plane: Arc<dyn ControlPlane>,
    limits: ClusterLimits,
}

impl MeshClient {
    /// Connect to a control plane and read its limits.
    pub fn init(plane: Arc<dyn ControlPlane>) -> MeshResult<Self> {
        let limits = plane
            .limits()
            .map_err(|source| MeshError::Query { op: "limits", source })?;
        debug!(
            max_nodes = limits.max_nodes,
            max_clusters = limits.max_clusters,
            "mesh client initialized"
        );
        Ok(Self { plane, limits })
    }

    /// Cluster-wide bounds, as read at init.
    pub fn limits(&self) -> ClusterLimits {
        self.limits
    }

    /// Capture a status snapshot of every node.
    pub fn nodes(&self) -> MeshResult<NodeRegistry> {
        let statuses = self.plane.node_statuses().map_err(|source| MeshError::Query {
            op: "node_statuses",
            source,
        })?;
        Ok(NodeRegistry::new(statuses))
    }

    /// Capture the up/down state of every sub-cluster.
    pub fn clusters(&self) -> MeshResult<ClusterView> {
        let states = self.plane.cluster_states().map_err(|source| MeshError::Query {
            op: "cluster_states",
            source,
        })?;
        Ok(ClusterView::new(states))
    }

    /// The administrative command surface.
    pub fn control(&self) -> ClusterControl {
        ClusterControl::new(Arc::clone(&self.plane))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimControlPlane;

    #[test]
    fn init_reads_limits_once() {
        let plane = SimControlPlane::new(ClusterLimits::new(16, 2));
        let client = MeshClient::init(Arc::new(plane)).unwrap();
        assert_eq!(client.limits(), ClusterLimits::new(16, 2));
    }

    #[test]
    fn snapshots_cover_the_whole_cluster() {
        let plane = SimControlPlane::new(ClusterLimits::new(16, 2));
        let client = MeshClient::init(Arc::new(plane)).unwrap();
        assert_eq!(client.nodes().unwrap().max_nodes(), 16);
        assert_eq!(client.clusters().unwrap().max_clusters(), 2);
    }
}
