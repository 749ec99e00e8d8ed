//! Administrative cluster commands.
//!
//! One-shot requests delegated to the control plane. Nothing is retried
//! here; retrying a cluster-wide command is a policy decision that
//! belongs to the caller or to the control plane itself.

use std::sync::Arc;

use tracing::info;

use nodemesh_core::{ClusterId, NodeSet};

use crate::error::{MeshError, MeshResult};
use crate::plane::{ControlPlane, ControlResult};

/// Handle for issuing administrative commands against the cluster.
pub struct ClusterControl {
    plane: Arc<dyn ControlPlane>,
}

impl ClusterControl {
    pub(crate) fn new(plane: Arc<dyn ControlPlane>) -> Self {
        Self { plane }
    }

    fn command(&self, op: &'static str, result: ControlResult<()>) -> MeshResult<()> {
        result.map_err(|source| MeshError::Command { op, source })
    }

    /// Request shutdown of a sub-cluster.
    pub fn shutdown(&self, subcluster: ClusterId) -> MeshResult<()> {
        info!(subcluster, "requesting sub-cluster shutdown");
        self.command("shutdown", self.plane.shutdown(subcluster))
    }

    /// Request reboot of a sub-cluster.
    pub fn reboot(&self, subcluster: ClusterId) -> MeshResult<()> {
        info!(subcluster, "requesting sub-cluster reboot");
        self.command("reboot", self.plane.reboot(subcluster))
    }

    /// Request that the nodes in `targets` join cluster operation.
    pub fn add_nodes(&self, targets: &NodeSet) -> MeshResult<()> {
        info!(targets = %targets, "requesting node add");
        self.command("add_nodes", self.plane.add_nodes(targets))
    }

    /// Request removal of the nodes in `targets` from cluster
    /// operation.
    pub fn remove_nodes(&self, targets: &NodeSet) -> MeshResult<()> {
        info!(targets = %targets, "requesting node remove");
        self.command("remove_nodes", self.plane.remove_nodes(targets))
    }

    /// Declare the nodes in `targets` failed.
    pub fn fail_nodes(&self, targets: &NodeSet) -> MeshResult<()> {
        info!(targets = %targets, "requesting node fail");
        self.command("fail_nodes", self.plane.fail_nodes(targets))
    }

    /// Request power-off of the nodes in `targets`.
    pub fn poweroff_nodes(&self, targets: &NodeSet) -> MeshResult<()> {
        info!(targets = %targets, "requesting node poweroff");
        self.command("poweroff_nodes", self.plane.poweroff_nodes(targets))
    }

    /// Boot a sub-cluster from the nodes in `targets`.
    pub fn start(&self, targets: &NodeSet, subcluster: ClusterId) -> MeshResult<()> {
        info!(subcluster, targets = %targets, "requesting sub-cluster start");
        self.command("start", self.plane.start(targets, subcluster))
    }
}
