//! Simulated control plane.
//!
//! In-memory [`ControlPlane`] implementation with the observable
//! transition rules pinned down: add brings present nodes online,
//! remove and fail demote online nodes to present, poweroff returns
//! nodes to possible, start marks a sub-cluster up and onlines its
//! targets, shutdown marks it down and demotes every online node.
//! Commands reject a target in the wrong state and name the node.
//!
//! State can be loaded from and saved to a JSON file, which is what
//! `meshadm` uses as its local backend. The sim does not partition
//! nodes across sub-clusters; a shutdown demotes all online nodes.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use nodemesh_core::{ClusterId, ClusterLimits, NodeId, NodeSet, NodeStatus};

use crate::plane::{ControlError, ControlPlane, ControlResult};

#[derive(Debug, Serialize, Deserialize)]
struct SimState {
    limits: ClusterLimits,
    nodes: Vec<NodeStatus>,
    clusters: Vec<bool>,
}

/// In-memory cluster standing in for the real control plane.
///
/// Cloning shares the underlying state, so a clone held by a test or a
/// CLI sees every mutation made through the client.
#[derive(Clone)]
pub struct SimControlPlane {
    state: Arc<Mutex<SimState>>,
}

impl SimControlPlane {
    /// Create a plane where every node is possible and every
    /// sub-cluster is down.
    pub fn new(limits: ClusterLimits) -> Self {
        let state = SimState {
            limits,
            nodes: vec![NodeStatus::Possible; limits.max_nodes as usize],
            clusters: vec![false; limits.max_clusters as usize],
        };
        debug!(
            max_nodes = limits.max_nodes,
            max_clusters = limits.max_clusters,
            "simulated control plane created"
        );
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Load a plane from a JSON state file.
    pub fn load(path: &Path) -> ControlResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ControlError::State(e.to_string()))?;
        let state: SimState =
            serde_json::from_str(&raw).map_err(|e| ControlError::State(e.to_string()))?;
        if state.nodes.len() != state.limits.max_nodes as usize
            || state.clusters.len() != state.limits.max_clusters as usize
        {
            return Err(ControlError::State(format!(
                "state file {} does not match its own limits",
                path.display()
            )));
        }
        debug!(path = %path.display(), "simulated control plane loaded");
        Ok(Self {
            state: Arc::new(Mutex::new(state)),
        })
    }

    /// Save the plane's state to a JSON file.
    pub fn save(&self, path: &Path) -> ControlResult<()> {
        let raw = serde_json::to_string_pretty(&*self.locked())
            .map_err(|e| ControlError::State(e.to_string()))?;
        std::fs::write(path, raw).map_err(|e| ControlError::State(e.to_string()))?;
        debug!(path = %path.display(), "simulated control plane saved");
        Ok(())
    }

    /// Mark `node` with `status`, for seeding topologies.
    pub fn set_status(&self, node: NodeId, status: NodeStatus) -> ControlResult<()> {
        let mut state = self.locked();
        match state.nodes.get_mut(node as usize) {
            Some(slot) => {
                *slot = status;
                Ok(())
            }
            None => Err(ControlError::UnknownNode(node)),
        }
    }

    fn locked(&self) -> MutexGuard<'_, SimState> {
        self.state.lock().expect("sim state lock poisoned")
    }
}

impl SimState {
    fn status(&self, node: NodeId) -> NodeStatus {
        self.nodes
            .get(node as usize)
            .copied()
            .unwrap_or(NodeStatus::Invalid)
    }

    fn check_cluster(&self, subcluster: ClusterId) -> ControlResult<()> {
        if (subcluster as usize) < self.clusters.len() {
            Ok(())
        } else {
            Err(ControlError::NoSuchCluster(subcluster))
        }
    }

    /// Validate every target against `wanted` before mutating anything,
    /// then apply `to`. Targets already in state `to` are left alone.
    fn transition(
        &mut self,
        targets: &NodeSet,
        wanted: NodeStatus,
        to: NodeStatus,
    ) -> ControlResult<()> {
        for node in targets {
            let status = self.status(node);
            if status == wanted || status == to {
                continue;
            }
            return Err(match wanted {
                NodeStatus::Present => ControlError::NotPresent(node),
                NodeStatus::Online => ControlError::NotOnline(node),
                _ => ControlError::UnknownNode(node),
            });
        }
        for node in targets {
            if self.status(node) == wanted {
                self.nodes[node as usize] = to;
            }
        }
        Ok(())
    }
}

impl ControlPlane for SimControlPlane {
    fn limits(&self) -> ControlResult<ClusterLimits> {
        Ok(self.locked().limits)
    }

    fn node_statuses(&self) -> ControlResult<Vec<NodeStatus>> {
        Ok(self.locked().nodes.clone())
    }

    fn cluster_states(&self) -> ControlResult<Vec<bool>> {
        Ok(self.locked().clusters.clone())
    }

    fn add_nodes(&self, targets: &NodeSet) -> ControlResult<()> {
        let mut state = self.locked();
        state.transition(targets, NodeStatus::Present, NodeStatus::Online)?;
        info!(targets = %targets, "nodes added");
        Ok(())
    }

    fn remove_nodes(&self, targets: &NodeSet) -> ControlResult<()> {
        let mut state = self.locked();
        state.transition(targets, NodeStatus::Online, NodeStatus::Present)?;
        info!(targets = %targets, "nodes removed");
        Ok(())
    }

    fn fail_nodes(&self, targets: &NodeSet) -> ControlResult<()> {
        let mut state = self.locked();
        state.transition(targets, NodeStatus::Online, NodeStatus::Present)?;
        info!(targets = %targets, "nodes declared failed");
        Ok(())
    }

    fn poweroff_nodes(&self, targets: &NodeSet) -> ControlResult<()> {
        let mut state = self.locked();
        for node in targets {
            if state.status(node) == NodeStatus::Invalid {
                return Err(ControlError::UnknownNode(node));
            }
        }
        for node in targets {
            state.nodes[node as usize] = NodeStatus::Possible;
        }
        info!(targets = %targets, "nodes powered off");
        Ok(())
    }

    fn start(&self, targets: &NodeSet, subcluster: ClusterId) -> ControlResult<()> {
        let mut state = self.locked();
        state.check_cluster(subcluster)?;
        state.transition(targets, NodeStatus::Present, NodeStatus::Online)?;
        state.clusters[subcluster as usize] = true;
        info!(subcluster, targets = %targets, "sub-cluster started");
        Ok(())
    }

    fn shutdown(&self, subcluster: ClusterId) -> ControlResult<()> {
        let mut state = self.locked();
        state.check_cluster(subcluster)?;
        state.clusters[subcluster as usize] = false;
        for status in &mut state.nodes {
            if *status == NodeStatus::Online {
                *status = NodeStatus::Present;
            }
        }
        info!(subcluster, "sub-cluster shut down");
        Ok(())
    }

    fn reboot(&self, subcluster: ClusterId) -> ControlResult<()> {
        let state = self.locked();
        state.check_cluster(subcluster)?;
        if !state.clusters[subcluster as usize] {
            return Err(ControlError::ClusterDown(subcluster));
        }
        info!(subcluster, "sub-cluster rebooted");
        Ok(())
    }
}
