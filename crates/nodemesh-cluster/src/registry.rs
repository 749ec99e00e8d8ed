//! Node registry — a status snapshot covering every node.

use std::fmt;

use nodemesh_core::{NodeId, NodeSet, NodeStatus};

use crate::error::{MeshError, MeshResult};

/// Point-in-time status of every node identifier up to the cluster
/// maximum.
///
/// The snapshot is captured in a single control-plane call, so one
/// registry is internally consistent. Nothing relates two snapshots:
/// a command issued after a capture may observe different cluster
/// state, and two captures may disagree.
#[derive(Debug, Clone)]
pub struct NodeRegistry {
    statuses: Vec<NodeStatus>,
}

impl NodeRegistry {
    pub(crate) fn new(statuses: Vec<NodeStatus>) -> Self {
        Self { statuses }
    }

    /// Number of node identifiers covered by the snapshot.
    pub fn max_nodes(&self) -> u32 {
        self.statuses.len() as u32
    }

    /// Status of `node`, failing with [`MeshError::NodeOutOfRange`] for
    /// identifiers outside the snapshot.
    pub fn status(&self, node: NodeId) -> MeshResult<NodeStatus> {
        self.statuses
            .get(node as usize)
            .copied()
            .ok_or(MeshError::NodeOutOfRange {
                node,
                max: self.max_nodes(),
            })
    }

    fn count(&self, status: NodeStatus) -> usize {
        self.statuses.iter().filter(|&&s| s == status).count()
    }

    /// Number of nodes configured into the cluster but not attached.
    pub fn num_possible(&self) -> usize {
        self.count(NodeStatus::Possible)
    }

    /// Number of nodes attached but not participating.
    pub fn num_present(&self) -> usize {
        self.count(NodeStatus::Present)
    }

    /// Number of nodes participating in cluster operations.
    pub fn num_online(&self) -> usize {
        self.count(NodeStatus::Online)
    }

    // Each predicate matches its own status exactly. The statuses form
    // no structural lattice here, so possible/present/online are three
    // independent questions.
    fn is(&self, node: NodeId, status: NodeStatus) -> bool {
        self.statuses.get(node as usize) == Some(&status)
    }

    /// Whether `node` is possible. Out-of-range identifiers answer
    /// `false`, as for the other predicates.
    pub fn is_possible(&self, node: NodeId) -> bool {
        self.is(node, NodeStatus::Possible)
    }

    /// Whether `node` is present.
    pub fn is_present(&self, node: NodeId) -> bool {
        self.is(node, NodeStatus::Present)
    }

    /// Whether `node` is online.
    pub fn is_online(&self, node: NodeId) -> bool {
        self.is(node, NodeStatus::Online)
    }

    fn matching_set(&self, status: NodeStatus) -> NodeSet {
        let mut set = NodeSet::new(self.max_nodes());
        for (node, &s) in self.statuses.iter().enumerate() {
            if s == status {
                set.add(node as NodeId);
            }
        }
        set
    }

    /// Materialize the possible nodes into a new owned set.
    pub fn possible_set(&self) -> NodeSet {
        self.matching_set(NodeStatus::Possible)
    }

    /// Materialize the present nodes into a new owned set.
    pub fn present_set(&self) -> NodeSet {
        self.matching_set(NodeStatus::Present)
    }

    /// Materialize the online nodes into a new owned set.
    pub fn online_set(&self) -> NodeSet {
        self.matching_set(NodeStatus::Online)
    }

    /// Ascending iterator over online node identifiers.
    pub fn iter_online(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.filtered(|s| s == NodeStatus::Online)
    }

    /// Ascending iterator over every node with a valid status.
    pub fn iter_known(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.filtered(|s| s != NodeStatus::Invalid)
    }

    fn filtered<'a>(&'a self, keep: impl Fn(NodeStatus) -> bool + 'a) -> impl Iterator<Item = NodeId> + 'a {
        self.statuses
            .iter()
            .enumerate()
            .filter(move |&(_, &s)| keep(s))
            .map(|(node, _)| node as NodeId)
    }
}

/// One `id:status` line per known node.
impl fmt::Display for NodeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for node in self.iter_known() {
            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(f, "{node}:{}", self.statuses[node as usize])?;
        }
        Ok(())
    }
}
