//! nodemesh-core — node identifiers, status codes, and node sets.
//!
//! The leaf crate of the mesh. Everything here is plain owned data with
//! no dependency on the control plane: the identifier and limit types,
//! the node status codes, and the `NodeSet` collection used as the
//! target group for administrative commands.

pub mod limits;
pub mod nodeset;
pub mod status;

pub use limits::{ClusterId, ClusterLimits, NodeId};
pub use nodeset::{NodeSet, NodeSetIter, SetError, SetResult};
pub use status::NodeStatus;
