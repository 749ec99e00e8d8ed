//! Node status codes reported by the control plane.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a node.
///
/// A node has exactly one status at any observation. Callers query each
/// status independently; nothing here encodes or assumes the
/// online ⇒ present ⇒ possible progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    /// Not a meaningful node on this cluster.
    Invalid,
    /// Configured into the cluster, not attached.
    Possible,
    /// Physically attached, not participating.
    Present,
    /// Attached and participating in cluster operations.
    Online,
}

impl NodeStatus {
    /// Status name, as rendered in listings.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeStatus::Invalid => "invalid",
            NodeStatus::Possible => "possible",
            NodeStatus::Present => "present",
            NodeStatus::Online => "online",
        }
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
