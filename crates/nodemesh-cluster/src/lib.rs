//! nodemesh-cluster — control-plane client for node membership.
//!
//! Snapshots of node and sub-cluster status, plus the administrative
//! command surface, all delegating to an external control plane behind
//! the [`ControlPlane`] trait.
//!
//! # Architecture
//!
//! ```text
//! MeshClient (cluster limits read once at init)
//!   ├── nodes()    → NodeRegistry — per-node status snapshot
//!   │     ├── counts, predicates, per-node lookup
//!   │     └── possible/present/online set materialization
//!   ├── clusters() → ClusterView — sub-cluster up/down snapshot
//!   └── control()  → ClusterControl
//!         ├── add/remove/fail/poweroff (NodeSet targets)
//!         └── start/shutdown/reboot    (sub-cluster scoped)
//!
//! ControlPlane (trait) — the external cluster-control resource
//!   └── SimControlPlane — in-memory, optionally file-backed
//! ```

pub mod client;
pub mod clusters;
pub mod control;
pub mod error;
pub mod plane;
pub mod registry;
pub mod sim;

pub use client::MeshClient;
pub use clusters::ClusterView;
pub use control::ClusterControl;
pub use error::{MeshError, MeshResult};
pub use plane::{ControlError, ControlPlane, ControlResult};
pub use registry::NodeRegistry;
pub use sim::SimControlPlane;
