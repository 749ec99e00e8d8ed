//! meshadm command implementations.

pub mod cluster;
pub mod nodes;

use std::sync::Arc;

use tracing::debug;

use nodemesh_cluster::{MeshClient, SimControlPlane};

use crate::config::MeshConfig;

/// Open the local control-plane backend: the state file if it exists,
/// otherwise a fresh plane seeded from the config limits.
pub(crate) fn open(cfg: &MeshConfig) -> anyhow::Result<(MeshClient, SimControlPlane)> {
    let path = &cfg.cluster.state_path;
    let plane = if path.exists() {
        debug!(path = %path.display(), "loading control-plane state");
        SimControlPlane::load(path)?
    } else {
        debug!(path = %path.display(), "seeding fresh control-plane state");
        SimControlPlane::new(cfg.limits())
    };
    let client = MeshClient::init(Arc::new(plane.clone()))?;
    Ok((client, plane))
}

pub(crate) fn persist(cfg: &MeshConfig, plane: &SimControlPlane) -> anyhow::Result<()> {
    plane.save(&cfg.cluster.state_path)?;
    Ok(())
}
