//! meshadm.toml configuration parser.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use nodemesh_core::ClusterLimits;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeshConfig {
    #[serde(default)]
    pub cluster: ClusterConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Where the local control-plane backend persists its state.
    pub state_path: PathBuf,
    /// Limits used to seed a fresh state file.
    pub max_nodes: u32,
    pub max_clusters: u32,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            state_path: PathBuf::from("meshadm-state.json"),
            max_nodes: 32,
            max_clusters: 4,
        }
    }
}

impl MeshConfig {
    /// Load from `path`, falling back to defaults if the file is
    /// absent.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn limits(&self) -> ClusterLimits {
        ClusterLimits::new(self.cluster.max_nodes, self.cluster.max_clusters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = MeshConfig::load(Path::new("/nonexistent/meshadm.toml")).unwrap();
        assert_eq!(cfg.cluster.max_nodes, 32);
        assert_eq!(cfg.cluster.max_clusters, 4);
        assert_eq!(cfg.limits(), ClusterLimits::new(32, 4));
    }

    #[test]
    fn parses_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meshadm.toml");
        std::fs::write(
            &path,
            "[cluster]\nstate_path = \"/tmp/mesh.json\"\nmax_nodes = 8\nmax_clusters = 1\n",
        )
        .unwrap();

        let cfg = MeshConfig::load(&path).unwrap();
        assert_eq!(cfg.cluster.state_path, PathBuf::from("/tmp/mesh.json"));
        assert_eq!(cfg.limits(), ClusterLimits::new(8, 1));
    }

    #[test]
    fn rejects_malformed_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meshadm.toml");
        std::fs::write(&path, "[cluster\n").unwrap();
        assert!(MeshConfig::load(&path).is_err());
    }
}
