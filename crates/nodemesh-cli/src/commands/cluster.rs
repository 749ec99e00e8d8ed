//! `meshadm cluster` commands.

use crate::ClusterAction;
use crate::commands;
use crate::config::MeshConfig;
use crate::nodelist;

pub fn run(cfg: &MeshConfig, action: ClusterAction) -> anyhow::Result<()> {
    let (client, plane) = commands::open(cfg)?;
    match action {
        ClusterAction::Status => {
            let view = client.clusters()?;
            let up: Vec<_> = view.iter_up().collect();
            if up.is_empty() {
                println!("no running cluster");
            } else {
                for subcluster in up {
                    println!("{subcluster}:up");
                }
            }
            Ok(())
        }
        ClusterAction::Start { nodes, subcluster } => {
            let targets = match nodes {
                Some(list) => nodelist::parse(&list, client.limits().max_nodes)?,
                None => {
                    println!("no nodes specified, starting every present node");
                    client.nodes()?.present_set()
                }
            };
            client.control().start(&targets, subcluster)?;
            commands::persist(cfg, &plane)?;
            println!("sub-cluster {subcluster} started from {targets}");
            Ok(())
        }
        ClusterAction::Shutdown { subcluster } => {
            client.control().shutdown(subcluster)?;
            commands::persist(cfg, &plane)?;
            println!("sub-cluster {subcluster} shut down");
            Ok(())
        }
        ClusterAction::Reboot { subcluster } => {
            client.control().reboot(subcluster)?;
            commands::persist(cfg, &plane)?;
            println!("sub-cluster {subcluster} rebooted");
            Ok(())
        }
    }
}
