//! `meshadm nodes` commands.

use crate::NodesAction;
use crate::commands;
use crate::config::MeshConfig;
use crate::nodelist;

pub fn run(cfg: &MeshConfig, action: NodesAction) -> anyhow::Result<()> {
    let (client, plane) = commands::open(cfg)?;
    let control = client.control();
    let max_nodes = client.limits().max_nodes;

    match action {
        NodesAction::Status => {
            let registry = client.nodes()?;
            let listing = registry.to_string();
            if listing.is_empty() {
                println!("no known nodes");
            } else {
                println!("{listing}");
            }
            println!(
                "{} possible, {} present, {} online",
                registry.num_possible(),
                registry.num_present(),
                registry.num_online(),
            );
            return Ok(());
        }
        NodesAction::Add { nodes } => {
            let targets = nodelist::parse(&nodes, max_nodes)?;
            control.add_nodes(&targets)?;
            println!("added {targets}");
        }
        NodesAction::Del { nodes } => {
            let targets = nodelist::parse(&nodes, max_nodes)?;
            control.remove_nodes(&targets)?;
            println!("removed {targets}");
        }
        NodesAction::Fail { nodes } => {
            let targets = nodelist::parse(&nodes, max_nodes)?;
            control.fail_nodes(&targets)?;
            println!("failed {targets}");
        }
        NodesAction::Poweroff { nodes } => {
            let targets = nodelist::parse(&nodes, max_nodes)?;
            control.poweroff_nodes(&targets)?;
            println!("powered off {targets}");
        }
    }
    commands::persist(cfg, &plane)
}
