use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod nodelist;

#[derive(Parser)]
#[command(
    name = "meshadm",
    about = "nodemesh — cluster node membership administration",
    version,
    propagate_version = true,
)]
struct Cli {
    /// Path to the meshadm config file.
    #[arg(long, default_value = "meshadm.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sub-cluster management
    Cluster {
        #[command(subcommand)]
        action: ClusterAction,
    },
    /// Node membership management
    Nodes {
        #[command(subcommand)]
        action: NodesAction,
    },
}

#[derive(Subcommand)]
pub enum ClusterAction {
    /// Show which sub-clusters are up
    Status,
    /// Boot a sub-cluster
    Start {
        /// Nodes to boot from, e.g. "0,2:4" (default: every present node)
        #[arg(short, long)]
        nodes: Option<String>,
        /// Sub-cluster id
        #[arg(short, long, default_value = "0")]
        subcluster: u32,
    },
    /// Shut a sub-cluster down
    Shutdown {
        /// Sub-cluster id
        #[arg(short, long, default_value = "0")]
        subcluster: u32,
    },
    /// Reboot a sub-cluster
    Reboot {
        /// Sub-cluster id
        #[arg(short, long, default_value = "0")]
        subcluster: u32,
    },
}

#[derive(Subcommand)]
pub enum NodesAction {
    /// List every known node with its status
    Status,
    /// Bring present nodes online
    Add {
        /// Target nodes, e.g. "0,2:4"
        #[arg(short, long)]
        nodes: String,
    },
    /// Take online nodes out of the cluster
    Del {
        /// Target nodes, e.g. "0,2:4"
        #[arg(short, long)]
        nodes: String,
    },
    /// Declare nodes failed
    Fail {
        /// Target nodes, e.g. "0,2:4"
        #[arg(short, long)]
        nodes: String,
    },
    /// Power nodes off
    Poweroff {
        /// Target nodes, e.g. "0,2:4"
        #[arg(short, long)]
        nodes: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("meshadm=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let cfg = config::MeshConfig::load(&cli.config)?;

    match cli.command {
        Commands::Cluster { action } => commands::cluster::run(&cfg, action),
        Commands::Nodes { action } => commands::nodes::run(&cfg, action),
    }
}
