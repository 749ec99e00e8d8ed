//! End-to-end membership flows over the simulated control plane.
//!
//! Exercises the full client surface in-process: boot a sub-cluster,
//! grow it, observe registry snapshots, declare failures, and shut it
//! down again.

use std::sync::Arc;

use nodemesh_cluster::{MeshClient, MeshError, SimControlPlane};
use nodemesh_core::{ClusterLimits, NodeId, NodeSet, NodeStatus};

fn seeded_client(present: &[NodeId]) -> MeshClient {
    let plane = SimControlPlane::new(ClusterLimits::new(16, 2));
    for &node in present {
        plane.set_status(node, NodeStatus::Present).unwrap();
    }
    MeshClient::init(Arc::new(plane)).unwrap()
}

fn targets(client: &MeshClient, ids: &[NodeId]) -> NodeSet {
    NodeSet::from_ids(client.limits().max_nodes, ids.iter().copied())
}

#[test]
fn boot_grow_fail_shutdown() {
    let client = seeded_client(&[0, 1, 2, 3]);
    let control = client.control();

    // Boot sub-cluster 0 from two of the present nodes.
    control.start(&targets(&client, &[0, 1]), 0).unwrap();
    assert!(client.clusters().unwrap().is_up(0));

    let registry = client.nodes().unwrap();
    assert_eq!(registry.num_online(), 2);
    assert_eq!(registry.num_present(), 2);

    // Grow the cluster by the remaining present nodes.
    control.add_nodes(&registry.present_set()).unwrap();
    let registry = client.nodes().unwrap();
    assert_eq!(registry.num_online(), 4);
    let online: Vec<NodeId> = registry.iter_online().collect();
    assert_eq!(online, vec![0, 1, 2, 3]);

    // One node fails, one is removed deliberately.
    control.fail_nodes(&targets(&client, &[3])).unwrap();
    control.remove_nodes(&targets(&client, &[2])).unwrap();
    let registry = client.nodes().unwrap();
    assert_eq!(registry.num_online(), 2);
    assert!(registry.is_present(2));
    assert!(registry.is_present(3));

    // Shut the sub-cluster down; nothing stays online.
    control.shutdown(0).unwrap();
    assert!(!client.clusters().unwrap().is_up(0));
    assert_eq!(client.nodes().unwrap().num_online(), 0);
}

#[test]
fn freshly_started_subcluster_reports_up_until_shutdown() {
    let client = seeded_client(&[0]);
    let control = client.control();

    control.start(&targets(&client, &[0]), 0).unwrap();
    assert!(client.clusters().unwrap().is_up(0));

    control.shutdown(0).unwrap();
    assert!(!client.clusters().unwrap().is_up(0));
}

#[test]
fn registry_snapshot_is_point_in_time() {
    let client = seeded_client(&[0, 1]);
    let control = client.control();

    let before = client.nodes().unwrap();
    control.start(&targets(&client, &[0, 1]), 0).unwrap();

    // The earlier snapshot still shows the pre-start state.
    assert_eq!(before.num_online(), 0);
    assert_eq!(client.nodes().unwrap().num_online(), 2);
}

#[test]
fn command_errors_name_the_operation() {
    let client = seeded_client(&[]);
    let control = client.control();

    let err = control
        .add_nodes(&targets(&client, &[5]))
        .unwrap_err();
    match &err {
        MeshError::Command { op, .. } => assert_eq!(*op, "add_nodes"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("add_nodes"));
    assert!(err.to_string().contains("5"));
}

#[test]
fn materialized_sets_drive_commands() {
    let client = seeded_client(&[1, 4, 9]);
    let control = client.control();

    let present = client.nodes().unwrap().present_set();
    assert_eq!(present.weight(), 3);
    control.start(&present, 0).unwrap();

    let online = client.nodes().unwrap().online_set();
    assert!(online.contains(4));
    assert_eq!(online.weight(), 3);
}
