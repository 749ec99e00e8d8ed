//! Node list parsing: `7`, `2:4`, and comma-joined combinations.

use anyhow::{Context, bail};

use nodemesh_core::{NodeId, NodeSet};

/// Parse a node list such as `0,2:4,7` into a set bounded by
/// `max_nodes`.
pub fn parse(list: &str, max_nodes: u32) -> anyhow::Result<NodeSet> {
    let mut set = NodeSet::new(max_nodes);
    for item in list.split(',') {
        let item = item.trim();
        if item.is_empty() {
            bail!("empty entry in node list {list:?}");
        }
        match item.split_once(':') {
            Some((lo, hi)) => {
                let lo: NodeId = lo
                    .parse()
                    .with_context(|| format!("bad node id in range {item:?}"))?;
                let hi: NodeId = hi
                    .parse()
                    .with_context(|| format!("bad node id in range {item:?}"))?;
                if lo > hi {
                    bail!("descending range {item:?}");
                }
                for node in lo..=hi {
                    insert(&mut set, node)?;
                }
            }
            None => {
                let node: NodeId = item
                    .parse()
                    .with_context(|| format!("bad node id {item:?}"))?;
                insert(&mut set, node)?;
            }
        }
    }
    Ok(set)
}

// `add` answers false for duplicates and for out-of-range ids alike;
// `contains` tells the two apart.
fn insert(set: &mut NodeSet, node: NodeId) -> anyhow::Result<()> {
    if !set.add(node) && !set.contains(node) {
        bail!("node {node} out of range (max {})", set.max_nodes());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_node() {
        let set = parse("5", 8).unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![5]);
    }

    #[test]
    fn range_of_nodes() {
        let set = parse("2:4", 8).unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn comma_joined_mix() {
        let set = parse("0,2:4,7", 8).unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 2, 3, 4, 7]);
    }

    #[test]
    fn duplicates_collapse() {
        let set = parse("3,3,2:3", 8).unwrap();
        assert_eq!(set.weight(), 2);
    }

    #[test]
    fn out_of_range_is_an_error() {
        assert!(parse("8", 8).is_err());
        assert!(parse("0:9", 8).is_err());
    }

    #[test]
    fn malformed_lists_are_errors() {
        assert!(parse("", 8).is_err());
        assert!(parse("1,,2", 8).is_err());
        assert!(parse("a", 8).is_err());
        assert!(parse("4:2", 8).is_err());
        assert!(parse("1:b", 8).is_err());
    }
}
