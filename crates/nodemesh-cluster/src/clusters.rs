//! Sub-cluster up/down snapshot.

use nodemesh_core::ClusterId;

/// Point-in-time up/down state of every sub-cluster.
#[derive(Debug, Clone)]
pub struct ClusterView {
    states: Vec<bool>,
}

impl ClusterView {
    pub(crate) fn new(states: Vec<bool>) -> Self {
        Self { states }
    }

    /// Number of sub-cluster identifiers covered by the snapshot.
    pub fn max_clusters(&self) -> u32 {
        self.states.len() as u32
    }

    /// Whether `subcluster` is up. Out-of-range identifiers answer
    /// `false`.
    pub fn is_up(&self, subcluster: ClusterId) -> bool {
        self.states.get(subcluster as usize).copied().unwrap_or(false)
    }

    /// Up/down state of the default sub-cluster 0.
    pub fn is_up_default(&self) -> bool {
        self.is_up(0)
    }

    /// Ascending iterator over the sub-clusters that are up.
    pub fn iter_up(&self) -> impl Iterator<Item = ClusterId> + '_ {
        self.states
            .iter()
            .enumerate()
            .filter(|&(_, &up)| up)
            .map(|(id, _)| id as ClusterId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_up_reads_the_snapshot() {
        let view = ClusterView::new(vec![true, false, true]);
        assert!(view.is_up(0));
        assert!(!view.is_up(1));
        assert!(view.is_up(2));
        assert!(view.is_up_default());
    }

    #[test]
    fn out_of_range_subclusters_are_down() {
        let view = ClusterView::new(vec![true]);
        assert!(!view.is_up(1));
        assert!(!view.is_up(1000));
    }

    #[test]
    fn iter_up_lists_running_subclusters() {
        let view = ClusterView::new(vec![false, true, true, false]);
        let up: Vec<ClusterId> = view.iter_up().collect();
        assert_eq!(up, vec![1, 2]);
    }
}
