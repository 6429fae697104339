//! Naive partition oracle.
//!
//! Tracks an explicit group label per element and relabels a whole group on
//! every merge. Quadratic, obviously correct, and independent of any forest.

/// Partition produced by replaying unions with explicit relabelling.
#[derive(Clone, Debug)]
pub(super) struct OraclePartition {
    labels: Vec<usize>,
}

impl OraclePartition {
    pub(super) fn replay(node_count: usize, unions: &[(usize, usize)]) -> Self {
        let mut labels: Vec<usize> = (0..node_count).collect();
        for &(left, right) in unions {
            let from = labels[left];
            let to = labels[right];
            if from == to {
                continue;
            }
            for label in &mut labels {
                if *label == from {
                    *label = to;
                }
            }
        }
        Self { labels }
    }

    pub(super) fn connected(&self, left: usize, right: usize) -> bool {
        self.labels[left] == self.labels[right]
    }

    /// Groups as ascending index lists ordered by smallest member.
    pub(super) fn groups(&self) -> Vec<Vec<usize>> {
        let mut groups: Vec<Vec<usize>> = Vec::new();
        let mut slot_of_label: Vec<Option<usize>> = vec![None; self.labels.len()];
        for (index, &label) in self.labels.iter().enumerate() {
            let slot = *slot_of_label[label].get_or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[slot].push(index);
        }
        groups
    }

    pub(super) fn group_size(&self, index: usize) -> usize {
        let label = self.labels[index];
        self.labels.iter().filter(|&&other| other == label).count()
    }
}
