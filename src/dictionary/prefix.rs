//! Sorted prefix index
//!
//! Entry ids ordered by normalized text. Every word sharing a prefix sits in one
//! contiguous run, found with two binary searches.

use super::Entry;

#[derive(Debug, Clone, Default)]
pub struct PrefixIndex {
    sorted: Vec<usize>,
}

impl PrefixIndex {
    pub fn build(entries: &[Entry]) -> Self {
        let mut sorted: Vec<usize> = (0..entries.len()).collect();
        sorted.sort_unstable_by(|&a, &b| entries[a].normalized().cmp(entries[b].normalized()));
        Self { sorted }
    }

    /// Ids of entries starting with the normalized `prefix`, in load order
    pub fn matches(&self, entries: &[Entry], prefix: &str) -> Vec<usize> {
        let start = self
            .sorted
            .partition_point(|&id| entries[id].normalized() < prefix);
        let run = self.sorted[start..]
            .partition_point(|&id| entries[id].normalized().starts_with(prefix));

        let mut ids = self.sorted[start..start + run].to_vec();
        ids.sort_unstable();
        ids
    }
}
