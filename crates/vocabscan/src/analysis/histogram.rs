//! # Token Length Histogram

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Map of ``{ length -> count }``, lengths in chars.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthHistogram {
    counts: BTreeMap<usize, usize>,
}

impl FromIterator<usize> for LengthHistogram {
    fn from_iter<I: IntoIterator<Item = usize>>(lengths: I) -> Self {
        let mut hist = Self::default();
        for length in lengths {
            hist.record(length);
        }
        hist
    }
}

impl LengthHistogram {
    /// Tally one occurrence of `length`.
    pub fn record(
        &mut self,
        length: usize,
    ) {
        *self.counts.entry(length).or_default() += 1;
    }

    /// The number of occurrences of `length`.
    pub fn count(
        &self,
        length: usize,
    ) -> usize {
        self.counts.get(&length).copied().unwrap_or_default()
    }

    /// The total number of recorded occurrences.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// The longest recorded length.
    pub fn max_length(&self) -> Option<usize> {
        self.counts.keys().next_back().copied()
    }

    /// The largest single bucket count.
    pub fn max_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or_default()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over ``(length, count)`` buckets in ascending length order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().map(|(&length, &count)| (length, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram() {
        let hist: LengthHistogram = [1, 3, 3, 2, 3, 1].into_iter().collect();

        assert_eq!(hist.count(1), 2);
        assert_eq!(hist.count(2), 1);
        assert_eq!(hist.count(3), 3);
        assert_eq!(hist.count(4), 0);
        assert_eq!(hist.total(), 6);
        assert_eq!(hist.max_length(), Some(3));
        assert_eq!(hist.max_count(), 3);
        assert_eq!(hist.iter().collect::<Vec<_>>(), vec![(1, 2), (2, 1), (3, 3)]);
    }

    #[test]
    fn test_empty_histogram() {
        let hist = LengthHistogram::default();
        assert!(hist.is_empty());
        assert_eq!(hist.total(), 0);
        assert_eq!(hist.max_length(), None);
        assert_eq!(hist.max_count(), 0);
    }
}
