//! Label tallies
//!
//! An [`OutcomeCounter`] counts how often each label occurs in a subset of the observations. The
//! split search only ever looks at these counts, never at the raw labels, when it scores a
//! candidate.
use std::collections::HashMap;
use std::iter::FromIterator;

use crate::dataset::{Float, Label};

/// Frequency table of labels
///
/// Remembers the order in which labels were first seen, so that [`most_common`] can break ties
/// deterministically.
///
/// ### Example
///
/// ```rust
/// use infosplit::OutcomeCounter;
///
/// let counter: OutcomeCounter<&str> = vec!["H", "T", "H", "H"].into_iter().collect();
///
/// assert_eq!(counter.most_common(1), vec![(&"H", 3)]);
/// assert!((counter.entropy::<f64>() - 0.811278).abs() < 1e-6);
/// ```
///
/// [`most_common`]: OutcomeCounter::most_common
#[derive(Debug, Clone)]
pub struct OutcomeCounter<L: Label> {
    index: HashMap<L, usize>,
    counts: Vec<(L, usize)>,
    total: usize,
}

impl<L: Label> Default for OutcomeCounter<L> {
    fn default() -> Self {
        OutcomeCounter {
            index: HashMap::new(),
            counts: Vec::new(),
            total: 0,
        }
    }
}

impl<L: Label> OutcomeCounter<L> {
    /// Creates an empty counter
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the count of `label` by one
    pub fn record(&mut self, label: L) {
        match self.index.get(&label) {
            Some(&pos) => self.counts[pos].1 += 1,
            None => {
                self.index.insert(label.clone(), self.counts.len());
                self.counts.push((label, 1));
            }
        }
        self.total += 1;
    }

    /// Number of labels recorded so far
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct labels
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Returns how often `label` was recorded
    pub fn count(&self, label: &L) -> usize {
        self.index
            .get(label)
            .map(|&pos| self.counts[pos].1)
            .unwrap_or(0)
    }

    /// Shannon entropy of the label distribution in bits
    ///
    /// Returns zero for an empty counter and for a counter holding a single label.
    pub fn entropy<F: Float>(&self) -> F {
        shannon_entropy(self.counts.iter().map(|(_, count)| *count), self.total)
    }

    /// Entropy scaled by the number of recorded labels
    ///
    /// Summing this over the buckets of a split and dividing by the number of observations gives
    /// the size weighted average entropy of the split.
    pub fn weighted_entropy<F: Float>(&self) -> F {
        self.entropy::<F>() * F::cast(self.total)
    }

    /// Returns up to `n` pairs of label and count, most frequent first
    ///
    /// Labels with the same count are returned in the order they were first recorded.
    pub fn most_common(&self, n: usize) -> Vec<(&L, usize)> {
        let mut ranked = self
            .counts
            .iter()
            .map(|(label, count)| (label, *count))
            .collect::<Vec<_>>();
        // stable sort keeps first-seen order among equal counts
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);

        ranked
    }

    /// The most frequent label, `None` for an empty counter
    pub fn most_common_label(&self) -> Option<&L> {
        self.most_common(1).into_iter().next().map(|(label, _)| label)
    }

    /// Iterates over `(label, count)` pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&L, usize)> {
        self.counts.iter().map(|(label, count)| (label, *count))
    }
}

/// Entropy in bits of a distribution given by its counts, `total` is the sum of the counts
pub(crate) fn shannon_entropy<F: Float>(counts: impl Iterator<Item = usize>, total: usize) -> F {
    if total == 0 {
        return F::zero();
    }

    let total = F::cast(total);
    counts
        .map(|count| F::cast(count) / total)
        .filter(|p| *p > F::zero())
        .map(|p| -p * p.log2())
        .sum()
}

impl<L: Label> Extend<L> for OutcomeCounter<L> {
    fn extend<I: IntoIterator<Item = L>>(&mut self, iter: I) {
        for label in iter {
            self.record(label);
        }
    }
}

impl<L: Label> FromIterator<L> for OutcomeCounter<L> {
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        let mut counter = OutcomeCounter::new();
        counter.extend(iter);
        counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn entropy_example() {
        let counter = vec![0usize, 0, 0, 0, 0, 0, 1, 1]
            .into_iter()
            .collect::<OutcomeCounter<_>>();

        // Class 0 occurs 75% of the time
        // Class 1 occurs 25% of the time
        // Entropy is -0.75*log2(0.75) - 0.25*log2(0.25) = 0.81127812
        assert_abs_diff_eq!(counter.entropy::<f64>(), 0.81127, epsilon = 1e-5);
        assert_abs_diff_eq!(counter.weighted_entropy::<f64>(), 8. * 0.81127, epsilon = 1e-4);
    }

    #[test]
    fn pure_and_empty_have_zero_entropy() {
        let pure = vec!["H"; 5].into_iter().collect::<OutcomeCounter<_>>();
        assert_eq!(pure.entropy::<f64>(), 0.0);
        assert_eq!(pure.weighted_entropy::<f32>(), 0.0);

        let empty = OutcomeCounter::<bool>::new();
        assert!(empty.is_empty());
        assert_eq!(empty.entropy::<f64>(), 0.0);
        assert_eq!(empty.weighted_entropy::<f64>(), 0.0);
        assert_eq!(empty.most_common_label(), None);
    }

    #[test]
    fn uniform_distribution_has_log2_entropy() {
        let counter = vec!['a', 'b', 'c', 'd']
            .into_iter()
            .collect::<OutcomeCounter<_>>();

        assert_abs_diff_eq!(counter.entropy::<f64>(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn counts_sum_to_total() {
        let mut counter = OutcomeCounter::new();
        for label in &["red", "green", "red", "yellow", "red"] {
            counter.record(*label);
        }

        assert_eq!(counter.total(), 5);
        assert_eq!(counter.len(), 3);
        assert_eq!(counter.count(&"red"), 3);
        assert_eq!(counter.count(&"blue"), 0);
        assert_eq!(counter.iter().map(|(_, c)| c).sum::<usize>(), 5);
    }

    #[test]
    fn most_common_breaks_ties_by_first_seen() {
        let counter = vec![3usize, 1, 2, 1, 3, 2, 4]
            .into_iter()
            .collect::<OutcomeCounter<_>>();

        assert_eq!(
            counter.most_common(4),
            vec![(&3, 2), (&1, 2), (&2, 2), (&4, 1)]
        );
        assert_eq!(counter.most_common(2), vec![(&3, 2), (&1, 2)]);
        assert_eq!(counter.most_common(10).len(), 4);
        assert_eq!(counter.most_common_label(), Some(&3));
    }
}
