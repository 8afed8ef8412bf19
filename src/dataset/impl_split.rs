use std::collections::{BTreeMap, HashMap};

use log::{debug, trace};
use rayon::prelude::*;

use super::{Dataset, Float, Label, SplitterIter};
use crate::hyperparams::SplitSearchValidParams;
use crate::outcome::shannon_entropy;
use crate::splitter::{AttributeSplitter, SingleAttributeSplitter, Splitter};

impl<F: Float, L: Label> Dataset<F, L> {
    /// Enumerate the candidate splitters of this dataset
    ///
    /// Continuous features are probed at ten thresholds per standard deviation, starting at the
    /// minimum of the feature. See [`SplitterIter`] for details.
    pub fn each_single_attribute_splitter(&self) -> SplitterIter<'_, F, L> {
        self.each_single_attribute_splitter_with(&SplitSearchValidParams::default())
    }

    /// Enumerate the candidate splitters with a custom number of threshold steps
    pub fn each_single_attribute_splitter_with(
        &self,
        params: &SplitSearchValidParams,
    ) -> SplitterIter<'_, F, L> {
        SplitterIter::new(self, params.threshold_steps())
    }

    /// Size weighted average entropy of the partition induced by `splitter`
    ///
    /// Every bucket contributes its entropy times its number of observations, the sum is divided
    /// by the number of observations in the dataset. The result is zero if and only if all
    /// observations in every bucket share the same label. An empty dataset has zero entropy.
    pub fn splitter_entropy<S: Splitter<F>>(&self, splitter: &S) -> F {
        if self.is_empty() {
            return F::zero();
        }

        let weighted = self
            .bucket_counts(splitter)
            .values()
            .map(|counts| {
                let size = counts.values().sum::<usize>();
                shannon_entropy::<F>(counts.values().copied(), size) * F::cast(size)
            })
            .sum::<F>();

        weighted / F::cast(self.nsamples())
    }

    /// Label counts per outcome of `splitter`, labels are tallied by reference
    fn bucket_counts<S: Splitter<F>>(
        &self,
        splitter: &S,
    ) -> BTreeMap<S::Outcome, HashMap<&L, usize>> {
        let mut buckets: BTreeMap<S::Outcome, HashMap<&L, usize>> = BTreeMap::new();
        for (row, label) in self.sample_iter() {
            *buckets
                .entry(splitter.split(row))
                .or_default()
                .entry(label)
                .or_insert(0) += 1;
        }

        buckets
    }

    /// Find the candidate splitter with the lowest entropy
    ///
    /// Returns `None` if there is no candidate, i.e. every continuous feature is constant and
    /// every categorical feature has less than two values. The caller should then treat the
    /// dataset as a leaf. If several candidates reach the same entropy the first one enumerated
    /// wins.
    pub fn best_single_attribute_splitter(&self) -> Option<SingleAttributeSplitter<F>> {
        self.best_single_attribute_splitter_with(&SplitSearchValidParams::default())
    }

    /// Find the candidate splitter with the lowest entropy using the given parameters
    ///
    /// With `parallel` enabled the candidates are collected first and scored on the rayon thread
    /// pool. The scores keep the enumeration order, so the selected splitter does not depend on
    /// the search mode.
    pub fn best_single_attribute_splitter_with(
        &self,
        params: &SplitSearchValidParams,
    ) -> Option<SingleAttributeSplitter<F>> {
        let candidates = self.each_single_attribute_splitter_with(params);

        let best = if params.parallel() {
            let candidates = candidates.collect::<Vec<_>>();
            let scores = candidates
                .par_iter()
                .map(|splitter| self.splitter_entropy(splitter))
                .collect::<Vec<_>>();

            debug!(
                "scored {} candidates over {} features in parallel",
                candidates.len(),
                self.nfeatures()
            );
            first_minimum(candidates.into_iter().zip(scores))
        } else {
            first_minimum(candidates.map(|splitter| {
                let entropy = self.splitter_entropy(&splitter);
                (splitter, entropy)
            }))
        };

        match &best {
            Some((splitter, entropy)) => {
                debug!("best splitter {} with entropy {}", splitter, entropy)
            }
            None => debug!("no candidate splitter among {} features", self.nfeatures()),
        }

        best.map(|(splitter, _)| splitter)
    }

    /// Partition the observations by the outcome of `splitter`
    ///
    /// Returns one dataset for every outcome observed, ordered by outcome (`false` before `true`
    /// for binary splitters). Every observation ends up in exactly one child and keeps its
    /// relative order. The children share the attribute types of `self`.
    pub fn split_on<S: Splitter<F>>(&self, splitter: &S) -> Vec<(S::Outcome, Self)> {
        let mut groups: BTreeMap<S::Outcome, Vec<usize>> = BTreeMap::new();
        for (idx, row) in self.records().rows().into_iter().enumerate() {
            groups.entry(splitter.split(row)).or_default().push(idx);
        }

        groups
            .into_iter()
            .map(|(outcome, indices)| (outcome, self.take(&indices)))
            .collect()
    }

    /// Multi-way splitter over all values observed for `attribute`
    ///
    /// ### Panics
    ///
    /// If `attribute` is out of bounds
    pub fn attribute_splitter(&self, attribute: usize) -> AttributeSplitter<F> {
        AttributeSplitter::new(attribute, self.records().column(attribute).to_vec())
    }

    /// Sum of the label entropies of the buckets with one bucket per value of `attribute`
    ///
    /// Buckets are not weighted by their size, every observed value contributes the entropy of
    /// its labels. Use `splitter_entropy(&attribute_splitter(attribute))` for the size weighted
    /// average instead.
    ///
    /// ### Panics
    ///
    /// If `attribute` is out of bounds
    pub fn entropy_of(&self, attribute: usize) -> F {
        self.bucket_counts(&self.attribute_splitter(attribute))
            .values()
            .map(|counts| shannon_entropy::<F>(counts.values().copied(), counts.values().sum()))
            .sum()
    }

    /// The attribute with the lowest [`entropy_of`](Dataset::entropy_of)
    ///
    /// Returns `None` for a dataset without features.
    pub fn best_attribute(&self) -> Option<usize> {
        let attributes = (0..self.nfeatures()).collect::<Vec<_>>();
        self.best_attribute_among(&attributes)
    }

    /// The attribute out of `attributes` with the lowest [`entropy_of`](Dataset::entropy_of)
    ///
    /// The first attribute wins ties. Returns `None` if `attributes` is empty.
    ///
    /// ### Panics
    ///
    /// If any attribute is out of bounds
    pub fn best_attribute_among(&self, attributes: &[usize]) -> Option<usize> {
        first_minimum(
            attributes
                .iter()
                .map(|&attribute| (attribute, self.entropy_of(attribute))),
        )
        .map(|(attribute, _)| attribute)
    }
}

/// Returns the first item with the lowest score
fn first_minimum<T: std::fmt::Display, F: Float>(
    scored: impl Iterator<Item = (T, F)>,
) -> Option<(T, F)> {
    scored.fold(None, |best, (item, score)| {
        trace!("candidate {} has entropy {}", item, score);
        match best {
            Some((_, best_score)) if best_score <= score => best,
            _ => Some((item, score)),
        }
    })
}
