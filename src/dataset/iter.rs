use std::cmp::Ordering;
use std::iter::FusedIterator;

use log::trace;
use ndarray::ArrayView1;

use super::{AttributeType, Dataset, Float, Label};
use crate::splitter::{GreaterThanOrEqualToSplitter, IsEqualSplitter, SingleAttributeSplitter};

/// Remaining candidates of the feature column currently enumerated
enum Candidates<F> {
    Exhausted,
    Thresholds {
        feature: usize,
        next: F,
        step: F,
        max: F,
    },
    Values {
        feature: usize,
        values: std::vec::IntoIter<F>,
    },
}

/// Lazy, single pass enumeration of candidate splitters
///
/// Created by [`Dataset::each_single_attribute_splitter`]. Feature columns are visited in index
/// order and the candidates of a column are only computed once the previous column is exhausted.
///
/// * continuous columns yield thresholds `min, min + std / steps, min + 2 * std / steps, ...`
///   strictly below the maximum of the column, columns with a single value are skipped
/// * categorical columns yield one equality test per distinct value in ascending order, columns
///   with less than two distinct values are skipped
pub struct SplitterIter<'a, F, L> {
    dataset: &'a Dataset<F, L>,
    threshold_steps: usize,
    next_feature: usize,
    current: Candidates<F>,
}

impl<'a, F: Float, L: Label> SplitterIter<'a, F, L> {
    pub(crate) fn new(dataset: &'a Dataset<F, L>, threshold_steps: usize) -> Self {
        SplitterIter {
            dataset,
            threshold_steps,
            next_feature: 0,
            current: Candidates::Exhausted,
        }
    }

    fn candidates_for(&self, feature: usize) -> Candidates<F> {
        let column = self.dataset.records().column(feature);

        match self.dataset.attribute_type(feature) {
            AttributeType::Continuous => {
                continuous_candidates(feature, column, self.threshold_steps)
            }
            AttributeType::Categorical => categorical_candidates(feature, column),
        }
    }
}

fn continuous_candidates<F: Float>(
    feature: usize,
    column: ArrayView1<F>,
    threshold_steps: usize,
) -> Candidates<F> {
    if column.is_empty() {
        return Candidates::Exhausted;
    }

    let min = column.fold(F::infinity(), |acc, &x| acc.min(x));
    let max = column.fold(F::neg_infinity(), |acc, &x| acc.max(x));
    if min >= max {
        trace!("skipping constant feature {}", feature);
        return Candidates::Exhausted;
    }

    let step = column.std(F::zero()) / F::cast(threshold_steps);
    if step <= F::zero() || !step.is_finite() {
        trace!("skipping feature {} with degenerate deviation", feature);
        return Candidates::Exhausted;
    }

    Candidates::Thresholds {
        feature,
        next: min,
        step,
        max,
    }
}

fn categorical_candidates<F: Float>(feature: usize, column: ArrayView1<F>) -> Candidates<F> {
    let mut values = column.to_vec();
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    values.dedup();

    if values.len() < 2 {
        trace!("skipping feature {} with a single category", feature);
        return Candidates::Exhausted;
    }

    Candidates::Values {
        feature,
        values: values.into_iter(),
    }
}

impl<'a, F: Float, L: Label> Iterator for SplitterIter<'a, F, L> {
    type Item = SingleAttributeSplitter<F>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match &mut self.current {
                Candidates::Thresholds {
                    feature,
                    next,
                    step,
                    max,
                } => {
                    if *next < *max {
                        let threshold = *next;
                        let advanced = threshold + *step;
                        // stop once the step is lost to rounding
                        *next = if advanced > threshold { advanced } else { *max };

                        return Some(GreaterThanOrEqualToSplitter::new(*feature, threshold).into());
                    }
                }
                Candidates::Values { feature, values } => {
                    if let Some(value) = values.next() {
                        return Some(IsEqualSplitter::new(*feature, value).into());
                    }
                }
                Candidates::Exhausted => {}
            }

            if self.next_feature >= self.dataset.nfeatures() {
                self.current = Candidates::Exhausted;
                return None;
            }

            self.current = self.candidates_for(self.next_feature);
            self.next_feature += 1;
        }
    }
}

impl<'a, F: Float, L: Label> FusedIterator for SplitterIter<'a, F, L> {}
