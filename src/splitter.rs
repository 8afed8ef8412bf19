//! Splitters
//!
//! A splitter is a predicate over a single feature of an observation. Applying it to every row of
//! a dataset partitions the rows into buckets, one per distinct outcome. The dataset only relies
//! on the [`Splitter`] capability and never on a concrete variant.
use std::fmt;

use ndarray::ArrayView1;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::dataset::Float;

/// Capability shared by all splitters
pub trait Splitter<F: Float>: fmt::Display {
    /// Bucket key an observation is assigned to
    type Outcome: Ord + Clone + fmt::Debug;

    /// Index of the feature this splitter looks at
    fn feature(&self) -> usize;

    /// Evaluate the splitter for a single observation
    ///
    /// ### Panics
    ///
    /// If the observation has no value for `self.feature()`
    fn split(&self, row: ArrayView1<F>) -> Self::Outcome;

    /// Human readable description, e.g. `x[2] >= 0.5`
    fn describe(&self) -> String {
        self.to_string()
    }
}

/// Threshold test `x[i] >= v` for continuous features
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreaterThanOrEqualToSplitter<F> {
    feature: usize,
    threshold: F,
}

impl<F: Float> GreaterThanOrEqualToSplitter<F> {
    pub fn new(feature: usize, threshold: F) -> Self {
        GreaterThanOrEqualToSplitter { feature, threshold }
    }

    pub fn threshold(&self) -> F {
        self.threshold
    }
}

impl<F: Float> Splitter<F> for GreaterThanOrEqualToSplitter<F> {
    type Outcome = bool;

    fn feature(&self) -> usize {
        self.feature
    }

    fn split(&self, row: ArrayView1<F>) -> bool {
        row[self.feature] >= self.threshold
    }
}

impl<F: Float> fmt::Display for GreaterThanOrEqualToSplitter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x[{}] >= {}", self.feature, self.threshold)
    }
}

/// Equality test `x[i] == v` for categorical features
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsEqualSplitter<F> {
    feature: usize,
    value: F,
}

impl<F: Float> IsEqualSplitter<F> {
    pub fn new(feature: usize, value: F) -> Self {
        IsEqualSplitter { feature, value }
    }

    pub fn value(&self) -> F {
        self.value
    }
}

impl<F: Float> Splitter<F> for IsEqualSplitter<F> {
    type Outcome = bool;

    fn feature(&self) -> usize {
        self.feature
    }

    fn split(&self, row: ArrayView1<F>) -> bool {
        row[self.feature] == self.value
    }
}

impl<F: Float> fmt::Display for IsEqualSplitter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x[{}] == {}", self.feature, self.value)
    }
}

/// A binary splitter over a single attribute
///
/// This is what the candidate enumeration of a [`Dataset`](crate::Dataset) yields: a threshold
/// test for continuous columns and an equality test for categorical columns.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SingleAttributeSplitter<F> {
    GreaterThanOrEqualTo(GreaterThanOrEqualToSplitter<F>),
    IsEqual(IsEqualSplitter<F>),
}

impl<F: Float> SingleAttributeSplitter<F> {
    /// The threshold or reference value of the splitter
    pub fn value(&self) -> F {
        match self {
            SingleAttributeSplitter::GreaterThanOrEqualTo(s) => s.threshold(),
            SingleAttributeSplitter::IsEqual(s) => s.value(),
        }
    }
}

impl<F: Float> Splitter<F> for SingleAttributeSplitter<F> {
    type Outcome = bool;

    fn feature(&self) -> usize {
        match self {
            SingleAttributeSplitter::GreaterThanOrEqualTo(s) => s.feature(),
            SingleAttributeSplitter::IsEqual(s) => s.feature(),
        }
    }

    fn split(&self, row: ArrayView1<F>) -> bool {
        match self {
            SingleAttributeSplitter::GreaterThanOrEqualTo(s) => s.split(row),
            SingleAttributeSplitter::IsEqual(s) => s.split(row),
        }
    }
}

impl<F: Float> fmt::Display for SingleAttributeSplitter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SingleAttributeSplitter::GreaterThanOrEqualTo(s) => fmt::Display::fmt(s, f),
            SingleAttributeSplitter::IsEqual(s) => fmt::Display::fmt(s, f),
        }
    }
}

impl<F> From<GreaterThanOrEqualToSplitter<F>> for SingleAttributeSplitter<F> {
    fn from(splitter: GreaterThanOrEqualToSplitter<F>) -> Self {
        SingleAttributeSplitter::GreaterThanOrEqualTo(splitter)
    }
}

impl<F> From<IsEqualSplitter<F>> for SingleAttributeSplitter<F> {
    fn from(splitter: IsEqualSplitter<F>) -> Self {
        SingleAttributeSplitter::IsEqual(splitter)
    }
}

/// Multi-way splitter with one bucket per value of a categorical attribute
///
/// The outcome of an observation is the position of its value in the sorted list of known
/// values. Values that were not known when the splitter was built all share the bucket
/// `values().len()`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSplitter<F> {
    feature: usize,
    values: Vec<F>,
}

impl<F: Float> AttributeSplitter<F> {
    /// Creates a splitter over `feature` with the given known values
    ///
    /// The values are sorted and deduplicated.
    pub fn new(feature: usize, mut values: Vec<F>) -> Self {
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        values.dedup();

        AttributeSplitter { feature, values }
    }

    pub fn values(&self) -> &[F] {
        &self.values
    }
}

impl<F: Float> Splitter<F> for AttributeSplitter<F> {
    type Outcome = usize;

    fn feature(&self) -> usize {
        self.feature
    }

    fn split(&self, row: ArrayView1<F>) -> usize {
        let value = row[self.feature];
        self.values
            .iter()
            .position(|known| *known == value)
            .unwrap_or(self.values.len())
    }
}

impl<F: Float> fmt::Display for AttributeSplitter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x[{}]", self.feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn threshold_splitter() {
        let splitter = GreaterThanOrEqualToSplitter::new(1, 0.5);

        assert!(splitter.split(array![0., 0.5].view()));
        assert!(splitter.split(array![0., 0.7].view()));
        assert!(!splitter.split(array![1., 0.2].view()));
        assert_eq!(splitter.describe(), "x[1] >= 0.5");
    }

    #[test]
    fn equality_splitter() {
        let splitter = IsEqualSplitter::new(0, 2.0f32);

        assert!(splitter.split(array![2., 0.].view()));
        assert!(!splitter.split(array![2.5, 0.].view()));
        assert_eq!(splitter.to_string(), "x[0] == 2");
    }

    #[test]
    fn single_attribute_splitter_delegates() {
        let splitter: SingleAttributeSplitter<f64> = IsEqualSplitter::new(2, 1.).into();

        assert_eq!(splitter.feature(), 2);
        assert_eq!(splitter.value(), 1.);
        assert!(splitter.split(array![0., 0., 1.].view()));
        assert_eq!(splitter.to_string(), "x[2] == 1");

        let splitter: SingleAttributeSplitter<f64> =
            GreaterThanOrEqualToSplitter::new(0, -1.25).into();
        assert!(!splitter.split(array![-2., 0., 1.].view()));
        assert_eq!(splitter.to_string(), "x[0] >= -1.25");
    }

    #[test]
    fn attribute_splitter_buckets() {
        let splitter = AttributeSplitter::new(0, vec![2., 0., 1., 2.]);

        assert_eq!(splitter.values(), &[0., 1., 2.]);
        assert_eq!(splitter.split(array![0.].view()), 0);
        assert_eq!(splitter.split(array![2.].view()), 2);
        assert_eq!(splitter.split(array![7.].view()), 3);
        assert_eq!(splitter.to_string(), "x[0]");
    }
}
