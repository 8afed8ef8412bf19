//! Datasets
//!
//! This module implements the dataset struct together with the candidate enumeration, the
//! entropy based scoring of splitters and the partitioning and resampling operations that feed
//! recursive tree construction.
use ndarray::{Array1, Array2, ScalarOperand};

use num_traits::{FromPrimitive, NumAssignOps, NumCast};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use std::cmp::PartialOrd;
use std::fmt;
use std::hash::Hash;
use std::iter::Sum;
use std::sync::Arc;

mod impl_dataset;
mod impl_resample;
mod impl_split;
mod iter;

pub use iter::SplitterIter;

/// Floating point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point number and
/// implement them for 32bit and 64bit floating points. They are used for the feature values of a
/// dataset and for the entropies computed over it.
pub trait Float:
    FromPrimitive
    + num_traits::Float
    + PartialOrd
    + Sync
    + Send
    + Default
    + fmt::Display
    + fmt::Debug
    + Sum
    + NumAssignOps
    + ScalarOperand
    + approx::AbsDiffEq
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}

impl Float for f64 {}

/// Discrete labels
///
/// Labels are countable, comparable and hashable. Currently boolean (binary task), integers,
/// characters and strings (multi-label tasks) are supported.
pub trait Label: PartialEq + Eq + Hash + Clone + Send + Sync {}

impl Label for bool {}
impl Label for usize {}
impl Label for u8 {}
impl Label for u16 {}
impl Label for u32 {}
impl Label for u64 {}
impl Label for isize {}
impl Label for i8 {}
impl Label for i16 {}
impl Label for i32 {}
impl Label for i64 {}
impl Label for char {}
impl Label for String {}
impl Label for &str {}
impl Label for Option<usize> {}

/// How the values of a feature column are interpreted
///
/// Continuous columns are split with thresholds (`x[i] >= v`), categorical columns with equality
/// tests against each observed value (`x[i] == v`).
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeType {
    Continuous,
    Categorical,
}

impl Default for AttributeType {
    fn default() -> Self {
        AttributeType::Continuous
    }
}

/// Dataset
///
/// A labeled feature matrix together with the type of every feature column. A dataset is never
/// modified after construction: splitting, taking rows and bootstrapping all produce new
/// datasets which share the attribute types of their parent.
///
/// # Fields
///
/// * `records`: a two-dimensional matrix with dimensionality (nsamples, nfeatures)
/// * `targets`: the label of every observation with dimensionality (nsamples)
/// * `attribute_types`: the type of every feature column with dimensionality (nfeatures)
///
/// # Example
///
/// ```rust
/// use infosplit::{AttributeType, Dataset};
/// use ndarray::array;
///
/// let dataset = Dataset::new(array![[0., 1.], [0., 0.]], array!["H", "T"])
///     .unwrap()
///     .with_attribute_types(vec![AttributeType::Categorical; 2])
///     .unwrap();
///
/// let splitter = dataset.best_single_attribute_splitter().unwrap();
/// assert_eq!(splitter.to_string(), "x[1] == 0");
/// assert_eq!(dataset.splitter_entropy(&splitter), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Dataset<F, L> {
    records: Array2<F>,
    targets: Array1<L>,
    attribute_types: Arc<[AttributeType]>,
}
