//! `infosplit` finds the most informative way to split a labelled dataset.
//!
//! It provides the split search at the heart of ID3 style decision tree learners:
//!
//! * [`OutcomeCounter`] tallies labels and measures their Shannon entropy in bits
//! * [`Splitter`]s partition observations by a predicate over a single feature
//! * [`Dataset`] enumerates candidate splitters, scores them by the weighted entropy of the
//!   partition they induce and selects the best one
//!
//! Continuous features are probed at thresholds spaced by a tenth of their standard deviation,
//! categorical features are probed by an equality test for every observed value.
//!
//! ## Example
//!
//! ```rust
//! use infosplit::{AttributeType, Dataset, Splitter};
//! use ndarray::array;
//!
//! let dataset = Dataset::new(
//!     array![[0.2, 1.], [0.4, 0.], [0.6, 1.], [0.8, 0.]],
//!     array!["red", "red", "green", "green"],
//! )
//! .unwrap()
//! .with_attribute_types(vec![AttributeType::Continuous, AttributeType::Categorical])
//! .unwrap();
//!
//! let splitter = dataset.best_single_attribute_splitter().unwrap();
//! assert_eq!(splitter.feature(), 0);
//! assert_eq!(dataset.splitter_entropy(&splitter), 0.0);
//!
//! for (outcome, child) in dataset.split_on(&splitter) {
//!     println!("{} is {}: {:?}", splitter, outcome, child.most_common_outcome());
//! }
//! ```
//!
//! The search does not build trees itself. Callers recurse on the children returned by
//! [`Dataset::split_on`] until no candidate is left or the entropy vanishes.

pub mod dataset;
pub mod error;
mod hyperparams;
pub mod outcome;
mod param_guard;
pub mod prelude;
pub mod splitter;

pub use dataset::{AttributeType, Dataset, Float, Label, SplitterIter};
pub use error::{Error, Result};
pub use hyperparams::{SplitSearchParams, SplitSearchValidParams};
pub use outcome::OutcomeCounter;
pub use param_guard::ParamGuard;
pub use splitter::{
    AttributeSplitter, GreaterThanOrEqualToSplitter, IsEqualSplitter, SingleAttributeSplitter,
    Splitter,
};

#[cfg(feature = "benchmarks")]
pub mod benchmarks;
