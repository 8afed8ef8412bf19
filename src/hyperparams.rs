//! Configuration of the split search
//!
use crate::{
    error::{Error, Result},
    ParamGuard,
};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// The checked set of parameters used by
/// [`best_single_attribute_splitter_with`](crate::Dataset::best_single_attribute_splitter_with).
///
/// ### Example
///
/// ```rust
/// use infosplit::{Dataset, ParamGuard, SplitSearchParams};
/// use ndarray::array;
///
/// let params = SplitSearchParams::new().threshold_steps(20).parallel(true).check().unwrap();
///
/// let dataset = Dataset::new(array![[0.1], [0.2], [0.9], [1.0]], array![0usize, 0, 1, 1]).unwrap();
/// let splitter = dataset.best_single_attribute_splitter_with(&params).unwrap();
/// assert_eq!(dataset.splitter_entropy(&splitter), 0.0);
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitSearchValidParams {
    threshold_steps: usize,
    parallel: bool,
}

impl SplitSearchValidParams {
    /// Number of thresholds per standard deviation tried on a continuous feature
    pub fn threshold_steps(&self) -> usize {
        self.threshold_steps
    }

    /// Whether candidates are scored on the rayon thread pool
    pub fn parallel(&self) -> bool {
        self.parallel
    }
}

impl Default for SplitSearchValidParams {
    fn default() -> Self {
        SplitSearchValidParams {
            threshold_steps: 10,
            parallel: false,
        }
    }
}

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitSearchParams(SplitSearchValidParams);

impl SplitSearchParams {
    /// Defaults are provided if the optional parameters are not specified:
    /// * `threshold_steps = 10`
    /// * `parallel = false`
    pub fn new() -> Self {
        Self(SplitSearchValidParams::default())
    }

    /// Sets the number of thresholds per standard deviation
    ///
    /// Continuous features are probed at `min + k * std / threshold_steps` for all `k` that stay
    /// below the maximum of the feature.
    pub fn threshold_steps(mut self, threshold_steps: usize) -> Self {
        self.0.threshold_steps = threshold_steps;
        self
    }

    /// Score the candidate splitters in parallel
    ///
    /// The selected splitter is the same as for the sequential search.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.0.parallel = parallel;
        self
    }
}

impl Default for SplitSearchParams {
    fn default() -> Self {
        Self::new()
    }
}

impl ParamGuard for SplitSearchParams {
    type Checked = SplitSearchValidParams;
    type Error = Error;

    fn check_ref(&self) -> Result<&Self::Checked> {
        if self.0.threshold_steps == 0 {
            Err(Error::Parameters(
                "Number of threshold steps should be greater than zero".to_string(),
            ))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = SplitSearchParams::default().check().unwrap();

        assert_eq!(params.threshold_steps(), 10);
        assert!(!params.parallel());
        assert_eq!(params, SplitSearchValidParams::default());
    }

    #[test]
    #[should_panic]
    fn panic_zero_threshold_steps() {
        SplitSearchParams::new().threshold_steps(0).check_unwrap();
    }

    #[test]
    fn zero_threshold_steps_is_parameter_error() {
        let err = SplitSearchParams::new()
            .threshold_steps(0)
            .check_ref()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "invalid parameter Number of threshold steps should be greater than zero"
        );
    }
}
