use log::debug;
use rand::Rng;

use super::{Dataset, Float, Label};
use crate::error::{Error, Result};

impl<F: Float, L: Label> Dataset<F, L> {
    /// Draw a bootstrap sample of the same size as this dataset
    ///
    /// See [`bootstrap_with_size`](Dataset::bootstrap_with_size).
    pub fn bootstrap<R: Rng>(&self, rng: &mut R) -> Result<Self> {
        self.bootstrap_with_size(self.nsamples(), rng)
    }

    /// Draw `num_samples` observations uniformly with replacement
    ///
    /// The randomness is taken from `rng` only, a seeded generator gives reproducible samples.
    /// Fails with `Error::NotEnoughSamples` if observations are requested from an empty dataset.
    pub fn bootstrap_with_size<R: Rng>(&self, num_samples: usize, rng: &mut R) -> Result<Self> {
        self.check_bootstrap(num_samples)?;

        Ok(self.take(&draw_indices(num_samples, self.nsamples(), rng)))
    }

    /// Endless iterator of bootstrap samples with `num_samples` observations each
    ///
    /// This is the building block of bagging: every item is an independent sample drawn with
    /// replacement.
    ///
    /// ```rust
    /// use infosplit::Dataset;
    /// use ndarray::array;
    /// use rand::{rngs::SmallRng, SeedableRng};
    ///
    /// let dataset = Dataset::new(array![[1.], [2.], [3.]], array![true, false, true]).unwrap();
    /// let mut rng = SmallRng::seed_from_u64(42);
    ///
    /// for sample in dataset.bootstrap_samples(5, &mut rng).unwrap().take(3) {
    ///     assert_eq!(sample.nsamples(), 5);
    /// }
    /// ```
    pub fn bootstrap_samples<'a, R: Rng>(
        &'a self,
        num_samples: usize,
        rng: &'a mut R,
    ) -> Result<impl Iterator<Item = Self> + 'a> {
        self.check_bootstrap(num_samples)?;

        let nsamples = self.nsamples();
        Ok(std::iter::repeat_with(move || {
            self.take(&draw_indices(num_samples, nsamples, rng))
        }))
    }

    fn check_bootstrap(&self, num_samples: usize) -> Result<()> {
        if num_samples > 0 && self.is_empty() {
            return Err(Error::NotEnoughSamples);
        }

        debug!(
            "bootstrapping {} out of {} observations",
            num_samples,
            self.nsamples()
        );
        Ok(())
    }
}

fn draw_indices<R: Rng>(num_samples: usize, nsamples: usize, rng: &mut R) -> Vec<usize> {
    (0..num_samples).map(|_| rng.gen_range(0..nsamples)).collect()
}
