//! Utility functions for randomly generating datasets

use infosplit::{AttributeType, Dataset};
use ndarray::{concatenate, Array, Array1, Array2, Axis};
use ndarray_rand::{
    rand::Rng,
    rand_distr::{Bernoulli, Uniform},
    RandomExt,
};

/// Traffic light observations with one continuous and one categorical feature
///
/// Feature `x1` is drawn uniformly from `[0, 1)` and feature `x2` is `0` or `1` with equal
/// probability. The label is
///
/// * `"Green"` if `x1 >= 0.5`
/// * `"Red"` if `x1 < 0.5` and `x2 == 0`
/// * `"Yellow"` if `x1 < 0.5` and `x2 == 1`
///
/// A good split search thresholds `x1` first and separates red from yellow by `x2` afterwards.
pub fn traffic_lights(n: usize, rng: &mut impl Rng) -> Dataset<f64, &'static str> {
    let x1: Array2<f64> = Array::random_using((n, 1), Uniform::new(0., 1.), rng);
    let x2: Array2<f64> = Array::random_using((n, 1), Bernoulli::new(0.5).unwrap(), rng)
        .mapv(|on: bool| if on { 1. } else { 0. });

    let records = concatenate![Axis(1), x1, x2];
    let targets = records
        .rows()
        .into_iter()
        .map(|row| match (row[0] >= 0.5, row[1] == 0.) {
            (true, _) => "Green",
            (false, true) => "Red",
            (false, false) => "Yellow",
        })
        .collect::<Array1<_>>();

    Dataset::new(records, targets)
        .and_then(|dataset| {
            dataset.with_attribute_types(vec![
                AttributeType::Continuous,
                AttributeType::Categorical,
            ])
        })
        .unwrap()
}

/// Two coin flips where only the second categorical feature explains the outcome
///
/// ```text
/// [0, 1] -> "H"
/// [0, 0] -> "T"
/// ```
pub fn coin_flips() -> Dataset<f64, &'static str> {
    Dataset::from_rows(vec![vec![0., 1.], vec![0., 0.]], vec!["H", "T"])
        .and_then(|dataset| dataset.with_attribute_types(vec![AttributeType::Categorical; 2]))
        .unwrap()
}

/// Binary labelled observations with a single informative continuous feature
///
/// The first `noise_features` columns are uniform noise in `[-1, 1)`. The last column is drawn
/// from `[0, 0.4)` for negative and from `[1, 1.4)` for positive observations, so a threshold on
/// it separates the labels perfectly.
pub fn single_informative(
    n: usize,
    noise_features: usize,
    rng: &mut impl Rng,
) -> Dataset<f64, bool> {
    let targets: Array1<bool> = Array::random_using(n, Bernoulli::new(0.5).unwrap(), rng);
    let noise: Array2<f64> = Array::random_using((n, noise_features), Uniform::new(-1., 1.), rng);
    let offset: Array1<f64> = Array::random_using(n, Uniform::new(0., 0.4), rng);

    let informative = (&offset + &targets.mapv(|t| if t { 1. } else { 0. })).insert_axis(Axis(1));
    let records = concatenate![Axis(1), noise, informative];

    Dataset::new(records, targets).unwrap()
}
