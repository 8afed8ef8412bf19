//! `infosplit-datasets` provides small datasets ready to be used in tests, benchmarks and examples
//! of [`infosplit`].
//!
//! ## Current State
//!
//! Currently the following datasets are provided:
//!
//! * `["tennis"]` : the classic play-tennis table with four categorical attributes
//! * `["generate"]` : randomly generated datasets with a known best split, see [`generate`]
//!
//! ## Using a dataset
//!
//! To use one of the provided datasets in your project add the crate to your Cargo.toml with the
//! corresponding feature enabled:
//! ```ignore
//! infosplit-datasets = { version = "0.1.0", features = ["tennis"] }
//! ```
//! and then use it in your example or tests as
//! ```ignore
//! let dataset = infosplit_datasets::tennis();
//! assert_eq!(dataset.best_attribute(), Some(0));
//! ```

#[cfg(feature = "generate")]
pub mod generate;

#[cfg(feature = "tennis")]
use csv::ReaderBuilder;
#[cfg(feature = "tennis")]
use infosplit::{AttributeType, Dataset};
#[cfg(feature = "tennis")]
use ndarray::prelude::*;
#[cfg(feature = "tennis")]
use ndarray_csv::Array2Reader;

#[cfg(feature = "tennis")]
fn array_from_buf(buf: &[u8]) -> Array2<f64> {
    // create a CSV reader with headers and `,` as delimiter
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b',')
        .from_reader(buf);

    // extract ndarray
    reader.deserialize_array2_dynamic().unwrap()
}

#[cfg(feature = "tennis")]
/// Read in the play-tennis dataset
///
/// All four attributes are categorical and encoded as integers:
///
/// * outlook: sunny `0`, overcast `1`, rain `2`
/// * temperature: hot `0`, mild `1`, cool `2`
/// * humidity: high `0`, normal `1`
/// * wind: weak `0`, strong `1`
///
/// The target is `true` if tennis is played.
pub fn tennis() -> Dataset<f64, bool> {
    let data = include_bytes!("../data/tennis.csv");
    let array = array_from_buf(&data[..]);

    let (data, targets) = (
        array.slice(s![.., 0..4]).to_owned(),
        array.column(4).mapv(|x| x > 0.5),
    );

    Dataset::new(data, targets)
        .and_then(|dataset| dataset.with_attribute_types(vec![AttributeType::Categorical; 4]))
        .unwrap()
}
