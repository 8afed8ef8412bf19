use std::sync::Arc;

use ndarray::{Array1, Array2, ArrayView1, Axis};

use super::{AttributeType, Dataset, Float, Label};
use crate::error::{Error, Result};
use crate::outcome::OutcomeCounter;

impl<F: Float, L: Label> Dataset<F, L> {
    /// Create a new dataset from records and targets
    ///
    /// All feature columns are treated as continuous. Fails if the number of targets does not
    /// match the number of rows.
    pub fn new(records: Array2<F>, targets: Array1<L>) -> Result<Self> {
        let attribute_types = vec![AttributeType::Continuous; records.ncols()];

        Self::with_shared_types(records, targets, attribute_types.into())
    }

    /// Create a new dataset from a list of rows and their labels
    ///
    /// All feature columns are treated as continuous. Every row has to contain the same number of
    /// values.
    pub fn from_rows(rows: Vec<Vec<F>>, labels: Vec<L>) -> Result<Self> {
        let nfeatures = rows.first().map(|row| row.len()).unwrap_or(0);
        if let Some((row, values)) = rows
            .iter()
            .enumerate()
            .find(|(_, values)| values.len() != nfeatures)
        {
            return Err(Error::RaggedRow {
                row,
                expected: nfeatures,
                found: values.len(),
            });
        }

        let nsamples = rows.len();
        let values = rows.into_iter().flatten().collect::<Vec<_>>();
        let records = Array2::from_shape_vec((nsamples, nfeatures), values)?;

        Self::new(records, Array1::from(labels))
    }

    /// Replace the attribute types of this dataset
    ///
    /// Fails if the number of types does not match the number of feature columns.
    pub fn with_attribute_types(self, attribute_types: Vec<AttributeType>) -> Result<Self> {
        Self::with_shared_types(self.records, self.targets, attribute_types.into())
    }

    fn with_shared_types(
        records: Array2<F>,
        targets: Array1<L>,
        attribute_types: Arc<[AttributeType]>,
    ) -> Result<Self> {
        if records.nrows() != targets.len() {
            return Err(Error::LabelCount {
                rows: records.nrows(),
                labels: targets.len(),
            });
        }

        if records.ncols() != attribute_types.len() {
            return Err(Error::AttributeTypeCount {
                features: records.ncols(),
                types: attribute_types.len(),
            });
        }

        Ok(Dataset {
            records,
            targets,
            attribute_types,
        })
    }

    /// Build a new dataset with the same attribute types as this one
    ///
    /// The new records have to keep the number of feature columns and have one target per row.
    pub fn derive(&self, records: Array2<F>, targets: Array1<L>) -> Result<Self> {
        Self::with_shared_types(records, targets, Arc::clone(&self.attribute_types))
    }

    /// Select the observations at `indices`
    ///
    /// Indices may repeat, the resulting dataset contains the rows in the order given. The
    /// attribute types are shared with `self`.
    ///
    /// ### Panics
    ///
    /// If any index is out of bounds
    pub fn take(&self, indices: &[usize]) -> Self {
        Dataset {
            records: self.records.select(Axis(0), indices),
            targets: self.targets.select(Axis(0), indices),
            attribute_types: Arc::clone(&self.attribute_types),
        }
    }

    /// Return a reference to the feature matrix
    pub fn records(&self) -> &Array2<F> {
        &self.records
    }

    /// Return a reference to the labels
    pub fn targets(&self) -> &Array1<L> {
        &self.targets
    }

    pub fn attribute_types(&self) -> &[AttributeType] {
        &self.attribute_types
    }

    /// Return the type of feature column `feature`
    ///
    /// ### Panics
    ///
    /// If `feature` is out of bounds
    pub fn attribute_type(&self, feature: usize) -> AttributeType {
        self.attribute_types[feature]
    }

    /// Returns true if both datasets share the same attribute type allocation
    pub fn shares_attribute_types(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.attribute_types, &other.attribute_types)
    }

    pub fn nsamples(&self) -> usize {
        self.records.nrows()
    }

    pub fn nfeatures(&self) -> usize {
        self.records.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.nsamples() == 0
    }

    /// Iterate over observations and their labels
    pub fn sample_iter(&self) -> impl Iterator<Item = (ArrayView1<'_, F>, &L)> {
        self.records.rows().into_iter().zip(self.targets.iter())
    }

    /// Tally the labels of all observations
    pub fn outcomes(&self) -> OutcomeCounter<L> {
        self.targets.iter().cloned().collect()
    }

    /// Returns up to `n` labels with their counts, most frequent first
    pub fn most_common_outcomes(&self, n: usize) -> Vec<(L, usize)> {
        self.outcomes()
            .most_common(n)
            .into_iter()
            .map(|(label, count)| (label.clone(), count))
            .collect()
    }

    /// The most frequent label, `None` for an empty dataset
    ///
    /// If two labels occur equally often, the one observed first wins.
    pub fn most_common_outcome(&self) -> Option<L> {
        self.most_common_outcomes(1)
            .into_iter()
            .next()
            .map(|(label, _)| label)
    }
}
