//! Error types in infosplit
//!

use thiserror::Error;

use ndarray::ShapeError;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("invalid parameter {0}")]
    Parameters(String),
    #[error("number of labels ({labels}) does not match number of rows ({rows})")]
    LabelCount { rows: usize, labels: usize },
    #[error("number of attribute types ({types}) does not match number of features ({features})")]
    AttributeTypeCount { features: usize, types: usize },
    #[error("row {row} has {found} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid ndarray shape {0}")]
    NdShape(#[from] ShapeError),
    #[error("Not enough samples to draw a bootstrap sample")]
    NotEnoughSamples,
}
