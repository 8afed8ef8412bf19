//! infosplit prelude.
//!
//! This module contains the most used types, type aliases, traits and
//! functions that you can import easily as a group.
//!

#[doc(no_inline)]
pub use crate::error::{Error, Result};

#[doc(no_inline)]
pub use crate::dataset::{AttributeType, Dataset, Float, Label};

#[doc(no_inline)]
pub use crate::outcome::OutcomeCounter;

#[doc(no_inline)]
pub use crate::splitter::{
    AttributeSplitter, GreaterThanOrEqualToSplitter, IsEqualSplitter, SingleAttributeSplitter,
    Splitter,
};

#[doc(no_inline)]
pub use crate::{ParamGuard, SplitSearchParams, SplitSearchValidParams};
