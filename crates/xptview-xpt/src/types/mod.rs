//! Core types for decoded XPT data.
//!
//! Every entity here is a flat, acyclic value constructed once during a
//! parse pass and immutable thereafter.

mod column;
mod dataset;
mod missing;
mod value;

pub use column::{XptColumn, XptType};
pub use dataset::{PREVIEW_ROWS, XptDataset, XptFile};
pub use missing::MissingValue;
pub use value::{NumericValue, XptValue};
