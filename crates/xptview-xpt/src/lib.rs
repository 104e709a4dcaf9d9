//! SAS Transport (XPT) file format decoder.
//!
//! This crate decodes SAS Transport V5 format files into structured dataset
//! metadata and typed row values, for inspection tooling. It implements the
//! fixed 80-byte record framing, the member/NAMESTR header layout, IBM
//! mainframe floating-point conversion, and the SAS missing-value
//! conventions.
//!
//! # Features
//!
//! - Multi-member files: a transport file may hold zero, one, or many
//!   datasets, decoded in file order
//! - IBM -> IEEE floating-point conversion with all 28 SAS missing value
//!   codes (`.`, `._`, `.A`-`.Z`) surfaced as typed missing values
//! - True observation counts alongside a bounded row preview
//!   ([`PREVIEW_ROWS`] rows per dataset) for responsive display
//! - Serde serialization of the decoded result as a plain, self-contained
//!   payload for a display layer
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use xptview_xpt::read_xpt;
//!
//! let file = read_xpt(Path::new("dm.xpt")).unwrap();
//! for dataset in &file.datasets {
//!     println!(
//!         "{}: {} variables, {} observations",
//!         dataset.name,
//!         dataset.num_columns(),
//!         dataset.observation_count,
//!     );
//! }
//! ```
//!
//! # Purity
//!
//! [`parse_xpt`] is a pure function from bytes to an [`XptFile`]: no I/O, no
//! global state, local allocations only. Multiple buffers may be decoded
//! concurrently on independent threads with no coordination.

mod error;
pub mod float;
pub mod header;
mod reader;
pub mod record;
mod types;

// Re-export error types
pub use error::{Result, XptError};

// Re-export library-level metadata
pub use header::LibraryInfo;

// Re-export core types
pub use types::{
    MissingValue, NumericValue, PREVIEW_ROWS, XptColumn, XptDataset, XptFile, XptType, XptValue,
};

// Re-export reader functionality
pub use reader::{parse_library_info, parse_xpt, read_xpt};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
