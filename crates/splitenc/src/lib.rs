//! # splitenc
//!
//! Readers and writers for the small file formats of a probing workflow:
//!
//! * [`sentences`] - `category:tok,tok,...` sentence lists.
//! * [`container`] - the binary split/member encoding container.
//! * [`table`] - tab-separated encoding tables, grouped by category runs.
//!
//! An encoding table is an ordered [`Vec`] of splits; each split maps an
//! example id to its vector.
//!
//! ## Round Trip
//!
//! ```rust,no_run
//! use splitenc::{
//!     EncodingTable,
//!     container::{load_encodings_path, save_encodings_path},
//! };
//!
//! fn example(encodings: &EncodingTable<f32>) -> splitenc::SEResult<()> {
//!     save_encodings_path(encodings, "encodings.splitenc")?;
//!
//!     let loaded: Option<EncodingTable<f32>> = load_encodings_path("encodings.splitenc")?;
//!     assert_eq!(loaded.as_ref(), Some(encodings));
//!     Ok(())
//! }
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs)]

pub mod container;
pub mod errors;
pub mod formats;
pub mod sentences;
pub mod table;
pub mod types;

#[doc(inline)]
pub use errors::{SEError, SEResult};
#[doc(inline)]
pub use formats::EncodingFormat;
#[doc(inline)]
pub use types::{EncodingScalar, EncodingSplit, EncodingTable, NamedSplit};
