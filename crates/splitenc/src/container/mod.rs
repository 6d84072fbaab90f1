//! # Encoding Container
//!
//! A binary file of named top-level groups (splits), each holding named
//! members (example id to vector). Groups keep their written order.
//!
//! ## Round Trip
//!
//! ```rust
//! use splitenc::{
//!     EncodingSplit,
//!     container::{read_encodings, write_encodings},
//! };
//!
//! let mut splits: Vec<EncodingSplit<f32>> = vec![Default::default(); 4];
//! splits[0].insert("ex1".to_string(), vec![1.0, 2.0]);
//! splits[3].insert("ex2".to_string(), vec![3.0, 4.0]);
//!
//! let mut buf = Vec::new();
//! write_encodings(&mut buf, &splits).unwrap();
//!
//! let loaded = read_encodings::<f32, _>(buf.as_slice()).unwrap();
//! assert_eq!(loaded, splits);
//! ```

mod codec;
mod reader;
mod writer;

#[doc(inline)]
pub use codec::{CONTAINER_MAGIC, CONTAINER_VERSION, HEADER_SIZE};
#[doc(inline)]
pub use reader::*;
#[doc(inline)]
pub use writer::*;
