//! # Encoding Tables
//!
//! Tab-separated text, one encoding per row, after a fixed number of
//! ignored header lines:
//!
//! ```text
//! index	category	string	encoding
//! 0	catA	ex1	[1.0,2.0]
//! 1	catA	ex2	[3.0,4.0]
//! 2	catB	ex3	[5.0,6.0]
//! ```
//!
//! Consecutive rows sharing a category form one split; a category that
//! reappears after a different one starts a new split.
//!
//! ```rust
//! use splitenc::table::{DEFAULT_HEADER_LINES, read_table_encodings};
//!
//! let data = "index\tcategory\tstring\tencoding\n\
//!             0\tcatA\tex1\t[1.0,2.0]\n\
//!             1\tcatA\tex2\t[3.0,4.0]\n\
//!             2\tcatB\tex3\t[5.0,6.0]\n";
//!
//! let splits = read_table_encodings::<f64, _>(data.as_bytes(), DEFAULT_HEADER_LINES).unwrap();
//! assert_eq!(splits.len(), 2);
//! assert_eq!(splits[0]["ex2"], vec![3.0, 4.0]);
//! assert_eq!(splits[1]["ex3"], vec![5.0, 6.0]);
//! ```

mod reader;
mod writer;

#[doc(inline)]
pub use reader::*;
#[doc(inline)]
pub use writer::*;
