//! # Common Types
//!
//! [`EncodingScalar`] is the numeric element type of an encoding vector;
//! implemented for `f32` and `f64`.

use core::fmt::{Debug, Display};
use core::str::FromStr;
use num_traits::{Float, NumCast};
use serde::Serialize;
use serde::de::DeserializeOwned;

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type SEHashMap<K, V> = std::collections::HashMap<K, V, ahash::RandomState>;
    } else {
        /// Type Alias for hash maps in this crate.
        pub type SEHashMap<K, V> = std::collections::HashMap<K, V>;
    }
}

/// On-disk element type tag for encoding vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarDType {
    /// 32-bit IEEE float.
    F32,

    /// 64-bit IEEE float.
    F64,
}

impl ScalarDType {
    /// The byte tag used in container headers.
    pub fn tag(self) -> u8 {
        match self {
            ScalarDType::F32 => 1,
            ScalarDType::F64 => 2,
        }
    }

    /// Look up a dtype by its header tag.
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            1 => Some(ScalarDType::F32),
            2 => Some(ScalarDType::F64),
            _ => None,
        }
    }
}

/// A numeric element type for encoding vectors.
pub trait EncodingScalar:
    Float
    + NumCast
    + FromStr
    + Display
    + Debug
    + Default
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    /// The dtype this scalar is stored as.
    const DTYPE: ScalarDType;

    /// Convert a vector of another scalar type.
    ///
    /// ## Returns
    /// `None` if any value is not representable as `Self`.
    fn cast_vec<S: EncodingScalar>(values: Vec<S>) -> Option<Vec<Self>> {
        values.into_iter().map(<Self as NumCast>::from).collect()
    }
}

impl EncodingScalar for f32 {
    const DTYPE: ScalarDType = ScalarDType::F32;
}

impl EncodingScalar for f64 {
    const DTYPE: ScalarDType = ScalarDType::F64;
}

/// One split: example id to encoding vector.
pub type EncodingSplit<T> = SEHashMap<String, Vec<T>>;

/// An ordered sequence of splits.
pub type EncodingTable<T> = Vec<EncodingSplit<T>>;

/// A split together with its name (container group name or table category).
#[derive(Debug, Clone, PartialEq)]
pub struct NamedSplit<T: EncodingScalar> {
    /// The split name.
    pub name: String,

    /// The split members.
    pub split: EncodingSplit<T>,
}

impl<T: EncodingScalar> NamedSplit<T> {
    /// Create a new named split.
    pub fn new<S: Into<String>>(
        name: S,
        split: EncodingSplit<T>,
    ) -> Self {
        Self {
            name: name.into(),
            split,
        }
    }
}

/// Drop the names from a sequence of [`NamedSplit`]s.
pub fn unnamed<T: EncodingScalar>(splits: Vec<NamedSplit<T>>) -> EncodingTable<T> {
    splits.into_iter().map(|named| named.split).collect()
}
