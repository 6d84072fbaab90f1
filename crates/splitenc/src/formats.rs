//! # Encoding File Formats

use std::path::Path;

/// The on-disk encoding formats.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EncodingFormat {
    /// The binary split/member container; see [`crate::container`].
    Container,

    /// Tab-separated category-run table; see [`crate::table`].
    Table,
}

impl EncodingFormat {
    /// File extensions read as [`EncodingFormat::Table`].
    pub const TABLE_EXTENSIONS: [&'static str; 2] = ["tsv", "txt"];

    /// Guess the format from a path's extension.
    ///
    /// `.tsv` and `.txt` are tables; everything else is a container.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let is_table = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                Self::TABLE_EXTENSIONS
                    .iter()
                    .any(|t| t.eq_ignore_ascii_case(ext))
            });

        if is_table {
            EncodingFormat::Table
        } else {
            EncodingFormat::Container
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_names() {
        for format in EncodingFormat::iter() {
            let name: &'static str = format.into();
            assert_eq!(format.to_string(), name);
            assert_eq!(EncodingFormat::from_str(name).unwrap(), format);
        }
        assert_eq!(
            EncodingFormat::from_str("TABLE").unwrap(),
            EncodingFormat::Table
        );
        assert!(EncodingFormat::from_str("hdf5").is_err());
    }

    #[test]
    fn test_from_path() {
        assert_eq!(EncodingFormat::from_path("a/b.tsv"), EncodingFormat::Table);
        assert_eq!(EncodingFormat::from_path("b.TXT"), EncodingFormat::Table);
        assert_eq!(
            EncodingFormat::from_path("b.splitenc"),
            EncodingFormat::Container
        );
        assert_eq!(EncodingFormat::from_path("b"), EncodingFormat::Container);
    }
}
