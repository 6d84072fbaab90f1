//! # Error Types

use std::path::PathBuf;

/// Errors produced by the `splitenc` readers and writers.
#[derive(Debug, thiserror::Error)]
pub enum SEError {
    /// An I/O failure, tagged with the path being read or written.
    #[error("io error on {path:?}: {source}")]
    Io {
        /// The path being accessed.
        path: PathBuf,

        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// An I/O failure on a reader or writer with no path attached.
    #[error("io error: {0}")]
    Stream(#[from] std::io::Error),

    /// A sentence line without exactly one `:`.
    #[error("line {line}: expected exactly one ':' in sentence line, found {colons}")]
    MalformedSentence {
        /// 1-based line number.
        line: usize,

        /// Number of colons found.
        colons: usize,
    },

    /// A table row that does not split into four tab-separated fields.
    #[error("line {line}: expected 4 tab-separated fields, found {fields}")]
    MalformedRow {
        /// 1-based line number.
        line: usize,

        /// Number of fields found.
        fields: usize,
    },

    /// A table row whose vector literal could not be parsed.
    #[error("line {line}: malformed vector literal: {reason}")]
    MalformedVector {
        /// 1-based line number.
        line: usize,

        /// What was wrong with the literal.
        reason: String,
    },

    /// The number of splits does not match the number of split names.
    #[error("expected {expected} splits, got {actual}")]
    SplitCountMismatch {
        /// Number of split names.
        expected: usize,

        /// Number of splits supplied.
        actual: usize,
    },

    /// A split name appears more than once.
    #[error("duplicate split name: {0:?}")]
    DuplicateSplitName(String),

    /// A name or id that cannot be written to a table row.
    #[error("field {0:?} contains a tab or line break")]
    UnwritableField(String),

    /// A container file is truncated or garbled.
    #[error("invalid container: {reason}")]
    Container {
        /// What was wrong with the container.
        reason: String,
    },
}

impl SEError {
    /// Build an [`SEError::Io`] for `path`.
    pub fn io<P: Into<PathBuf>>(
        path: P,
        source: std::io::Error,
    ) -> Self {
        SEError::Io {
            path: path.into(),
            source,
        }
    }

    /// Build an [`SEError::Container`].
    pub fn container<S: Into<String>>(reason: S) -> Self {
        SEError::Container {
            reason: reason.into(),
        }
    }

    /// Attach `path` to a pathless [`SEError::Stream`] error.
    pub fn with_path<P: Into<PathBuf>>(
        self,
        path: P,
    ) -> Self {
        match self {
            SEError::Stream(source) => SEError::io(path, source),
            other => other,
        }
    }

    /// Is this a parse failure (as opposed to an I/O failure)?
    pub fn is_parse_error(&self) -> bool {
        !matches!(self, SEError::Io { .. } | SEError::Stream(_))
    }
}

/// Result type for `splitenc`.
pub type SEResult<T> = core::result::Result<T, SEError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SEError::MalformedSentence { line: 3, colons: 2 };
        assert_eq!(
            err.to_string(),
            "line 3: expected exactly one ':' in sentence line, found 2"
        );
        assert!(err.is_parse_error());

        let err = SEError::io(
            "/tmp/x",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(!err.is_parse_error());
        assert!(err.to_string().contains("/tmp/x"));
    }
}
