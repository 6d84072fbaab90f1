//! # Sentence Lists
//!
//! One record per line, `category:item1,item2,...`. There is no escaping;
//! each line must carry exactly one `:`, and items are split on every `,`.
//!
//! ```rust
//! use splitenc::sentences::read_sentences;
//!
//! let data = "animals:cat,dog\nplants:fern\n";
//! let sents = read_sentences(data.as_bytes()).unwrap();
//! assert_eq!(sents, vec![vec!["cat", "dog"], vec!["fern"]]);
//! ```

use crate::errors::{SEError, SEResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A sentence line with its category retained.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LabeledSentence {
    /// The text before the `:`.
    pub category: String,

    /// The comma-split text after the `:`.
    pub tokens: Vec<String>,
}

/// Parse one sentence line.
///
/// ## Arguments
/// * `line_no` - 1-based line number, for errors.
/// * `row` - the raw line; surrounding whitespace is trimmed.
///
/// ## Returns
/// A [`LabeledSentence`] holding the category and its tokens.
fn parse_sentence_line(
    line_no: usize,
    row: &str,
) -> SEResult<LabeledSentence> {
    let row = row.trim();

    let mut parts = row.split(':');
    let (Some(category), Some(examples), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(SEError::MalformedSentence {
            line: line_no,
            colons: row.matches(':').count(),
        });
    };

    Ok(LabeledSentence {
        category: category.to_string(),
        tokens: examples.split(',').map(str::to_string).collect(),
    })
}

/// Read labeled sentences from a buffered reader.
///
/// Fails on the first malformed line; no partial result is returned.
pub fn read_labeled_sentences<R: BufRead>(reader: R) -> SEResult<Vec<LabeledSentence>> {
    reader
        .lines()
        .enumerate()
        .map(|(idx, line)| parse_sentence_line(idx + 1, &line?))
        .collect()
}

/// Read sentences from a buffered reader, dropping categories.
///
/// ## Returns
/// One token list per line, in file order.
pub fn read_sentences<R: BufRead>(reader: R) -> SEResult<Vec<Vec<String>>> {
    Ok(read_labeled_sentences(reader)?
        .into_iter()
        .map(|sent| sent.tokens)
        .collect())
}

/// Load labeled sentences from a file.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(path)))]
pub fn load_labeled_sentences_path<P: AsRef<Path>>(path: P) -> SEResult<Vec<LabeledSentence>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| SEError::io(path, e))?;

    let sents = read_labeled_sentences(BufReader::new(file))?;
    log::debug!("loaded {} sentences from {}", sents.len(), path.display());
    Ok(sents)
}

/// Load sentences from a file, dropping categories.
///
/// ## Arguments
/// * `path` - a `category:tok,tok,...` file.
///
/// ## Returns
/// One token list per line, in file order.
pub fn load_sentences_path<P: AsRef<Path>>(path: P) -> SEResult<Vec<Vec<String>>> {
    Ok(load_labeled_sentences_path(path)?
        .into_iter()
        .map(|sent| sent.tokens)
        .collect())
}
