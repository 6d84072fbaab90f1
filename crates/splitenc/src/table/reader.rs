//! # Table Reader

use crate::errors::{SEError, SEResult};
use crate::types::{EncodingScalar, EncodingSplit, EncodingTable, NamedSplit, unnamed};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Number of header lines skipped when not told otherwise.
pub const DEFAULT_HEADER_LINES: usize = 1;

/// One parsed data row.
#[derive(Debug, Clone, PartialEq)]
struct TableRow<T> {
    category: String,
    id: String,
    values: Vec<T>,
}

/// Parse a `[v0,v1,...]` literal.
fn parse_vector<T: EncodingScalar>(
    line: usize,
    field: &str,
) -> SEResult<Vec<T>> {
    let inner = field
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| SEError::MalformedVector {
            line,
            reason: format!("expected a [..] literal, got {field:?}"),
        })?;

    inner
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<T>().map_err(|_| SEError::MalformedVector {
                line,
                reason: format!("bad float {part:?}"),
            })
        })
        .collect()
}

/// Parse one data row: `index \t category \t id \t [vector]`.
fn parse_row<T: EncodingScalar>(
    line: usize,
    row: &str,
) -> SEResult<TableRow<T>> {
    let fields: Vec<&str> = row.trim().split('\t').collect();
    let [_index, category, id, encoding] = fields.as_slice() else {
        return Err(SEError::MalformedRow {
            line,
            fields: fields.len(),
        });
    };

    Ok(TableRow {
        category: category.to_string(),
        id: id.to_string(),
        values: parse_vector(line, encoding)?,
    })
}

/// Groups maximal runs of same-category rows.
///
/// The previous row's category is the name of the last run.
#[derive(Debug)]
struct RunAccumulator<T: EncodingScalar> {
    runs: Vec<NamedSplit<T>>,
}

impl<T: EncodingScalar> RunAccumulator<T> {
    fn new() -> Self {
        Self { runs: Vec::new() }
    }

    /// Add a row; a repeated id within a run replaces the earlier vector.
    fn push(
        mut self,
        row: TableRow<T>,
    ) -> Self {
        match self.runs.last_mut() {
            Some(run) if run.name == row.category => {
                run.split.insert(row.id, row.values);
            }
            _ => {
                let mut split = EncodingSplit::<T>::default();
                split.insert(row.id, row.values);
                self.runs.push(NamedSplit::new(row.category, split));
            }
        }
        self
    }

    fn finish(self) -> Vec<NamedSplit<T>> {
        self.runs
    }
}

/// Read category-run splits from a table, keeping each run's category.
///
/// ## Arguments
/// * `reader` - the table source.
/// * `n_header` - leading lines to skip, unchecked.
///
/// ## Returns
/// One [`NamedSplit`] per maximal run of same-category rows, in file order.
pub fn read_labeled_table_encodings<T, R>(
    reader: R,
    n_header: usize,
) -> SEResult<Vec<NamedSplit<T>>>
where
    T: EncodingScalar,
    R: BufRead,
{
    let mut lines = reader.lines().enumerate();
    for (_, header) in lines.by_ref().take(n_header) {
        header?;
    }

    let runs = lines.try_fold(RunAccumulator::new(), |acc, (idx, line)| {
        let row = parse_row::<T>(idx + 1, &line?)?;
        Ok::<_, SEError>(acc.push(row))
    })?;
    Ok(runs.finish())
}

/// Read category-run splits from a table, dropping categories.
pub fn read_table_encodings<T, R>(
    reader: R,
    n_header: usize,
) -> SEResult<EncodingTable<T>>
where
    T: EncodingScalar,
    R: BufRead,
{
    Ok(unnamed(read_labeled_table_encodings(reader, n_header)?))
}

/// Load category-run splits from a table file, keeping each run's category.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(path)))]
pub fn load_labeled_table_encodings_path<T, P>(
    path: P,
    n_header: usize,
) -> SEResult<Vec<NamedSplit<T>>>
where
    T: EncodingScalar,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| SEError::io(path, e))?;

    let runs = read_labeled_table_encodings(BufReader::new(file), n_header)
        .map_err(|e| e.with_path(path))?;
    log::debug!("loaded {} category runs from {}", runs.len(), path.display());
    Ok(runs)
}

/// Load category-run splits from a table file.
///
/// ## Arguments
/// * `path` - the table file.
/// * `n_header` - leading lines to skip; see [`DEFAULT_HEADER_LINES`].
///
/// ## Returns
/// One map per maximal run of same-category rows, in file order.
pub fn load_table_encodings_path<T, P>(
    path: P,
    n_header: usize,
) -> SEResult<EncodingTable<T>>
where
    T: EncodingScalar,
    P: AsRef<Path>,
{
    Ok(unnamed(load_labeled_table_encodings_path(path, n_header)?))
}
