//! # Container Writer

use crate::container::codec::{ContainerBody, GroupEntries, write_body, write_header};
use crate::errors::{SEError, SEResult};
use crate::types::{EncodingScalar, EncodingSplit};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// The split names written by [`save_encodings_path`] and [`write_encodings`].
pub const DEFAULT_SPLIT_NAMES: [&str; 4] = ["A", "B", "X", "Y"];

/// Check that `names` pairs one-to-one with `num_splits` splits.
fn check_split_names<S: AsRef<str>>(
    num_splits: usize,
    names: &[S],
) -> SEResult<()> {
    if names.len() != num_splits {
        return Err(SEError::SplitCountMismatch {
            expected: names.len(),
            actual: num_splits,
        });
    }

    let mut seen = HashSet::with_capacity(names.len());
    for name in names {
        let name = name.as_ref();
        if !seen.insert(name) {
            return Err(SEError::DuplicateSplitName(name.to_string()));
        }
    }
    Ok(())
}

/// Write splits as named groups to a writer.
///
/// Splits pair positionally with `names`; members are written in key order.
///
/// ## Arguments
/// * `writer` - the sink.
/// * `encodings` - one map per split.
/// * `names` - one group name per split.
///
/// ## Errors
/// [`SEError::SplitCountMismatch`] if the counts differ; nothing is written.
pub fn write_named_encodings<W, T, S>(
    mut writer: W,
    encodings: &[EncodingSplit<T>],
    names: &[S],
) -> SEResult<()>
where
    W: Write,
    T: EncodingScalar,
    S: AsRef<str>,
{
    check_split_names(encodings.len(), names)?;

    let groups: Vec<GroupEntries<&str, &[T]>> = names
        .iter()
        .zip(encodings)
        .map(|(name, split)| {
            let name = name.as_ref();
            log::trace!("writing split {name:?} ({} members)", split.len());

            let mut members: Vec<(&str, &[T])> = split
                .iter()
                .map(|(key, values)| (key.as_str(), values.as_slice()))
                .collect();
            members.sort_unstable_by_key(|&(key, _)| key);
            (name, members)
        })
        .collect();

    write_header(&mut writer, T::DTYPE)?;
    write_body(&mut writer, &ContainerBody { groups })?;

    writer.flush()?;
    Ok(())
}

/// Write exactly four splits under [`DEFAULT_SPLIT_NAMES`].
pub fn write_encodings<W, T>(
    writer: W,
    encodings: &[EncodingSplit<T>],
) -> SEResult<()>
where
    W: Write,
    T: EncodingScalar,
{
    write_named_encodings(writer, encodings, &DEFAULT_SPLIT_NAMES)
}

/// Save splits as named groups to a container file.
///
/// The destination is created or truncated; a name/split count mismatch
/// fails before it is touched.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip(encodings, names, path))
)]
pub fn save_named_encodings_path<T, S, P>(
    encodings: &[EncodingSplit<T>],
    names: &[S],
    path: P,
) -> SEResult<()>
where
    T: EncodingScalar,
    S: AsRef<str>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    check_split_names(encodings.len(), names)?;

    let file = File::create(path).map_err(|e| SEError::io(path, e))?;
    write_named_encodings(BufWriter::new(file), encodings, names).map_err(|e| e.with_path(path))?;

    log::debug!(
        "saved {} splits ({} members) to {}",
        encodings.len(),
        encodings.iter().map(|s| s.len()).sum::<usize>(),
        path.display()
    );
    Ok(())
}

/// Save exactly four splits under [`DEFAULT_SPLIT_NAMES`] to a container file.
///
/// ## Arguments
/// * `encodings` - the `A`, `B`, `X`, `Y` splits, in order.
/// * `path` - the destination; created or truncated.
pub fn save_encodings_path<T, P>(
    encodings: &[EncodingSplit<T>],
    path: P,
) -> SEResult<()>
where
    T: EncodingScalar,
    P: AsRef<Path>,
{
    save_named_encodings_path(encodings, &DEFAULT_SPLIT_NAMES, path)
}
