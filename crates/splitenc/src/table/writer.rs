//! # Table Writer

use crate::errors::{SEError, SEResult};
use crate::types::{EncodingScalar, NamedSplit};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// The single header line written by [`write_table_encodings`].
pub const TABLE_HEADER: &str = "index\tcategory\tstring\tencoding";

fn check_field(field: &str) -> SEResult<()> {
    if field.contains(['\t', '\n', '\r']) || field.trim() != field {
        return Err(SEError::UnwritableField(field.to_string()));
    }
    Ok(())
}

fn write_vector<W: Write, T: EncodingScalar>(
    writer: &mut W,
    values: &[T],
) -> std::io::Result<()> {
    writer.write_all(b"[")?;
    for (idx, v) in values.iter().enumerate() {
        if idx > 0 {
            writer.write_all(b",")?;
        }
        write!(writer, "{v:?}")?;
    }
    writer.write_all(b"]")
}

/// Write named splits as a table, one category run per split.
///
/// Emits [`TABLE_HEADER`], then one row per member (ids sorted within each
/// split) with a running index from 0. Reading the output back with one
/// header line yields the same splits, except that empty splits vanish.
///
/// ## Errors
/// * [`SEError::DuplicateSplitName`] - a category repeats; the runs would merge or split.
/// * [`SEError::UnwritableField`] - a name or id with tabs, line breaks, or edge whitespace.
/// * [`SEError::MalformedVector`] - an empty vector, which has no table form.
pub fn write_table_encodings<W, T>(
    mut writer: W,
    splits: &[NamedSplit<T>],
) -> SEResult<()>
where
    W: Write,
    T: EncodingScalar,
{
    let mut seen = HashSet::with_capacity(splits.len());
    for named in splits {
        check_field(&named.name)?;
        if !seen.insert(named.name.as_str()) {
            return Err(SEError::DuplicateSplitName(named.name.clone()));
        }
    }

    writeln!(writer, "{TABLE_HEADER}")?;

    let mut index = 0usize;
    for named in splits {
        let mut ids: Vec<&String> = named.split.keys().collect();
        ids.sort_unstable();

        for id in ids {
            check_field(id)?;
            let values = &named.split[id];
            if values.is_empty() {
                return Err(SEError::MalformedVector {
                    line: index + 2,
                    reason: format!("empty vector for {id:?}"),
                });
            }

            write!(writer, "{index}\t{}\t{id}\t", named.name)?;
            write_vector(&mut writer, values)?;
            writer.write_all(b"\n")?;
            index += 1;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Save named splits to a table file; see [`write_table_encodings`].
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(path, splits)))]
pub fn save_table_encodings_path<T, P>(
    path: P,
    splits: &[NamedSplit<T>],
) -> SEResult<()>
where
    T: EncodingScalar,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| SEError::io(path, e))?;
    write_table_encodings(BufWriter::new(file), splits).map_err(|e| e.with_path(path))?;

    log::debug!("saved {} category runs to {}", splits.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{DEFAULT_HEADER_LINES, load_labeled_table_encodings_path};
    use crate::types::EncodingSplit;

    fn sample() -> Vec<NamedSplit<f64>> {
        let mut a = EncodingSplit::<f64>::default();
        a.insert("ex2".to_string(), vec![3.0, 4.0]);
        a.insert("ex1".to_string(), vec![1.0, 0.1]);

        let mut b = EncodingSplit::<f64>::default();
        b.insert("ex3".to_string(), vec![-5e-9, 6.0]);

        vec![NamedSplit::new("catA", a), NamedSplit::new("catB", b)]
    }

    #[test]
    fn test_write_table() {
        let mut buf = Vec::new();
        write_table_encodings(&mut buf, &sample()).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "index\tcategory\tstring\tencoding\n\
             0\tcatA\tex1\t[1.0,0.1]\n\
             1\tcatA\tex2\t[3.0,4.0]\n\
             2\tcatB\tex3\t[-5e-9,6.0]\n"
        );
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir::TempDir::new("splitenc_table").unwrap();
        let path = dir.path().join("encs.tsv");

        let splits = sample();
        save_table_encodings_path(&path, &splits).unwrap();

        let loaded = load_labeled_table_encodings_path::<f64, _>(&path, DEFAULT_HEADER_LINES).unwrap();
        assert_eq!(loaded, splits);
    }

    #[test]
    fn test_rejects_unwritable() {
        let mut splits = sample();
        splits[1].name = "catA".to_string();
        assert!(matches!(
            write_table_encodings(&mut Vec::new(), &splits),
            Err(SEError::DuplicateSplitName(_))
        ));

        let mut splits = sample();
        splits[0].name = "cat\tA".to_string();
        assert!(matches!(
            write_table_encodings(&mut Vec::new(), &splits),
            Err(SEError::UnwritableField(_))
        ));

        let mut splits = sample();
        splits[1].split.insert("bad\nid".to_string(), vec![1.0]);
        assert!(matches!(
            write_table_encodings(&mut Vec::new(), &splits),
            Err(SEError::UnwritableField(_))
        ));

        let mut splits = sample();
        splits[1].split.insert("empty".to_string(), vec![]);
        assert!(matches!(
            write_table_encodings(&mut Vec::new(), &splits),
            Err(SEError::MalformedVector { .. })
        ));
    }
}
