//! # Container Reader

use crate::container::codec::{ContainerBody, GroupEntries, decode_body, read_header};
use crate::errors::{SEError, SEResult};
use crate::types::{EncodingScalar, EncodingTable, NamedSplit, ScalarDType, unnamed};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

/// Per-split summary from [`inspect_container_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSummary {
    /// The group name.
    pub name: String,

    /// Number of members in the group.
    pub members: usize,

    /// Distinct vector dims seen in the group, ascending.
    pub dims: Vec<usize>,
}

/// Container summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSummary {
    /// The stored element type.
    pub dtype: ScalarDType,

    /// One summary per group, in stored order.
    pub splits: Vec<SplitSummary>,
}

/// Convert a body stored as `S` into `T` vectors.
fn cast_body<S, T>(
    body: ContainerBody<String, Vec<S>>
) -> SEResult<Vec<GroupEntries<String, Vec<T>>>>
where
    S: EncodingScalar,
    T: EncodingScalar,
{
    body.groups
        .into_iter()
        .map(|(name, members)| {
            let members = members
                .into_iter()
                .map(|(member, values)| {
                    let values = T::cast_vec(values).ok_or_else(|| {
                        SEError::container(format!(
                            "member {member:?} in group {name:?} is not representable as {:?}",
                            T::DTYPE
                        ))
                    })?;
                    Ok::<_, SEError>((member, values))
                })
                .collect::<SEResult<Vec<_>>>()?;
            Ok::<_, SEError>((name, members))
        })
        .collect()
}

/// Decode every group in `buf`, in stored order, as `T` vectors.
fn stored_groups<T: EncodingScalar>(
    buf: &[u8]
) -> SEResult<(ScalarDType, Vec<GroupEntries<String, Vec<T>>>)> {
    let (dtype, data) = read_header(buf)?;
    let groups = match dtype {
        ScalarDType::F32 => cast_body::<f32, T>(decode_body(data)?)?,
        ScalarDType::F64 => cast_body::<f64, T>(decode_body(data)?)?,
    };

    let mut seen = HashSet::with_capacity(groups.len());
    for (name, members) in &groups {
        if !seen.insert(name.as_str()) {
            return Err(SEError::container(format!("duplicate group {name:?}")));
        }
        log::trace!("read split {name:?} ({} members)", members.len());
    }
    Ok((dtype, groups))
}

/// Decode named splits from an in-memory container.
pub fn decode_named_encodings<T: EncodingScalar>(buf: &[u8]) -> SEResult<Vec<NamedSplit<T>>> {
    let (_, groups) = stored_groups::<T>(buf)?;

    groups
        .into_iter()
        .map(|(name, members)| {
            let mut named = NamedSplit::<T>::new(name, Default::default());
            named.split.reserve(members.len());
            for (member, values) in members {
                if named.split.insert(member.clone(), values).is_some() {
                    return Err(SEError::container(format!(
                        "duplicate member {member:?} in group {:?}",
                        named.name
                    )));
                }
            }
            Ok(named)
        })
        .collect()
}

/// Read named splits from a reader holding a whole container.
pub fn read_named_encodings<T, R>(mut reader: R) -> SEResult<Vec<NamedSplit<T>>>
where
    T: EncodingScalar,
    R: Read,
{
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    decode_named_encodings(&buf)
}

/// Read splits, in stored group order, from a reader holding a whole container.
pub fn read_encodings<T, R>(reader: R) -> SEResult<EncodingTable<T>>
where
    T: EncodingScalar,
    R: Read,
{
    Ok(unnamed(read_named_encodings(reader)?))
}

/// Read a whole file; nothing at `path` is `Ok(None)`.
fn read_if_exists(path: &Path) -> SEResult<Option<Vec<u8>>> {
    if !path.exists() {
        log::debug!("no container at {}", path.display());
        return Ok(None);
    }
    std::fs::read(path).map(Some).map_err(|e| SEError::io(path, e))
}

/// Load named splits from a container file.
///
/// ## Returns
/// `Ok(None)` if nothing exists at `path`; otherwise the groups in stored order.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(path)))]
pub fn load_named_encodings_path<T, P>(path: P) -> SEResult<Option<Vec<NamedSplit<T>>>>
where
    T: EncodingScalar,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let Some(buf) = read_if_exists(path)? else {
        return Ok(None);
    };

    let splits = decode_named_encodings::<T>(&buf)?;
    log::debug!("loaded {} splits from {}", splits.len(), path.display());
    Ok(Some(splits))
}

/// Load splits from a container file.
///
/// ## Arguments
/// * `path` - the container file.
///
/// ## Returns
/// `Ok(None)` if nothing exists at `path`; otherwise one map per group,
/// in stored group order.
pub fn load_encodings_path<T, P>(path: P) -> SEResult<Option<EncodingTable<T>>>
where
    T: EncodingScalar,
    P: AsRef<Path>,
{
    Ok(load_named_encodings_path(path)?.map(unnamed))
}

/// Summarize a container file: its dtype, and per group the member count
/// and the distinct vector dims.
///
/// ## Returns
/// `Ok(None)` if nothing exists at `path`.
pub fn inspect_container_path<P: AsRef<Path>>(path: P) -> SEResult<Option<ContainerSummary>> {
    let path = path.as_ref();
    let Some(buf) = read_if_exists(path)? else {
        return Ok(None);
    };

    let (dtype, groups) = stored_groups::<f64>(&buf)?;
    let splits = groups
        .into_iter()
        .map(|(name, members)| {
            let mut dims: Vec<usize> = members.iter().map(|(_, v)| v.len()).collect();
            dims.sort_unstable();
            dims.dedup();
            SplitSummary {
                name,
                members: members.len(),
                dims,
            }
        })
        .collect();
    Ok(Some(ContainerSummary { dtype, splits }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::codec::{write_body, write_header};
    use crate::types::EncodingSplit;
    use crate::container::{save_encodings_path, save_named_encodings_path};

    fn sample_splits<T: EncodingScalar>() -> EncodingTable<T> {
        let v = |xs: &[f32]| -> Vec<T> { xs.iter().map(|&x| T::from(x).unwrap()).collect() };

        let mut a = EncodingSplit::<T>::default();
        a.insert("ex1".to_string(), v(&[1.0, 2.0]));
        a.insert("ex2".to_string(), v(&[3.0, 4.0]));

        let mut b = EncodingSplit::<T>::default();
        b.insert("ex3".to_string(), v(&[5.0, 6.0]));

        let x = EncodingSplit::<T>::default();

        let mut y = EncodingSplit::<T>::default();
        y.insert("ex4".to_string(), v(&[-0.5, 0.25]));
        y.insert("ex5".to_string(), v(&[7.0, 8.0]));

        vec![a, b, x, y]
    }

    fn test_round_trip<T: EncodingScalar>() {
        let dir = tempdir::TempDir::new("splitenc_container").unwrap();
        let path = dir.path().join("encs.splitenc");

        let splits = sample_splits::<T>();
        save_encodings_path(&splits, &path).unwrap();

        let loaded = load_encodings_path::<T, _>(&path).unwrap().unwrap();
        assert_eq!(loaded, splits);

        let named = load_named_encodings_path::<T, _>(&path).unwrap().unwrap();
        let names: Vec<&str> = named.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "X", "Y"]);
    }

    #[test]
    fn test_round_trip_f32() {
        test_round_trip::<f32>();
    }

    #[test]
    fn test_round_trip_f64() {
        test_round_trip::<f64>();
    }

    #[test]
    fn test_cross_dtype_load() {
        let dir = tempdir::TempDir::new("splitenc_container").unwrap();
        let path = dir.path().join("encs.splitenc");

        save_encodings_path(&sample_splits::<f64>(), &path).unwrap();
        let loaded = load_encodings_path::<f32, _>(&path).unwrap().unwrap();
        assert_eq!(loaded, sample_splits::<f32>());
    }

    #[test]
    fn test_missing_is_none() {
        let dir = tempdir::TempDir::new("splitenc_container").unwrap();
        let path = dir.path().join("nope.splitenc");

        assert_eq!(load_encodings_path::<f32, _>(&path).unwrap(), None);
        assert_eq!(load_named_encodings_path::<f64, _>(&path).unwrap(), None);
        assert_eq!(inspect_container_path(&path).unwrap(), None);
    }

    #[test]
    fn test_stored_group_order() {
        let dir = tempdir::TempDir::new("splitenc_container").unwrap();
        let path = dir.path().join("encs.splitenc");

        let splits = sample_splits::<f32>();
        let names = ["test", "dev", "train", "aux"];
        save_named_encodings_path(&splits, &names, &path).unwrap();

        let named = load_named_encodings_path::<f32, _>(&path).unwrap().unwrap();
        assert_eq!(
            named.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
            names.to_vec()
        );
        assert_eq!(named[3].split, splits[3]);
    }

    #[test]
    fn test_inspect() {
        let dir = tempdir::TempDir::new("splitenc_container").unwrap();
        let path = dir.path().join("encs.splitenc");
        save_encodings_path(&sample_splits::<f64>(), &path).unwrap();

        let summary = inspect_container_path(&path).unwrap().unwrap();
        assert_eq!(summary.dtype, ScalarDType::F64);
        assert_eq!(
            summary
                .splits
                .iter()
                .map(|s| (s.name.as_str(), s.members))
                .collect::<Vec<_>>(),
            vec![("A", 2), ("B", 1), ("X", 0), ("Y", 2)]
        );
        assert_eq!(summary.splits[0].dims, vec![2]);
        assert!(summary.splits[2].dims.is_empty());
    }

    #[test]
    fn test_missing_under_file_parent_is_none() {
        let dir = tempdir::TempDir::new("splitenc_container").unwrap();
        let parent = dir.path().join("plain.txt");
        std::fs::write(&parent, "not a directory").unwrap();

        let path = parent.join("encs.splitenc");
        assert_eq!(load_encodings_path::<f32, _>(&path).unwrap(), None);
        assert_eq!(inspect_container_path(&path).unwrap(), None);
    }

    fn raw_container(
        dtype: ScalarDType,
        groups: Vec<GroupEntries<&str, &[f32]>>,
    ) -> Vec<u8> {
        let mut buf = Vec::new();
        write_header(&mut buf, dtype).unwrap();
        write_body(&mut buf, &ContainerBody { groups }).unwrap();
        buf
    }

    #[test]
    fn test_garbled_container() {
        let one = [1.0f32];
        let two = [2.0f32];

        let buf = raw_container(
            ScalarDType::F32,
            vec![("A", vec![("ex1", &one[..]), ("ex1", &two[..])])],
        );
        let err = decode_named_encodings::<f32>(&buf).unwrap_err();
        assert!(err.to_string().contains("duplicate member"));

        let buf = raw_container(
            ScalarDType::F32,
            vec![("A", vec![]), ("A", vec![("ex1", &one[..])])],
        );
        let err = decode_named_encodings::<f64>(&buf).unwrap_err();
        assert!(err.to_string().contains("duplicate group"));

        // f32 body under an f64 header.
        let buf = raw_container(ScalarDType::F64, vec![("A", vec![("ex1", &one[..])])]);
        assert!(matches!(
            decode_named_encodings::<f32>(&buf),
            Err(SEError::Container { .. })
        ));

        let mut buf = raw_container(ScalarDType::F32, vec![("A", vec![("ex1", &one[..])])]);
        buf.truncate(buf.len() - 2);
        assert!(matches!(
            decode_named_encodings::<f32>(&buf),
            Err(SEError::Container { .. })
        ));

        assert!(read_encodings::<f32, _>(&b"plain text"[..]).is_err());
    }

    #[test]
    fn test_trailing_bytes() {
        let mut buf = raw_container(ScalarDType::F32, vec![]);
        assert_eq!(decode_named_encodings::<f32>(&buf).unwrap(), vec![]);

        buf.push(0);
        let err = decode_named_encodings::<f32>(&buf).unwrap_err();
        assert!(err.to_string().contains("trailing"));
    }
}
