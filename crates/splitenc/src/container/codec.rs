//! # Container Framing
//!
//! ```text
//! header:  magic "SPLTENC\0" | version: u32 | dtype: u8 | reserved: [u8; 3]
//! body:    bincode(ContainerBody<dtype>)
//! ```
//!
//! The header is little-endian; the body uses the bincode standard config.

use crate::errors::{SEError, SEResult};
use crate::types::{EncodingScalar, ScalarDType};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Magic number at the start of container files: "SPLTENC\0"
pub const CONTAINER_MAGIC: [u8; 8] = *b"SPLTENC\0";

/// Current container format version.
pub const CONTAINER_VERSION: u32 = 2;

/// Size of the container header.
pub const HEADER_SIZE: usize = 16; // 8 bytes magic + 4 bytes version + 1 byte dtype + 3 reserved

/// One group: its name and its `(member, vector)` entries, in stored order.
pub(crate) type GroupEntries<N, V> = (N, Vec<(N, V)>);

/// The container body: groups in stored order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ContainerBody<N, V> {
    pub(crate) groups: Vec<GroupEntries<N, V>>,
}

/// Write the container header.
pub(crate) fn write_header<W: Write>(
    writer: &mut W,
    dtype: ScalarDType,
) -> std::io::Result<()> {
    writer.write_all(&CONTAINER_MAGIC)?;
    writer.write_all(&CONTAINER_VERSION.to_le_bytes())?;
    writer.write_all(&[dtype.tag(), 0, 0, 0])?;
    Ok(())
}

/// Read the header; returns the stored dtype and the body bytes.
pub(crate) fn read_header(buf: &[u8]) -> SEResult<(ScalarDType, &[u8])> {
    if buf.len() < HEADER_SIZE {
        return Err(SEError::container(format!(
            "truncated header: {} of {HEADER_SIZE} bytes",
            buf.len()
        )));
    }
    let (header, body) = buf.split_at(HEADER_SIZE);

    if header[..8] != CONTAINER_MAGIC {
        return Err(SEError::container("bad magic; not a splitenc container"));
    }

    let mut version = [0u8; 4];
    version.copy_from_slice(&header[8..12]);
    let version = u32::from_le_bytes(version);
    if version != CONTAINER_VERSION {
        return Err(SEError::container(format!(
            "unsupported container version {version}"
        )));
    }

    let dtype = ScalarDType::from_tag(header[12])
        .ok_or_else(|| SEError::container(format!("unknown dtype tag {}", header[12])))?;
    Ok((dtype, body))
}

/// Encode a body of borrowed groups.
pub(crate) fn write_body<W: Write, T: EncodingScalar>(
    writer: &mut W,
    body: &ContainerBody<&str, &[T]>,
) -> SEResult<()> {
    let data = bincode::serde::encode_to_vec(body, bincode::config::standard())
        .map_err(|e| SEError::container(format!("body encoding failed: {e}")))?;
    writer.write_all(&data)?;
    Ok(())
}

/// Decode a body stored as `S`; the body must fill `data` exactly.
pub(crate) fn decode_body<S: EncodingScalar>(
    data: &[u8]
) -> SEResult<ContainerBody<String, Vec<S>>> {
    let (body, read): (ContainerBody<String, Vec<S>>, usize) =
        bincode::serde::decode_from_slice(data, bincode::config::standard())
            .map_err(|e| SEError::container(format!("body decoding failed: {e}")))?;

    if read != data.len() {
        return Err(SEError::container("trailing bytes after last group"));
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header() {
        let mut buf = Vec::new();
        write_header(&mut buf, ScalarDType::F64).unwrap();
        assert_eq!(buf.len(), HEADER_SIZE);

        buf.push(7);
        let (dtype, body) = read_header(&buf).unwrap();
        assert_eq!(dtype, ScalarDType::F64);
        assert_eq!(body, &[7]);
    }

    #[test]
    fn test_bad_header() {
        assert!(matches!(
            read_header(b"NOTACONTAINER..."),
            Err(SEError::Container { .. })
        ));
        assert!(read_header(b"SPLT").unwrap_err().to_string().contains("truncated"));

        let mut buf = CONTAINER_MAGIC.to_vec();
        buf.extend_from_slice(&7u32.to_le_bytes());
        buf.extend_from_slice(&[1, 0, 0, 0]);
        let err = read_header(&buf).unwrap_err();
        assert!(err.to_string().contains("version 7"));

        let mut buf = CONTAINER_MAGIC.to_vec();
        buf.extend_from_slice(&CONTAINER_VERSION.to_le_bytes());
        buf.extend_from_slice(&[9, 0, 0, 0]);
        assert!(read_header(&buf).unwrap_err().to_string().contains("dtype tag 9"));
    }

    #[test]
    fn test_body() {
        let values = [1.0f32, -2.5];
        let body = ContainerBody {
            groups: vec![("A", vec![("ex1", &values[..])]), ("B", vec![])],
        };

        let mut buf = Vec::new();
        write_body(&mut buf, &body).unwrap();

        let decoded = decode_body::<f32>(&buf).unwrap();
        assert_eq!(
            decoded.groups,
            vec![
                (
                    "A".to_string(),
                    vec![("ex1".to_string(), vec![1.0f32, -2.5])]
                ),
                ("B".to_string(), vec![]),
            ]
        );
    }

    #[test]
    fn test_truncated_body() {
        let values = [1.0f64, 2.0];
        let body = ContainerBody {
            groups: vec![("A", vec![("ex1", &values[..])])],
        };

        let mut buf = Vec::new();
        write_body(&mut buf, &body).unwrap();
        buf.truncate(buf.len() - 1);

        let err = decode_body::<f64>(&buf).unwrap_err();
        assert!(err.to_string().contains("decoding failed"));
    }
}
