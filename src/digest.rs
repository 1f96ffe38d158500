use serde::Serialize;
use sha2::Digest;

use crate::Error;

/// JCS (JSON Canonicalization Scheme, RFC 8785) serialization of any serializable value.
pub(crate) fn canonical_json<T: serde::Serialize>(value: &T) -> Result<String, Error> {
    let jcs_bytes = serde_json_canonicalizer::to_vec(value).map_err(|e| {
        Error::Serialization(format!("failed to serialize to canonical JSON: {}", e).into())
    })?;
    String::from_utf8(jcs_bytes)
        .map_err(|_| Error::Serialization("canonical JSON was not valid UTF-8".into()))
}

/// Compact JSON (no whitespace) with every non-ASCII character escaped as `\uXXXX`.  Object keys
/// are written in the order they are held, which for a parsed `serde_json::Value` is the order they
/// appeared in the document.  This is the byte form that published file and container checksums
/// are computed over.
pub(crate) fn ascii_compact_json<T: serde::Serialize>(value: &T) -> Result<String, Error> {
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, AsciiCompactFormatter);
    value.serialize(&mut serializer).map_err(|e| {
        Error::Serialization(format!("failed to serialize to compact JSON: {}", e).into())
    })?;
    String::from_utf8(buffer)
        .map_err(|_| Error::Serialization("compact JSON was not valid UTF-8".into()))
}

/// Compact JSON of a value as it was read from a document, provided it still decodes to `current`;
/// otherwise of `current` itself (in the model's field order).  An in-memory edit thereby always
/// shows up in the output, while an untouched value keeps its document key order.
pub(crate) fn document_order_json<T>(
    read_o: Option<&serde_json::Value>,
    current: &T,
) -> Result<String, Error>
where
    T: serde::de::DeserializeOwned + PartialEq + serde::Serialize,
{
    if let Some(read) = read_o {
        if serde_json::from_value::<T>(read.clone()).ok().as_ref() == Some(current) {
            return ascii_compact_json(read);
        }
        tracing::debug!("value was modified since it was read; using the model's field order");
    }
    ascii_compact_json(current)
}

/// Lower-case hex SHA-256 digest of the given bytes.
pub(crate) fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(sha2::Sha256::digest(bytes))
}

struct AsciiCompactFormatter;

impl serde_json::ser::Formatter for AsciiCompactFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> std::io::Result<()>
    where
        W: ?Sized + std::io::Write,
    {
        for c in fragment.chars() {
            if c.is_ascii() {
                writer.write_all(&[c as u8])?;
            } else {
                let mut unit_v = [0u16; 2];
                for unit in c.encode_utf16(&mut unit_v).iter() {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}
