use std::collections::BTreeMap;

use crate::{Error, FieldPath};

/// The `proof.checksum` field.  On the wire this is a JSON object keyed by stringified integers
/// (`{"0": "0x52b5...", "1": "0x9999..."}`); here it is an ordered sequence so that the keys are
/// contiguous starting at "0" by construction.
#[derive(Clone, Debug, Default, derive_more::Deref, Eq, derive_more::From, PartialEq)]
pub struct Checksums(Vec<String>);

impl Checksums {
    pub fn new(checksum_v: Vec<String>) -> Self {
        Self(checksum_v)
    }
    /// Builds the sequence from `(key, checksum)` pairs as read off the wire.  Every key must be
    /// the canonical decimal form of an integer (no sign, no leading zeros), and together the keys
    /// must be exactly `0..n`.
    pub fn from_keyed_entries<'a>(
        entries: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, Error> {
        let mut checksum_m = BTreeMap::new();
        for (key, checksum) in entries {
            let position = key
                .parse::<usize>()
                .ok()
                .filter(|position| position.to_string() == key)
                .ok_or_else(|| {
                    Error::schema(
                        &FieldPath::root(),
                        format!("checksum key {:?} is not a non-negative integer string", key),
                    )
                })?;
            if checksum_m.insert(position, checksum.to_string()).is_some() {
                return Err(Error::schema(
                    &FieldPath::root(),
                    format!("checksum key {:?} appears more than once", key),
                ));
            }
        }
        for (expected_position, position) in checksum_m.keys().enumerate() {
            if *position != expected_position {
                return Err(Error::schema(
                    &FieldPath::root(),
                    format!(
                        "checksum keys must be contiguous starting at \"0\"; key {:?} is missing",
                        expected_position.to_string()
                    ),
                ));
            }
        }
        Ok(Self(checksum_m.into_values().collect()))
    }
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl serde::Serialize for Checksums {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (position, checksum) in self.0.iter().enumerate() {
            map.serialize_entry(&position.to_string(), checksum)?;
        }
        map.end()
    }
}

impl<'de> serde::Deserialize<'de> for Checksums {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let checksum_m =
            <BTreeMap<String, String> as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_keyed_entries(
            checksum_m
                .iter()
                .map(|(key, checksum)| (key.as_str(), checksum.as_str())),
        )
        .map_err(serde::de::Error::custom)
    }
}
