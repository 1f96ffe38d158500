use crate::{Error, FieldPath};

/// An ISO-8601 timestamp as found in the `created`, `updated`, `issuanceDate`, `dateCreated`, and
/// `datePublished` fields of a DDO.
///
/// Parsing accepts RFC 3339 date-times (e.g. `2019-02-08T08:13:49Z`), general ISO-8601 date-times
/// with an offset, and ISO-8601 date-times with no offset at all (e.g. `2021-10-06T12:00:00`),
/// which are taken to be UTC.  Display always produces RFC 3339.
#[derive(
    Clone,
    Copy,
    Debug,
    derive_more::Deref,
    serde_with::DeserializeFromStr,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    serde_with::SerializeDisplay,
)]
pub struct Timestamp(time::OffsetDateTime);

impl Timestamp {
    pub fn now_utc() -> Self {
        // RFC 3339 output keeps sub-second digits, but DDOs conventionally carry whole seconds.
        let now = time::OffsetDateTime::now_utc();
        Self(now.replace_nanosecond(0).unwrap_or(now))
    }
    pub fn offset_date_time(&self) -> time::OffsetDateTime {
        self.0
    }
    fn parse_offset_date_time(s: &str) -> Option<time::OffsetDateTime> {
        use time::format_description::well_known::{Iso8601, Rfc3339};

        if let Ok(t) = time::OffsetDateTime::parse(s, &Rfc3339) {
            return Some(t);
        }
        if let Ok(t) = time::OffsetDateTime::parse(s, &Iso8601::DEFAULT) {
            return Some(t);
        }
        if let Ok(t) = time::PrimitiveDateTime::parse(s, &Iso8601::DEFAULT) {
            tracing::warn!(
                "timestamp {:?} has no UTC offset; interpreting it as UTC",
                s
            );
            return Some(t.assume_utc());
        }
        None
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self
            .0
            .format(&time::format_description::well_known::Rfc3339)
            .map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl std::str::FromStr for Timestamp {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = Self::parse_offset_date_time(s).ok_or_else(|| {
            Error::format(
                &FieldPath::root(),
                format!("malformed timestamp {:?}: expected an ISO-8601 date-time", s),
            )
        })?;
        Self::try_from(t)
    }
}

impl TryFrom<time::OffsetDateTime> for Timestamp {
    type Error = Error;
    /// Only date-times that RFC 3339 can express (years 0000 through 9999) are accepted, so that
    /// every Timestamp can be displayed and serialized.
    fn try_from(t: time::OffsetDateTime) -> Result<Self, Self::Error> {
        if t.format(&time::format_description::well_known::Rfc3339).is_err() {
            return Err(Error::format(
                &FieldPath::root(),
                format!(
                    "timestamp {} is outside the range an RFC 3339 date-time can express",
                    t
                ),
            ));
        }
        Ok(Self(t))
    }
}
