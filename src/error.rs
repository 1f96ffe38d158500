use std::borrow::Cow;

use crate::FieldPath;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Schema error at {path}: {reason}")]
    Schema {
        path: String,
        reason: Cow<'static, str>,
    },
    #[error("Format error at {path}: {reason}")]
    Format {
        path: String,
        reason: Cow<'static, str>,
    },
    #[error("Duplicate service index {index}: services at positions {first_position} and {second_position} share it")]
    DuplicateIndex {
        index: u32,
        first_position: usize,
        second_position: usize,
    },
    #[error("Key format error at {path}: {reason}")]
    KeyFormat {
        path: String,
        reason: Cow<'static, str>,
    },
    #[error("Input too large: {len} bytes exceeds the limit of {limit} bytes")]
    InputTooLarge { len: usize, limit: usize },
    #[error("Serialization error: {0}")]
    Serialization(Cow<'static, str>),
}

impl Error {
    pub fn schema(path: &FieldPath, reason: impl Into<Cow<'static, str>>) -> Self {
        Self::Schema {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
    pub fn format(path: &FieldPath, reason: impl Into<Cow<'static, str>>) -> Self {
        Self::Format {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
    pub fn key_format(path: &FieldPath, reason: impl Into<Cow<'static, str>>) -> Self {
        Self::KeyFormat {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
    /// Re-anchors a path-carrying error at the given path.  Values validated in isolation (e.g.
    /// `DID::from_str`) report the root path `$`; callers that know where the value came from use
    /// this to point at the offending field instead.
    pub fn at(self, path: &FieldPath) -> Self {
        match self {
            Self::Schema { reason, .. } => Self::Schema {
                path: path.to_string(),
                reason,
            },
            Self::Format { reason, .. } => Self::Format {
                path: path.to_string(),
                reason,
            },
            Self::KeyFormat { reason, .. } => Self::KeyFormat {
                path: path.to_string(),
                reason,
            },
            other => other,
        }
    }
    /// The field path this error refers to, if it has one.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Schema { path, .. } | Self::Format { path, .. } | Self::KeyFormat { path, .. } => {
                Some(path.as_str())
            }
            _ => None,
        }
    }
}
