use crate::{Error, FieldPath};

/// An element of a metadata service's `attributes.main.files` list.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct FileEntry {
    /// Position of this entry within the `files` list.
    pub index: u32,
    pub url: String,
    #[serde(rename = "contentType")]
    pub content_type: String,
    #[serde(rename = "checksum", default, skip_serializing_if = "Option::is_none")]
    pub checksum_o: Option<String>,
    #[serde(
        rename = "checksumType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub checksum_type_o: Option<String>,
    /// Size in bytes, as a decimal string.
    #[serde(
        rename = "contentLength",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub content_length_o: Option<String>,
    #[serde(rename = "encoding", default, skip_serializing_if = "Option::is_none")]
    pub encoding_o: Option<String>,
    #[serde(
        rename = "compression",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub compression_o: Option<String>,
    #[serde(rename = "resourceId", default, skip_serializing_if = "Option::is_none")]
    pub resource_id_o: Option<String>,
}

impl FileEntry {
    /// `position` is where this entry sits in its `files` list; `path` is the path of the entry.
    pub fn verify(&self, position: usize, path: &FieldPath) -> Result<(), Error> {
        if self.index as usize != position {
            return Err(Error::schema(
                &path.field("index"),
                format!(
                    "file index {} does not match its position {} in the files list",
                    self.index, position
                ),
            ));
        }
        url::Url::parse(&self.url).map_err(|e| {
            Error::format(
                &path.field("url"),
                format!("malformed file URL {:?}: {}", self.url, e),
            )
        })?;
        if let Some(content_length) = self.content_length_o.as_deref() {
            if content_length.parse::<u64>().is_err() {
                return Err(Error::format(
                    &path.field("contentLength"),
                    format!(
                        "content length {:?} is not a non-negative integer",
                        content_length
                    ),
                ));
            }
        }
        Ok(())
    }
}
