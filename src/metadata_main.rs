use crate::{document_order_json, sha256_hex, Error, FieldPath, FileEntry, Timestamp};

/// Whether a published asset is a dataset or an algorithm that can be run against datasets.
#[derive(Clone, Copy, Debug, serde::Deserialize, Eq, Hash, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Dataset,
    Algorithm,
}

impl AssetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Dataset => "dataset",
            AssetType::Algorithm => "algorithm",
        }
    }
}

/// `attributes.main` of a metadata service: the description of the asset itself.
///
/// Equality compares the data model only; the key order the value was read in doesn't matter.
#[derive(Clone, Debug, serde::Deserialize, Eq, serde::Serialize)]
pub struct MetadataMain {
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    #[serde(rename = "dateCreated")]
    pub date_created: Timestamp,
    #[serde(
        rename = "datePublished",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub date_published_o: Option<Timestamp>,
    #[serde(rename = "author", default, skip_serializing_if = "Option::is_none")]
    pub author_o: Option<String>,
    #[serde(rename = "license", default, skip_serializing_if = "Option::is_none")]
    pub license_o: Option<String>,
    #[serde(rename = "cost", default, skip_serializing_if = "Option::is_none")]
    pub cost_o: Option<String>,
    #[serde(rename = "files")]
    pub file_v: Vec<FileEntry>,
    /// Present for assets of type `algorithm`.
    #[serde(rename = "algorithm", default, skip_serializing_if = "Option::is_none")]
    pub algorithm_o: Option<AlgorithmMetadata>,
    /// The `files` list exactly as it was read, for checksumming in document key order.
    #[serde(skip)]
    pub(crate) files_json_o: Option<serde_json::Value>,
}

impl MetadataMain {
    /// Decodes a metadata `main` object, keeping the raw `files` and `algorithm.container` values
    /// that the published checksums are computed over.
    pub(crate) fn from_json(main: serde_json::Value) -> Result<Self, serde_json::Error> {
        use serde::Deserialize;
        let files_json_o = main.get("files").cloned();
        let container_json_o = main
            .get("algorithm")
            .and_then(|algorithm| algorithm.get("container"))
            .cloned();
        let mut metadata_main = Self::deserialize(main)?;
        metadata_main.files_json_o = files_json_o;
        if let Some(algorithm) = metadata_main.algorithm_o.as_mut() {
            algorithm.container_json_o = container_json_o;
        }
        Ok(metadata_main)
    }
    /// Looks up a file by its `index` field.
    pub fn file_at_index(&self, index: u32) -> Option<&FileEntry> {
        self.file_v.iter().find(|file| file.index == index)
    }
    pub fn verify(&self, path: &FieldPath) -> Result<(), Error> {
        let files_path = path.field("files");
        for (position, file) in self.file_v.iter().enumerate() {
            file.verify(position, &files_path.index(position))?;
        }
        if self.algorithm_o.is_some() && self.asset_type != AssetType::Algorithm {
            return Err(Error::schema(
                &path.field("algorithm"),
                "only assets of type \"algorithm\" may carry an algorithm section",
            ));
        }
        Ok(())
    }
    /// The `files` list as compact JSON in document key order, with non-ASCII characters escaped.
    /// If the list was built or modified in memory, the model's field order is used instead.
    pub fn files_json(&self) -> Result<String, Error> {
        document_order_json(self.files_json_o.as_ref(), &self.file_v)
    }
}

impl PartialEq for MetadataMain {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.asset_type == other.asset_type
            && self.date_created == other.date_created
            && self.date_published_o == other.date_published_o
            && self.author_o == other.author_o
            && self.license_o == other.license_o
            && self.cost_o == other.cost_o
            && self.file_v == other.file_v
            && self.algorithm_o == other.algorithm_o
    }
}

#[derive(Clone, Debug, serde::Deserialize, Eq, serde::Serialize)]
pub struct AlgorithmMetadata {
    #[serde(rename = "language", default, skip_serializing_if = "Option::is_none")]
    pub language_o: Option<String>,
    #[serde(rename = "version", default, skip_serializing_if = "Option::is_none")]
    pub version_o: Option<String>,
    pub container: AlgorithmContainer,
    #[serde(skip)]
    pub(crate) container_json_o: Option<serde_json::Value>,
}

impl AlgorithmMetadata {
    /// Hex SHA-256 of the compact JSON of the container section, keys in document order.  Compute
    /// services pin trusted algorithms by this value.
    pub fn container_section_checksum(&self) -> Result<String, Error> {
        let container_json =
            document_order_json(self.container_json_o.as_ref(), &self.container)?;
        Ok(sha256_hex(container_json.as_bytes()))
    }
}

impl PartialEq for AlgorithmMetadata {
    fn eq(&self, other: &Self) -> bool {
        self.language_o == other.language_o
            && self.version_o == other.version_o
            && self.container == other.container
    }
}

/// The docker image an algorithm asset runs in.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct AlgorithmContainer {
    pub entrypoint: String,
    pub image: String,
    pub tag: String,
    #[serde(rename = "checksum", default, skip_serializing_if = "Option::is_none")]
    pub checksum_o: Option<String>,
}
