use crate::{Timestamp, DID};

/// `attributes.main` of a compute service: the terms under which algorithms may be run against
/// the asset without the data leaving its host.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct ComputeMain {
    pub name: String,
    #[serde(rename = "creator", default, skip_serializing_if = "Option::is_none")]
    pub creator_o: Option<String>,
    #[serde(
        rename = "datePublished",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub date_published_o: Option<Timestamp>,
    pub cost: String,
    pub timeout: u64,
    pub privacy: ComputePrivacy,
}

#[derive(Clone, Debug, Default, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct ComputePrivacy {
    #[serde(rename = "allowRawAlgorithm", default)]
    pub allow_raw_algorithm: bool,
    #[serde(rename = "allowNetworkAccess", default)]
    pub allow_network_access: bool,
    #[serde(rename = "allowAllPublishedAlgorithms", default)]
    pub allow_all_published_algorithms: bool,
    #[serde(rename = "publisherTrustedAlgorithms", default)]
    pub trusted_algorithm_v: Vec<TrustedAlgorithm>,
    #[serde(
        rename = "publisherTrustedAlgorithmPublishers",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub trusted_algorithm_publisher_v: Vec<String>,
}

impl ComputePrivacy {
    /// Decides whether an algorithm asset, described by its trusted-algorithm record and (if
    /// known) its publisher's address, may be run by this compute service.  Publisher addresses
    /// are compared case-insensitively.
    pub fn allows_algorithm(
        &self,
        algorithm: &TrustedAlgorithm,
        publisher_o: Option<&str>,
    ) -> bool {
        if self.allow_all_published_algorithms {
            return true;
        }
        if let Some(publisher) = publisher_o {
            if self
                .trusted_algorithm_publisher_v
                .iter()
                .any(|trusted_publisher| trusted_publisher.eq_ignore_ascii_case(publisher))
            {
                return true;
            }
        }
        self.trusted_algorithm_v
            .iter()
            .any(|trusted_algorithm| trusted_algorithm == algorithm)
    }
}

/// Pins an algorithm asset by DID and by the checksums of its files and container section, so that
/// a republished algorithm with different contents is no longer trusted.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct TrustedAlgorithm {
    pub did: DID,
    #[serde(rename = "filesChecksum")]
    pub files_checksum: String,
    #[serde(rename = "containerSectionChecksum")]
    pub container_section_checksum: String,
}
