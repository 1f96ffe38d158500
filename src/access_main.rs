use crate::Timestamp;

/// `attributes.main` of an access service: the terms under which the asset's files may be
/// downloaded.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct AccessMain {
    pub name: String,
    #[serde(rename = "creator", default, skip_serializing_if = "Option::is_none")]
    pub creator_o: Option<String>,
    #[serde(
        rename = "datePublished",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub date_published_o: Option<Timestamp>,
    /// Price in datatokens, as a decimal string.
    pub cost: String,
    /// Seconds the consumer has to use the service after ordering; 0 means no limit.
    pub timeout: u64,
}
