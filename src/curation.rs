/// Rating and listing state of an asset, aggregated from community votes.
#[derive(Clone, Debug, serde::Deserialize, PartialEq, serde::Serialize)]
pub struct Curation {
    #[serde(rename = "numVotes")]
    pub num_votes: u64,
    pub rating: f64,
    #[serde(rename = "isListed")]
    pub is_listed: bool,
    #[serde(rename = "schema", default, skip_serializing_if = "Option::is_none")]
    pub schema_o: Option<String>,
}
