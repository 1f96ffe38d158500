use crate::DIDResource;

/// An element of the DDO's `authentication` list; refers to one of the document's public keys.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct AuthenticationEntry {
    #[serde(rename = "type")]
    pub authentication_type: String,
    #[serde(rename = "publicKey")]
    pub public_key: DIDResource,
}
