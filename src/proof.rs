use crate::{Checksums, Timestamp};

/// The document-level integrity proof.  This crate carries it but never verifies
/// `signature_value`; that requires resolving `creator` to key material.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct Proof {
    pub created: Timestamp,
    /// Address of the signer.
    pub creator: String,
    #[serde(rename = "signatureValue")]
    pub signature_value: String,
    #[serde(rename = "type")]
    pub proof_type: String,
    pub checksum: Checksums,
}
