use std::collections::{BTreeMap, HashSet};

use crate::{Error, FieldPath, Timestamp, DID};

/// A credential embedded in the DDO granting capabilities (e.g. `read`, `update`, `deactivate`)
/// over the asset.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct VerifiableCredential {
    #[serde(rename = "@context")]
    pub context_v: Vec<String>,
    pub id: String,
    /// The granted capabilities.  Treated as a set (duplicates are rejected), but the order from
    /// the document is kept.
    #[serde(rename = "type")]
    pub capability_v: Vec<String>,
    /// Address of the issuer.
    pub issuer: String,
    #[serde(rename = "issuanceDate")]
    pub issuance_date: Timestamp,
    #[serde(rename = "credentialSubject")]
    pub credential_subject: CredentialSubject,
    pub proof: CredentialProof,
}

#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct CredentialSubject {
    pub id: DID,
    /// Any claims about the subject beyond its id.
    #[serde(flatten)]
    pub claim_m: BTreeMap<String, serde_json::Value>,
}

#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct CredentialProof {
    #[serde(rename = "type")]
    pub proof_type: String,
    pub created: Timestamp,
    #[serde(rename = "proofPurpose")]
    pub proof_purpose: String,
    #[serde(rename = "signatureValue")]
    pub signature_value: String,
    #[serde(rename = "creator", default, skip_serializing_if = "Option::is_none")]
    pub creator_o: Option<String>,
}

impl VerifiableCredential {
    pub fn grants(&self, capability: &str) -> bool {
        self.capability_v.iter().any(|c| c == capability)
    }
    pub fn verify(&self, path: &FieldPath) -> Result<(), Error> {
        for (i, context) in self.context_v.iter().enumerate() {
            url::Url::parse(context).map_err(|e| {
                Error::format(
                    &path.field("@context").index(i),
                    format!("malformed context URI {:?}: {}", context, e),
                )
            })?;
        }
        let mut capability_s = HashSet::new();
        for (i, capability) in self.capability_v.iter().enumerate() {
            if !capability_s.insert(capability.as_str()) {
                return Err(Error::schema(
                    &path.field("type").index(i),
                    format!("capability {:?} is listed more than once", capability),
                ));
            }
        }
        Ok(())
    }
}
