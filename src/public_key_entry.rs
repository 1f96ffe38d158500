use crate::{DIDResource, Error, FieldPath, KeyType, PublicKeyMaterial, DID};

/// An element of the DDO's `publicKey` list.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct PublicKeyEntry {
    /// DID plus fragment naming this key, e.g. `did:op:0bc2...#keys-1`.
    pub id: DIDResource,
    #[serde(rename = "type")]
    pub key_type: KeyType,
    /// The DID controlling this key.  Need not be the DDO's own `id`.
    pub owner: DID,
    #[serde(flatten)]
    pub material: PublicKeyMaterial,
}

impl PublicKeyEntry {
    pub fn verify(&self, path: &FieldPath) -> Result<(), Error> {
        self.material.verify(self.key_type, path)
    }
}
