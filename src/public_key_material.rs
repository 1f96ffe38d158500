use crate::{Error, FieldPath, KeyEncoding, KeyType};

const PEM_BEGIN: &str = "-----BEGIN ";
const PEM_END: &str = "-----END ";

/// The key material of a `publicKey` entry.  Exactly one of `publicKeyPem` and `publicKeyBase58`
/// is present on the wire; which one is determined by the entry's [`KeyType`].
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub enum PublicKeyMaterial {
    #[serde(rename = "publicKeyPem")]
    Pem(String),
    #[serde(rename = "publicKeyBase58")]
    Base58(String),
}

impl PublicKeyMaterial {
    pub fn encoding(&self) -> KeyEncoding {
        match self {
            Self::Pem(_) => KeyEncoding::Pem,
            Self::Base58(_) => KeyEncoding::Base58,
        }
    }
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pem(s) | Self::Base58(s) => s.as_str(),
        }
    }
    /// Checks that this material is what a key of the given type should carry, and that it is
    /// well-formed in its encoding.  `path` is the path of the owning `publicKey` entry.
    pub fn verify(&self, key_type: KeyType, path: &FieldPath) -> Result<(), Error> {
        let field_path = path.field(self.encoding().field_name());
        if self.encoding() != key_type.encoding() {
            return Err(Error::key_format(
                &field_path,
                format!(
                    "key type {} requires {}, not {}",
                    key_type,
                    key_type.encoding(),
                    self.encoding()
                ),
            ));
        }
        match self {
            Self::Pem(pem) => {
                let pem = pem.trim();
                if !pem.starts_with(PEM_BEGIN) || !pem.contains(PEM_END) {
                    return Err(Error::key_format(
                        &field_path,
                        "PEM key material must be wrapped in -----BEGIN/-----END armor",
                    ));
                }
            }
            Self::Base58(base58) => {
                let decoded = bs58::decode(base58).into_vec().map_err(|e| {
                    Error::key_format(&field_path, format!("invalid Base58 key material: {}", e))
                })?;
                let decoded_lengths = key_type.decoded_lengths();
                if !decoded_lengths.contains(&decoded.len()) {
                    return Err(Error::key_format(
                        &field_path,
                        format!(
                            "{} key material decodes to {} bytes; expected one of {:?}",
                            key_type,
                            decoded.len(),
                            decoded_lengths
                        ),
                    ));
                }
            }
        }
        Ok(())
    }
}
