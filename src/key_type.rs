use crate::{Error, FieldPath, KeyEncoding};

/// The `type` tag of a `publicKey` entry.  Each key type determines which material field the entry
/// must carry (see [`KeyType::encoding`]).
#[derive(
    Clone, Copy, Debug, serde::Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Serialize,
)]
pub enum KeyType {
    RsaVerificationKey2018,
    RsaPublicKeyExchangeKey2018,
    Ed25519VerificationKey2018,
    EcdsaSecp256k1VerificationKey2019,
}

impl KeyType {
    pub const VARIANTS: [KeyType; 4] = [
        KeyType::RsaVerificationKey2018,
        KeyType::RsaPublicKeyExchangeKey2018,
        KeyType::Ed25519VerificationKey2018,
        KeyType::EcdsaSecp256k1VerificationKey2019,
    ];
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyType::RsaVerificationKey2018 => "RsaVerificationKey2018",
            KeyType::RsaPublicKeyExchangeKey2018 => "RsaPublicKeyExchangeKey2018",
            KeyType::Ed25519VerificationKey2018 => "Ed25519VerificationKey2018",
            KeyType::EcdsaSecp256k1VerificationKey2019 => "EcdsaSecp256k1VerificationKey2019",
        }
    }
    /// The material field a key of this type is published under.
    pub fn encoding(&self) -> KeyEncoding {
        match self {
            KeyType::RsaVerificationKey2018 | KeyType::RsaPublicKeyExchangeKey2018 => {
                KeyEncoding::Pem
            }
            KeyType::Ed25519VerificationKey2018 | KeyType::EcdsaSecp256k1VerificationKey2019 => {
                KeyEncoding::Base58
            }
        }
    }
    /// Permitted lengths (in bytes) of the decoded key, for Base58-encoded key types.
    pub fn decoded_lengths(&self) -> &'static [usize] {
        match self {
            KeyType::Ed25519VerificationKey2018 => &[32],
            // Compressed or uncompressed SEC1 point.
            KeyType::EcdsaSecp256k1VerificationKey2019 => &[33, 65],
            KeyType::RsaVerificationKey2018 | KeyType::RsaPublicKeyExchangeKey2018 => &[],
        }
    }
}

impl std::fmt::Display for KeyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for KeyType {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyType::VARIANTS
            .into_iter()
            .find(|key_type| key_type.as_str() == s)
            .ok_or_else(|| {
                Error::key_format(
                    &FieldPath::root(),
                    format!("unrecognized public key type {:?}", s),
                )
            })
    }
}
