use crate::{DIDResource, Error, FieldPath};

/// Borrowed form of a `did:op` DID, i.e. `did:op:<hex-identifier>`.
#[derive(Debug, Eq, Hash, PartialEq, pneutype::PneuStr)]
#[pneu_str(deserialize, serialize)]
#[repr(transparent)]
pub struct DIDStr(str);

impl DIDStr {
    pub const PREFIX: &'static str = "did:op:";

    /// This returns the method-specific identifier, which for did:op is a hex string (typically the
    /// 64-digit hash that the asset was registered under).
    pub fn identifier(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).expect(
            "programmer error: this should not be possible due to validation in the constructor",
        )
    }
    /// The identifier with a `0x` prefix, as used when the DID is handed to an Ethereum contract.
    pub fn identifier_0x(&self) -> String {
        format!("0x{}", self.identifier())
    }
    pub fn with_fragment(&self, fragment: &str) -> Result<DIDResource, Error> {
        DIDResource::try_from(format!("{}#{}", &self.0, fragment))
    }
}

impl pneutype::Validate for DIDStr {
    type Data = str;
    type Error = Error;
    fn validate(data: &Self::Data) -> Result<(), Self::Error> {
        let identifier = data.strip_prefix(Self::PREFIX).ok_or_else(|| {
            Error::format(
                &FieldPath::root(),
                format!("malformed DID {:?}: expected it to start with \"did:op:\"", data),
            )
        })?;
        if identifier.is_empty() {
            return Err(Error::format(
                &FieldPath::root(),
                format!("malformed DID {:?}: empty method-specific identifier", data),
            ));
        }
        if let Some(c) = identifier.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(Error::format(
                &FieldPath::root(),
                format!(
                    "malformed DID {:?}: identifier must be hex, but contains {:?}",
                    data, c
                ),
            ));
        }
        Ok(())
    }
}
