use crate::{DIDStr, Error, FieldPath};

/// A DID followed by a fragment, e.g. `did:op:0bc278fe...#keys-1`.  This is how public keys are
/// named and referenced within a DDO.
#[derive(Debug, Eq, Hash, PartialEq, pneutype::PneuStr)]
#[pneu_str(deserialize, serialize)]
#[repr(transparent)]
pub struct DIDResourceStr(str);

impl DIDResourceStr {
    pub fn did(&self) -> &DIDStr {
        let (did, _fragment) = self.0.split_once('#').expect("programmer error: this should not fail due to guarantees in construction of DIDResource");
        DIDStr::new_ref(did).expect("programmer error: this should not fail due to guarantees in construction of DIDResource")
    }
    pub fn fragment(&self) -> &str {
        let (_did, fragment) = self.0.split_once('#').expect("programmer error: this should not fail due to guarantees in construction of DIDResource");
        fragment
    }
}

impl pneutype::Validate for DIDResourceStr {
    type Data = str;
    type Error = Error;
    fn validate(data: &Self::Data) -> Result<(), Self::Error> {
        let (did_str, fragment) = data.split_once('#').ok_or_else(|| {
            Error::format(
                &FieldPath::root(),
                format!("malformed DID resource {:?}: missing '#' fragment", data),
            )
        })?;
        DIDStr::new_ref(did_str)?;
        if fragment.is_empty() {
            return Err(Error::format(
                &FieldPath::root(),
                format!("malformed DID resource {:?}: empty fragment", data),
            ));
        }
        if fragment.contains('#') || fragment.chars().any(char::is_whitespace) {
            return Err(Error::format(
                &FieldPath::root(),
                format!(
                    "malformed DID resource {:?}: fragment must not contain '#' or whitespace",
                    data
                ),
            ));
        }
        Ok(())
    }
}
