use crate::DIDResourceStr;

/// Owned form of [`DIDResourceStr`].
#[derive(Clone, Debug, Eq, Hash, PartialEq, pneutype::PneuString)]
#[pneu_string(
    as_pneu_str = "as_did_resource_str",
    borrow = "DIDResourceStr",
    deserialize,
    serialize
)]
pub struct DIDResource(String);
