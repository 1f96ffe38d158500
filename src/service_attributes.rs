use crate::{AdditionalInformation, Curation, ServiceMain};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ServiceAttributes {
    pub main: ServiceMain,
    #[serde(
        rename = "additionalInformation",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_information_o: Option<AdditionalInformation>,
    #[serde(rename = "curation", skip_serializing_if = "Option::is_none")]
    pub curation_o: Option<Curation>,
    /// Opaque ciphertext of the asset's file URLs; only metadata services carry it.
    #[serde(rename = "encryptedFiles", skip_serializing_if = "Option::is_none")]
    pub encrypted_files_o: Option<String>,
}
