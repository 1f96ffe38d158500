mod access_main;
mod additional_information;
mod authentication_entry;
mod checksums;
mod compute_main;
mod curation;
mod did;
mod did_document;
mod did_resource;
mod did_resource_str;
mod did_str;
mod digest;
mod error;
mod field_path;
mod file_entry;
mod key_encoding;
mod key_type;
mod metadata_main;
mod parse_options;
mod proof;
mod public_key_entry;
mod public_key_material;
mod schema_check;
mod service_attributes;
mod service_entry;
mod service_main;
mod service_type;
mod timestamp;
mod verifiable_credential;

pub(crate) use crate::digest::{canonical_json, document_order_json, sha256_hex};
pub use crate::{
    access_main::AccessMain,
    additional_information::{AdditionalInformation, Link},
    authentication_entry::AuthenticationEntry,
    checksums::Checksums,
    compute_main::{ComputeMain, ComputePrivacy, TrustedAlgorithm},
    curation::Curation,
    did::DID,
    did_document::DIDDocument,
    did_resource::DIDResource,
    did_resource_str::DIDResourceStr,
    did_str::DIDStr,
    error::Error,
    field_path::FieldPath,
    file_entry::FileEntry,
    key_encoding::KeyEncoding,
    key_type::KeyType,
    metadata_main::{AlgorithmContainer, AlgorithmMetadata, AssetType, MetadataMain},
    parse_options::ParseOptions,
    proof::Proof,
    public_key_entry::PublicKeyEntry,
    public_key_material::PublicKeyMaterial,
    service_attributes::ServiceAttributes,
    service_entry::{ServiceEntry, DID_PLACEHOLDER},
    service_main::ServiceMain,
    service_type::ServiceType,
    timestamp::Timestamp,
    verifiable_credential::{CredentialProof, CredentialSubject, VerifiableCredential},
};

pub type Result<T> = std::result::Result<T, Error>;
