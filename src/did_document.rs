use std::collections::{HashMap, HashSet};

use crate::{
    canonical_json, schema_check, sha256_hex, AuthenticationEntry, DIDResourceStr, Error,
    FieldPath, MetadataMain, ParseOptions, Proof, PublicKeyEntry, ServiceEntry, ServiceType,
    TrustedAlgorithm, VerifiableCredential, DID,
};

/// The data model for did:op DID documents (DDOs), which describe a published asset: the keys that
/// control it, the credentials granted over it, and the services (metadata, access, compute) through
/// which it is offered.
///
/// Use the `parse_*` constructors rather than `serde_json::from_str::<DIDDocument>(s)` directly;
/// they run the structural walk first (so errors carry the path of the offending field) and check
/// the cross-field invariants afterward.
///
/// Note that if you want a stable byte representation of this DID document (e.g. to hash it), you
/// MUST use serialize_canonically or serialize_canonically_to_writer, which produce JCS (JSON
/// Canonicalization Scheme) output.  serde_json::to_string does not.
#[derive(Clone, Debug, serde::Deserialize, PartialEq, serde::Serialize)]
pub struct DIDDocument {
    #[serde(rename = "@context")]
    pub context: String,
    /// The serde-rename to "id" is intentional.  The field name is mandated, and its value is the
    /// DID of the asset.
    #[serde(rename = "id")]
    pub did: DID,
    #[serde(rename = "created", default, skip_serializing_if = "Option::is_none")]
    pub created_o: Option<crate::Timestamp>,
    #[serde(rename = "updated", default, skip_serializing_if = "Option::is_none")]
    pub updated_o: Option<crate::Timestamp>,
    #[serde(rename = "publicKey")]
    pub public_key_v: Vec<PublicKeyEntry>,
    #[serde(
        rename = "authentication",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub authentication_v: Vec<AuthenticationEntry>,
    /// Signature over the document.  Checking it requires resolving `creator` to key material, which
    /// is outside the scope of this crate.
    #[serde(rename = "proof", default, skip_serializing_if = "Option::is_none")]
    pub proof_o: Option<Proof>,
    #[serde(
        rename = "verifiableCredential",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub verifiable_credential_v: Vec<VerifiableCredential>,
    #[serde(rename = "service")]
    pub service_v: Vec<ServiceEntry>,
}

impl DIDDocument {
    /// Parses JSON text using the default ParseOptions.
    pub fn parse_str(s: &str) -> Result<Self, Error> {
        Self::parse_str_with_options(s, &ParseOptions::default())
    }
    pub fn parse_str_with_options(s: &str, parse_options: &ParseOptions) -> Result<Self, Error> {
        tracing::debug!("parsing DID document from {} bytes of text", s.len());
        Self::check_input_len(s.len(), parse_options)?;
        let value: serde_json::Value = serde_json::from_str(s).map_err(|e| {
            Error::schema(&FieldPath::root(), format!("invalid JSON: {}", e))
        })?;
        Self::parse_value(&value)
    }
    /// Parses JSON bytes using the default ParseOptions.  The bytes must be UTF-8.
    pub fn parse_slice(bytes: &[u8]) -> Result<Self, Error> {
        Self::parse_slice_with_options(bytes, &ParseOptions::default())
    }
    pub fn parse_slice_with_options(
        bytes: &[u8],
        parse_options: &ParseOptions,
    ) -> Result<Self, Error> {
        Self::check_input_len(bytes.len(), parse_options)?;
        let s = std::str::from_utf8(bytes).map_err(|e| {
            Error::schema(&FieldPath::root(), format!("input is not valid UTF-8: {}", e))
        })?;
        Self::parse_str_with_options(s, parse_options)
    }
    /// Parses an already-decoded JSON tree.
    pub fn parse_value(value: &serde_json::Value) -> Result<Self, Error> {
        use serde::Deserialize;
        schema_check::check_document(value)?;
        let did_document = Self::deserialize(value).map_err(|e| {
            Error::schema(
                &FieldPath::root(),
                format!("failed to decode DID document: {}", e),
            )
        })?;
        did_document.validate()?;
        tracing::debug!(
            "parsed DID document {} with {} public key(s) and {} service(s)",
            did_document.did,
            did_document.public_key_v.len(),
            did_document.service_v.len()
        );
        Ok(did_document)
    }
    fn check_input_len(len: usize, parse_options: &ParseOptions) -> Result<(), Error> {
        if len > parse_options.max_input_len {
            return Err(Error::InputTooLarge {
                len,
                limit: parse_options.max_input_len,
            });
        }
        Ok(())
    }
    /// Checks the invariants that span more than one field: unique service indices, unique public
    /// key ids, authentication entries referring to listed keys, key material matching key types,
    /// file indices matching positions, and well-formed URLs.  The parse constructors call this, but
    /// it's also useful after building or modifying a DIDDocument in memory.
    pub fn validate(&self) -> Result<(), Error> {
        let path = FieldPath::root();
        url::Url::parse(&self.context).map_err(|e| {
            Error::format(
                &path.field("@context"),
                format!("malformed context URI {:?}: {}", self.context, e),
            )
        })?;

        let public_keys_path = path.field("publicKey");
        let mut key_id_s = HashSet::new();
        for (i, public_key) in self.public_key_v.iter().enumerate() {
            let public_key_path = public_keys_path.index(i);
            if !key_id_s.insert(public_key.id.as_str()) {
                return Err(Error::key_format(
                    &public_key_path.field("id"),
                    format!("public key id {} is listed more than once", public_key.id),
                ));
            }
            public_key.verify(&public_key_path)?;
        }

        let authentication_path = path.field("authentication");
        for (i, authentication) in self.authentication_v.iter().enumerate() {
            if !key_id_s.contains(authentication.public_key.as_str()) {
                return Err(Error::key_format(
                    &authentication_path.index(i).field("publicKey"),
                    format!(
                        "authentication refers to public key {}, which is not listed in publicKey",
                        authentication.public_key
                    ),
                ));
            }
        }

        let credentials_path = path.field("verifiableCredential");
        for (i, verifiable_credential) in self.verifiable_credential_v.iter().enumerate() {
            verifiable_credential.verify(&credentials_path.index(i))?;
        }

        let services_path = path.field("service");
        let mut position_m: HashMap<u32, usize> = HashMap::new();
        for (position, service) in self.service_v.iter().enumerate() {
            if let Some(&first_position) = position_m.get(&service.index) {
                return Err(Error::DuplicateIndex {
                    index: service.index,
                    first_position,
                    second_position: position,
                });
            }
            position_m.insert(service.index, position);
            service.verify(&self.did, &services_path.index(position))?;
        }
        Ok(())
    }

    /// This method is what you should use if you want to canonically serialize this DID document (to
    /// a String).  See also serialize_canonically_to_writer.
    pub fn serialize_canonically(&self) -> Result<String, Error> {
        canonical_json(self)
    }
    /// This method is what you should use if you want to canonically serialize this DID document
    /// (into a std::io::Write).  See also serialize_canonically.
    pub fn serialize_canonically_to_writer<W: std::io::Write>(
        &self,
        write: &mut W,
    ) -> Result<(), Error> {
        serde_json_canonicalizer::to_writer(self, write).map_err(|e| {
            Error::Serialization(
                format!("failed to serialize DID document to canonical JSON: {}", e).into(),
            )
        })
    }
    /// Lower-case hex SHA-256 of the canonical serialization.  Two documents that differ only in key
    /// order or whitespace have the same content hash.
    pub fn content_hash(&self) -> Result<String, Error> {
        Ok(sha256_hex(self.serialize_canonically()?.as_bytes()))
    }

    pub fn service_by_index(&self, index: u32) -> Option<&ServiceEntry> {
        self.service_v.iter().find(|service| service.index == index)
    }
    /// Returns the first service of the given type, in document order.
    pub fn service_by_type(&self, service_type: ServiceType) -> Option<&ServiceEntry> {
        self.service_v
            .iter()
            .find(|service| service.service_type() == Some(service_type))
    }
    pub fn public_key(&self, key_id: &DIDResourceStr) -> Option<&PublicKeyEntry> {
        self.public_key_v
            .iter()
            .find(|public_key| public_key.id.as_did_resource_str() == key_id)
    }
    /// The `attributes.main` of the metadata service, if there is one.
    pub fn metadata_main(&self) -> Option<&MetadataMain> {
        self.service_by_type(ServiceType::Metadata)
            .and_then(|service| service.attributes.main.as_metadata())
    }
    /// If this document describes an algorithm asset, this builds the record that another asset's
    /// compute service would list in `publisherTrustedAlgorithms` to trust exactly this version of
    /// the algorithm.  Returns None for datasets and for documents with no metadata service.
    pub fn trusted_algorithm_entry(&self) -> Result<Option<TrustedAlgorithm>, Error> {
        let metadata_service = match self.service_by_type(ServiceType::Metadata) {
            Some(metadata_service) => metadata_service,
            None => return Ok(None),
        };
        let algorithm = match metadata_service
            .attributes
            .main
            .as_metadata()
            .and_then(|metadata_main| metadata_main.algorithm_o.as_ref())
        {
            Some(algorithm) => algorithm,
            None => return Ok(None),
        };
        let files_checksum = metadata_service.files_checksum()?.ok_or_else(|| {
            Error::Serialization("metadata service has no files to checksum".into())
        })?;
        Ok(Some(TrustedAlgorithm {
            did: self.did.clone(),
            files_checksum,
            container_section_checksum: algorithm.container_section_checksum()?,
        }))
    }
}
