use crate::{
    sha256_hex, AdditionalInformation, Curation, DIDStr, Error, FieldPath, ServiceAttributes,
    ServiceMain, ServiceType,
};

/// The placeholder in a `serviceEndpoint` template that stands for the owning document's DID.
pub const DID_PLACEHOLDER: &str = "{did}";

/// An element of the DDO's `service` list.  The service's `type` is carried by the variant of
/// `attributes.main`, so a `metadata` service can't be given an `access`-shaped `main`.
#[derive(Clone, Debug, serde::Deserialize, PartialEq)]
#[serde(try_from = "ServiceEntryJSON")]
pub struct ServiceEntry {
    /// Unique within the document's `service` list.
    pub index: u32,
    /// URL template; may contain the `{did}` placeholder.
    pub service_endpoint: String,
    pub template_id_o: Option<String>,
    pub attributes: ServiceAttributes,
}

impl ServiceEntry {
    /// Returns None for services of a type that isn't modeled (see `ServiceMain::Other`).
    pub fn service_type(&self) -> Option<ServiceType> {
        self.attributes.main.service_type()
    }
    pub fn service_type_str(&self) -> &str {
        self.attributes.main.service_type_str()
    }
    /// Expands the `{did}` placeholder of the endpoint template with the given DID and parses the
    /// result as a URL.
    pub fn endpoint_for(&self, did: &DIDStr) -> Result<url::Url, Error> {
        let endpoint = self.service_endpoint.replace(DID_PLACEHOLDER, did.as_str());
        url::Url::parse(&endpoint).map_err(|e| {
            Error::format(
                &FieldPath::root().field("serviceEndpoint"),
                format!("malformed service endpoint {:?}: {}", endpoint, e),
            )
        })
    }
    /// For a metadata service, the hex SHA-256 of `encryptedFiles` (empty if absent) followed by
    /// the compact JSON of the `files` list in document key order (see `MetadataMain::files_json`).
    /// None for every other service type.
    pub fn files_checksum(&self) -> Result<Option<String>, Error> {
        let metadata_main = match self.attributes.main.as_metadata() {
            Some(metadata_main) => metadata_main,
            None => return Ok(None),
        };
        let mut preimage = self
            .attributes
            .encrypted_files_o
            .clone()
            .unwrap_or_default();
        preimage.push_str(&metadata_main.files_json()?);
        Ok(Some(sha256_hex(preimage.as_bytes())))
    }
    /// Checks the parts of this entry that don't depend on the rest of the document.  `path` is
    /// the path of this entry within the document.
    pub fn verify(&self, did: &DIDStr, path: &FieldPath) -> Result<(), Error> {
        self.endpoint_for(did)
            .map_err(|e| e.at(&path.field("serviceEndpoint")))?;
        let main_path = path.field("attributes").field("main");
        if let ServiceMain::Metadata(metadata_main) = &self.attributes.main {
            metadata_main.verify(&main_path)?;
        }
        if let Some(additional_information) = self.attributes.additional_information_o.as_ref() {
            let links_path = path
                .field("attributes")
                .field("additionalInformation")
                .field("links");
            for (i, link) in additional_information.link_v.iter().enumerate() {
                url::Url::parse(&link.url).map_err(|e| {
                    Error::format(
                        &links_path.index(i).field("url"),
                        format!("malformed link URL {:?}: {}", link.url, e),
                    )
                })?;
            }
        }
        Ok(())
    }
}

/// Wire form of a service entry, before `attributes.main` has been decoded according to `type`.
#[derive(serde::Deserialize)]
struct ServiceEntryJSON {
    #[serde(rename = "type")]
    service_type: String,
    index: u32,
    #[serde(rename = "serviceEndpoint")]
    service_endpoint: String,
    #[serde(rename = "templateId", default)]
    template_id_o: Option<String>,
    attributes: ServiceAttributesJSON,
}

#[derive(serde::Deserialize)]
struct ServiceAttributesJSON {
    main: serde_json::Value,
    #[serde(rename = "additionalInformation", default)]
    additional_information_o: Option<AdditionalInformation>,
    #[serde(rename = "curation", default)]
    curation_o: Option<Curation>,
    #[serde(rename = "encryptedFiles", default)]
    encrypted_files_o: Option<String>,
}

impl TryFrom<ServiceEntryJSON> for ServiceEntry {
    type Error = serde_json::Error;
    fn try_from(service_entry_json: ServiceEntryJSON) -> Result<Self, Self::Error> {
        let attributes_json = service_entry_json.attributes;
        let main = ServiceMain::from_type_and_value(
            &service_entry_json.service_type,
            attributes_json.main,
        )?;
        Ok(Self {
            index: service_entry_json.index,
            service_endpoint: service_entry_json.service_endpoint,
            template_id_o: service_entry_json.template_id_o,
            attributes: ServiceAttributes {
                main,
                additional_information_o: attributes_json.additional_information_o,
                curation_o: attributes_json.curation_o,
                encrypted_files_o: attributes_json.encrypted_files_o,
            },
        })
    }
}

#[derive(serde::Serialize)]
struct ServiceEntryRef<'a> {
    #[serde(rename = "type")]
    service_type: &'a str,
    index: u32,
    #[serde(rename = "serviceEndpoint")]
    service_endpoint: &'a str,
    #[serde(rename = "templateId", skip_serializing_if = "Option::is_none")]
    template_id_o: Option<&'a str>,
    attributes: &'a ServiceAttributes,
}

impl serde::Serialize for ServiceEntry {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let service_entry_ref = ServiceEntryRef {
            service_type: self.service_type_str(),
            index: self.index,
            service_endpoint: self.service_endpoint.as_str(),
            template_id_o: self.template_id_o.as_deref(),
            attributes: &self.attributes,
        };
        serde::Serialize::serialize(&service_entry_ref, serializer)
    }
}
