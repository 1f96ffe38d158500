//! Structural walk over a decoded JSON tree, run before the typed decode so that a malformed DDO
//! is reported with the path of the first offending field (in document order) and the right kind of
//! error.  The typed decode that follows can then only fail on things this walk does not model.

use serde_json::{Map, Value};

use crate::{
    Checksums, DIDResourceStr, DIDStr, Error, FieldPath, KeyEncoding, KeyType, PublicKeyMaterial,
    ServiceType, Timestamp,
};

type Object = Map<String, Value>;

pub(crate) fn check_document(value: &Value) -> Result<(), Error> {
    let path = FieldPath::root();
    let document = as_object(value, &path)?;

    let context = required_str(document, "@context", &path)?;
    check_url(context, &path.field("@context"))?;
    check_did(required_str(document, "id", &path)?, &path.field("id"))?;
    for name in ["created", "updated"] {
        if let Some(s) = optional_str(document, name, &path)? {
            check_timestamp(s, &path.field(name))?;
        }
    }

    let public_keys_path = path.field("publicKey");
    for (i, public_key) in required_array(document, "publicKey", &path)?
        .iter()
        .enumerate()
    {
        check_public_key(public_key, &public_keys_path.index(i))?;
    }

    if let Some(authentication_v) = optional_array(document, "authentication", &path)? {
        let authentication_path = path.field("authentication");
        for (i, authentication) in authentication_v.iter().enumerate() {
            let entry_path = authentication_path.index(i);
            let entry = as_object(authentication, &entry_path)?;
            required_str(entry, "type", &entry_path)?;
            check_did_resource(
                required_str(entry, "publicKey", &entry_path)?,
                &entry_path.field("publicKey"),
            )?;
        }
    }

    if let Some(proof) = optional(document, "proof") {
        check_proof(proof, &path.field("proof"))?;
    }

    if let Some(credential_v) = optional_array(document, "verifiableCredential", &path)? {
        let credentials_path = path.field("verifiableCredential");
        for (i, credential) in credential_v.iter().enumerate() {
            check_verifiable_credential(credential, &credentials_path.index(i))?;
        }
    }

    let services_path = path.field("service");
    for (i, service) in required_array(document, "service", &path)?
        .iter()
        .enumerate()
    {
        check_service(service, &services_path.index(i))?;
    }

    tracing::trace!("structural check passed");
    Ok(())
}

fn check_public_key(value: &Value, path: &FieldPath) -> Result<(), Error> {
    let entry = as_object(value, path)?;
    check_did_resource(required_str(entry, "id", path)?, &path.field("id"))?;
    let key_type = required_str(entry, "type", path)?
        .parse::<KeyType>()
        .map_err(|e| e.at(&path.field("type")))?;
    check_did(required_str(entry, "owner", path)?, &path.field("owner"))?;

    let mut present_v = Vec::new();
    for encoding in KeyEncoding::VARIANTS {
        if let Some(material) = entry.get(encoding.field_name()) {
            present_v.push((encoding, material));
        }
    }
    let (encoding, material) = match present_v.as_slice() {
        [] => {
            return Err(Error::key_format(
                path,
                format!(
                    "key type {} requires {}, but no key material is present",
                    key_type,
                    key_type.encoding()
                ),
            ));
        }
        [(encoding, material)] => (*encoding, *material),
        _ => {
            return Err(Error::key_format(
                path,
                "exactly one of publicKeyPem and publicKeyBase58 may be present",
            ));
        }
    };
    let material_path = path.field(encoding.field_name());
    let material = as_str(material, &material_path)?.to_string();
    let material = match encoding {
        KeyEncoding::Pem => PublicKeyMaterial::Pem(material),
        KeyEncoding::Base58 => PublicKeyMaterial::Base58(material),
    };
    material.verify(key_type, path)
}

fn check_proof(value: &Value, path: &FieldPath) -> Result<(), Error> {
    let proof = as_object(value, path)?;
    check_timestamp(
        required_str(proof, "created", path)?,
        &path.field("created"),
    )?;
    for name in ["creator", "signatureValue", "type"] {
        required_str(proof, name, path)?;
    }
    let checksum_path = path.field("checksum");
    let checksum = as_object(required(proof, "checksum", path)?, &checksum_path)?;
    let mut entry_v = Vec::with_capacity(checksum.len());
    for (key, value) in checksum.iter() {
        entry_v.push((key.as_str(), as_str(value, &checksum_path.field(key))?));
    }
    Checksums::from_keyed_entries(entry_v).map_err(|e| e.at(&checksum_path))?;
    Ok(())
}

fn check_verifiable_credential(value: &Value, path: &FieldPath) -> Result<(), Error> {
    let credential = as_object(value, path)?;
    let contexts_path = path.field("@context");
    for (i, context) in required_array(credential, "@context", path)?
        .iter()
        .enumerate()
    {
        check_url(as_str(context, &contexts_path.index(i))?, &contexts_path.index(i))?;
    }
    required_str(credential, "id", path)?;
    let types_path = path.field("type");
    for (i, capability) in required_array(credential, "type", path)?
        .iter()
        .enumerate()
    {
        as_str(capability, &types_path.index(i))?;
    }
    required_str(credential, "issuer", path)?;
    check_timestamp(
        required_str(credential, "issuanceDate", path)?,
        &path.field("issuanceDate"),
    )?;

    let subject_path = path.field("credentialSubject");
    let subject = as_object(
        required(credential, "credentialSubject", path)?,
        &subject_path,
    )?;
    check_did(
        required_str(subject, "id", &subject_path)?,
        &subject_path.field("id"),
    )?;

    let proof_path = path.field("proof");
    let proof = as_object(required(credential, "proof", path)?, &proof_path)?;
    required_str(proof, "type", &proof_path)?;
    check_timestamp(
        required_str(proof, "created", &proof_path)?,
        &proof_path.field("created"),
    )?;
    required_str(proof, "proofPurpose", &proof_path)?;
    required_str(proof, "signatureValue", &proof_path)?;
    optional_str(proof, "creator", &proof_path)?;
    Ok(())
}

fn check_service(value: &Value, path: &FieldPath) -> Result<(), Error> {
    let service = as_object(value, path)?;
    let service_type = required_str(service, "type", path)?;
    required_u32(service, "index", path)?;
    required_str(service, "serviceEndpoint", path)?;
    optional_str(service, "templateId", path)?;

    let attributes_path = path.field("attributes");
    let attributes = as_object(required(service, "attributes", path)?, &attributes_path)?;
    let main_path = attributes_path.field("main");
    let main = as_object(required(attributes, "main", &attributes_path)?, &main_path)?;
    match service_type.parse::<ServiceType>() {
        Ok(ServiceType::Metadata) => check_metadata_main(main, &main_path)?,
        Ok(ServiceType::Access) => check_access_main(main, &main_path)?,
        Ok(ServiceType::Compute) => {
            check_access_main(main, &main_path)?;
            let privacy_path = main_path.field("privacy");
            check_compute_privacy(
                required(main, "privacy", &main_path)?,
                &privacy_path,
            )?;
        }
        Err(_) => {
            tracing::debug!(
                "service at {} has unrecognized type {:?}; keeping its main section as-is",
                path,
                service_type
            );
        }
    }

    if let Some(additional_information) = optional(attributes, "additionalInformation") {
        check_additional_information(
            additional_information,
            &attributes_path.field("additionalInformation"),
        )?;
    }
    if let Some(curation) = optional(attributes, "curation") {
        let curation_path = attributes_path.field("curation");
        let curation = as_object(curation, &curation_path)?;
        required_u64(curation, "numVotes", &curation_path)?;
        let rating = required(curation, "rating", &curation_path)?;
        if !rating.is_number() {
            return Err(Error::schema(
                &curation_path.field("rating"),
                "expected a number",
            ));
        }
        required_bool(curation, "isListed", &curation_path)?;
        optional_str(curation, "schema", &curation_path)?;
    }
    optional_str(attributes, "encryptedFiles", &attributes_path)?;
    Ok(())
}

fn check_metadata_main(main: &Object, path: &FieldPath) -> Result<(), Error> {
    required_str(main, "name", path)?;
    let asset_type = required_str(main, "type", path)?;
    if asset_type != "dataset" && asset_type != "algorithm" {
        return Err(Error::schema(
            &path.field("type"),
            format!(
                "asset type must be \"dataset\" or \"algorithm\", not {:?}",
                asset_type
            ),
        ));
    }
    check_timestamp(
        required_str(main, "dateCreated", path)?,
        &path.field("dateCreated"),
    )?;
    if let Some(date_published) = optional_str(main, "datePublished", path)? {
        check_timestamp(date_published, &path.field("datePublished"))?;
    }
    for name in ["author", "license", "cost"] {
        optional_str(main, name, path)?;
    }

    let files_path = path.field("files");
    for (i, file) in required_array(main, "files", path)?.iter().enumerate() {
        let file_path = files_path.index(i);
        let file = as_object(file, &file_path)?;
        required_u32(file, "index", &file_path)?;
        required_str(file, "url", &file_path)?;
        required_str(file, "contentType", &file_path)?;
        for name in [
            "checksum",
            "checksumType",
            "contentLength",
            "encoding",
            "compression",
            "resourceId",
        ] {
            optional_str(file, name, &file_path)?;
        }
    }

    if let Some(algorithm) = optional(main, "algorithm") {
        let algorithm_path = path.field("algorithm");
        let algorithm = as_object(algorithm, &algorithm_path)?;
        optional_str(algorithm, "language", &algorithm_path)?;
        optional_str(algorithm, "version", &algorithm_path)?;
        let container_path = algorithm_path.field("container");
        let container = as_object(
            required(algorithm, "container", &algorithm_path)?,
            &container_path,
        )?;
        for name in ["entrypoint", "image", "tag"] {
            required_str(container, name, &container_path)?;
        }
        optional_str(container, "checksum", &container_path)?;
    }
    Ok(())
}

/// Also covers the fields a compute service's `main` shares with an access service's.
fn check_access_main(main: &Object, path: &FieldPath) -> Result<(), Error> {
    required_str(main, "name", path)?;
    optional_str(main, "creator", path)?;
    if let Some(date_published) = optional_str(main, "datePublished", path)? {
        check_timestamp(date_published, &path.field("datePublished"))?;
    }
    required_str(main, "cost", path)?;
    required_u64(main, "timeout", path)?;
    Ok(())
}

fn check_compute_privacy(value: &Value, path: &FieldPath) -> Result<(), Error> {
    let privacy = as_object(value, path)?;
    for name in [
        "allowRawAlgorithm",
        "allowNetworkAccess",
        "allowAllPublishedAlgorithms",
    ] {
        if let Some(flag) = privacy.get(name) {
            if !flag.is_boolean() {
                return Err(Error::schema(&path.field(name), "expected a boolean"));
            }
        }
    }
    if let Some(trusted_algorithm_v) = optional_array(privacy, "publisherTrustedAlgorithms", path)?
    {
        let trusted_algorithms_path = path.field("publisherTrustedAlgorithms");
        for (i, trusted_algorithm) in trusted_algorithm_v.iter().enumerate() {
            let entry_path = trusted_algorithms_path.index(i);
            let entry = as_object(trusted_algorithm, &entry_path)?;
            check_did(
                required_str(entry, "did", &entry_path)?,
                &entry_path.field("did"),
            )?;
            required_str(entry, "filesChecksum", &entry_path)?;
            required_str(entry, "containerSectionChecksum", &entry_path)?;
        }
    }
    if let Some(publisher_v) = optional_array(privacy, "publisherTrustedAlgorithmPublishers", path)?
    {
        let publishers_path = path.field("publisherTrustedAlgorithmPublishers");
        for (i, publisher) in publisher_v.iter().enumerate() {
            as_str(publisher, &publishers_path.index(i))?;
        }
    }
    Ok(())
}

fn check_additional_information(value: &Value, path: &FieldPath) -> Result<(), Error> {
    let additional_information = as_object(value, path)?;
    for name in [
        "description",
        "copyrightHolder",
        "inLanguage",
        "updateFrequency",
    ] {
        optional_str(additional_information, name, path)?;
    }
    for name in ["tags", "categories"] {
        if let Some(element_v) = optional_array(additional_information, name, path)? {
            let elements_path = path.field(name);
            for (i, element) in element_v.iter().enumerate() {
                as_str(element, &elements_path.index(i))?;
            }
        }
    }
    if let Some(link_v) = optional_array(additional_information, "links", path)? {
        let links_path = path.field("links");
        for (i, link) in link_v.iter().enumerate() {
            let link_path = links_path.index(i);
            let link = as_object(link, &link_path)?;
            optional_str(link, "name", &link_path)?;
            optional_str(link, "type", &link_path)?;
            required_str(link, "url", &link_path)?;
        }
    }
    Ok(())
}

//
// Shape helpers
//

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn as_object<'a>(value: &'a Value, path: &FieldPath) -> Result<&'a Object, Error> {
    value.as_object().ok_or_else(|| {
        Error::schema(
            path,
            format!("expected an object, found {}", describe(value)),
        )
    })
}

fn as_str<'a>(value: &'a Value, path: &FieldPath) -> Result<&'a str, Error> {
    value.as_str().ok_or_else(|| {
        Error::schema(path, format!("expected a string, found {}", describe(value)))
    })
}

fn as_array<'a>(value: &'a Value, path: &FieldPath) -> Result<&'a Vec<Value>, Error> {
    value.as_array().ok_or_else(|| {
        Error::schema(path, format!("expected an array, found {}", describe(value)))
    })
}

fn required<'a>(object: &'a Object, name: &str, path: &FieldPath) -> Result<&'a Value, Error> {
    object.get(name).ok_or_else(|| {
        Error::schema(
            &path.field(name),
            format!("missing required field {:?}", name),
        )
    })
}

/// A field that is absent or null counts as not present.
fn optional<'a>(object: &'a Object, name: &str) -> Option<&'a Value> {
    object.get(name).filter(|value| !value.is_null())
}

fn required_str<'a>(object: &'a Object, name: &str, path: &FieldPath) -> Result<&'a str, Error> {
    as_str(required(object, name, path)?, &path.field(name))
}

fn optional_str<'a>(
    object: &'a Object,
    name: &str,
    path: &FieldPath,
) -> Result<Option<&'a str>, Error> {
    optional(object, name)
        .map(|value| as_str(value, &path.field(name)))
        .transpose()
}

fn required_array<'a>(
    object: &'a Object,
    name: &str,
    path: &FieldPath,
) -> Result<&'a Vec<Value>, Error> {
    as_array(required(object, name, path)?, &path.field(name))
}

/// Lists default to empty when absent, but may not be null.
fn optional_array<'a>(
    object: &'a Object,
    name: &str,
    path: &FieldPath,
) -> Result<Option<&'a Vec<Value>>, Error> {
    object
        .get(name)
        .map(|value| as_array(value, &path.field(name)))
        .transpose()
}

fn required_u64(object: &Object, name: &str, path: &FieldPath) -> Result<u64, Error> {
    let value = required(object, name, path)?;
    value.as_u64().ok_or_else(|| {
        Error::schema(
            &path.field(name),
            format!(
                "expected a non-negative integer, found {}",
                describe(value)
            ),
        )
    })
}

fn required_u32(object: &Object, name: &str, path: &FieldPath) -> Result<u32, Error> {
    let n = required_u64(object, name, path)?;
    u32::try_from(n).map_err(|_| {
        Error::schema(
            &path.field(name),
            format!("{} is out of range for an index", n),
        )
    })
}

fn required_bool(object: &Object, name: &str, path: &FieldPath) -> Result<bool, Error> {
    let value = required(object, name, path)?;
    value.as_bool().ok_or_else(|| {
        Error::schema(
            &path.field(name),
            format!("expected a boolean, found {}", describe(value)),
        )
    })
}

//
// Format checks
//

fn check_did(s: &str, path: &FieldPath) -> Result<(), Error> {
    DIDStr::new_ref(s).map_err(|e| e.at(path))?;
    Ok(())
}

fn check_did_resource(s: &str, path: &FieldPath) -> Result<(), Error> {
    DIDResourceStr::new_ref(s).map_err(|e| e.at(path))?;
    Ok(())
}

fn check_timestamp(s: &str, path: &FieldPath) -> Result<(), Error> {
    s.parse::<Timestamp>().map_err(|e| e.at(path))?;
    Ok(())
}

fn check_url(s: &str, path: &FieldPath) -> Result<(), Error> {
    url::Url::parse(s)
        .map_err(|e| Error::format(path, format!("malformed URI {:?}: {}", s, e)))?;
    Ok(())
}
