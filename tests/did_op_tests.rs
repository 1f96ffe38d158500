use did_op::{
    DIDDocument, DIDResourceStr, Error, KeyType, ParseOptions, ServiceMain, ServiceType,
};

/// This will run once at load time (i.e. presumably before main function is called).
#[ctor::ctor]
fn overall_init() {
    env_logger::init();
}

const DDO_SAMPLE1: &str = include_str!("data/ddo_sample1.json");
const SAMPLE_DID: &str = "did:op:0bc278fee025464f8012b811d1bce8e22094d0984e4e49139df5d5ff7a028bdf";

fn sample_value() -> serde_json::Value {
    serde_json::from_str(DDO_SAMPLE1).expect("pass")
}

fn parse_err(value: &serde_json::Value) -> Error {
    let err = DIDDocument::parse_value(value).expect_err("pass");
    tracing::debug!("got expected error: {}", err);
    err
}

#[test]
fn test_parse_sample_ddo() {
    let did_document = DIDDocument::parse_str(DDO_SAMPLE1).expect("pass");
    assert_eq!(did_document.did.as_str(), SAMPLE_DID);
    assert_eq!(did_document.context, "https://w3id.org/did/v1");
    assert_eq!(did_document.public_key_v.len(), 3);
    assert_eq!(
        did_document
            .service_v
            .iter()
            .map(|service| service.index)
            .collect::<Vec<_>>(),
        vec![0, 1]
    );
    assert_eq!(
        did_document
            .public_key_v
            .iter()
            .map(|public_key| public_key.key_type)
            .collect::<Vec<_>>(),
        vec![
            KeyType::RsaVerificationKey2018,
            KeyType::Ed25519VerificationKey2018,
            KeyType::RsaPublicKeyExchangeKey2018,
        ]
    );
    assert_eq!(did_document.authentication_v.len(), 2);

    let proof = did_document.proof_o.as_ref().expect("pass");
    assert_eq!(proof.proof_type, "DDOIntegritySignature");
    assert_eq!(proof.checksum.len(), 2);
    assert!(proof.checksum[1].starts_with("0x9999"));

    let verifiable_credential = &did_document.verifiable_credential_v[0];
    assert!(verifiable_credential.grants("update"));
    assert!(!verifiable_credential.grants("transfer"));
    assert_eq!(
        verifiable_credential.credential_subject.id.as_str(),
        SAMPLE_DID
    );

    let metadata_service = &did_document.service_v[0];
    assert_eq!(metadata_service.service_type(), Some(ServiceType::Metadata));
    let curation = metadata_service
        .attributes
        .curation_o
        .as_ref()
        .expect("pass");
    assert_eq!(curation.num_votes, 123);
    assert!(curation.is_listed);
    let additional_information = metadata_service
        .attributes
        .additional_information_o
        .as_ref()
        .expect("pass");
    assert_eq!(additional_information.tag_v.len(), 4);
    assert_eq!(additional_information.link_v.len(), 2);
    assert!(additional_information.other_m.contains_key("workExample"));
    assert!(additional_information
        .other_m
        .contains_key("structuredMarkup"));

    let access_main = did_document.service_v[1]
        .attributes
        .main
        .as_access()
        .expect("pass");
    assert_eq!(access_main.cost, "1");
    assert_eq!(access_main.timeout, 36000);
}

#[test]
fn test_parse_slice_and_value_agree() {
    let from_str = DIDDocument::parse_str(DDO_SAMPLE1).expect("pass");
    let from_slice = DIDDocument::parse_slice(DDO_SAMPLE1.as_bytes()).expect("pass");
    let from_value = DIDDocument::parse_value(&sample_value()).expect("pass");
    assert_eq!(from_str, from_slice);
    assert_eq!(from_str, from_value);
}

#[test]
fn test_serialize_then_parse_roundtrip() {
    let did_document = DIDDocument::parse_str(DDO_SAMPLE1).expect("pass");

    // Nothing in the sample is dropped or rewritten on the way through the data model.
    let value = serde_json::to_value(&did_document).expect("pass");
    assert_eq!(value, sample_value());
    assert_eq!(DIDDocument::parse_value(&value).expect("pass"), did_document);

    let canonical = did_document.serialize_canonically().expect("pass");
    assert_eq!(DIDDocument::parse_str(&canonical).expect("pass"), did_document);

    let mut written = Vec::new();
    did_document
        .serialize_canonically_to_writer(&mut written)
        .expect("pass");
    assert_eq!(written, canonical.as_bytes());
}

#[test]
fn test_content_hash_ignores_formatting_and_key_order() {
    let did_document = DIDDocument::parse_str(DDO_SAMPLE1).expect("pass");
    let content_hash = did_document.content_hash().expect("pass");
    assert_eq!(content_hash.len(), 64);
    assert!(content_hash
        .chars()
        .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));

    // serde_json::Value sorts keys and the compact form drops all whitespace.
    let compact = serde_json::to_string(&sample_value()).expect("pass");
    assert_ne!(compact, DDO_SAMPLE1);
    let reformatted = DIDDocument::parse_str(&compact).expect("pass");
    assert_eq!(reformatted.content_hash().expect("pass"), content_hash);

    let mut value = sample_value();
    value["updated"] = serde_json::json!("2020-01-01T00:00:00Z");
    let updated = DIDDocument::parse_value(&value).expect("pass");
    assert_ne!(updated.content_hash().expect("pass"), content_hash);
}

#[test]
fn test_duplicate_service_index_is_rejected() {
    let mut value = sample_value();
    value["service"][1]["index"] = serde_json::json!(0);
    match parse_err(&value) {
        Error::DuplicateIndex {
            index,
            first_position,
            second_position,
        } => {
            assert_eq!(index, 0);
            assert_eq!(first_position, 0);
            assert_eq!(second_position, 1);
        }
        other => panic!("expected DuplicateIndex, got {:?}", other),
    }
}

#[test]
fn test_malformed_dids_are_rejected() {
    let mut value = sample_value();
    value["id"] = serde_json::json!(SAMPLE_DID.trim_start_matches("did:op:"));
    let err = parse_err(&value);
    assert!(matches!(err, Error::Format { .. }));
    assert_eq!(err.path(), Some("$.id"));

    let mut value = sample_value();
    value["publicKey"][1]["owner"] = serde_json::json!("did:op:not-hex");
    let err = parse_err(&value);
    assert!(matches!(err, Error::Format { .. }));
    assert_eq!(err.path(), Some("$.publicKey[1].owner"));

    let mut value = sample_value();
    value["verifiableCredential"][0]["credentialSubject"]["id"] =
        serde_json::json!("did:example:123");
    let err = parse_err(&value);
    assert!(matches!(err, Error::Format { .. }));
    assert_eq!(err.path(), Some("$.verifiableCredential[0].credentialSubject.id"));

    let mut value = sample_value();
    value["authentication"][0]["publicKey"] = serde_json::json!(SAMPLE_DID);
    let err = parse_err(&value);
    assert!(matches!(err, Error::Format { .. }));
    assert_eq!(err.path(), Some("$.authentication[0].publicKey"));
}

#[test]
fn test_missing_required_fields_are_rejected() {
    for (field, expected_path) in [
        ("@context", "$.@context"),
        ("id", "$.id"),
        ("publicKey", "$.publicKey"),
        ("service", "$.service"),
    ] {
        let mut value = sample_value();
        value.as_object_mut().expect("pass").remove(field);
        let err = parse_err(&value);
        assert!(matches!(err, Error::Schema { .. }), "{:?}", err);
        assert_eq!(err.path(), Some(expected_path));
    }

    // Optional top-level sections may be left out entirely.
    let mut value = sample_value();
    for field in [
        "created",
        "updated",
        "authentication",
        "proof",
        "verifiableCredential",
    ] {
        value.as_object_mut().expect("pass").remove(field);
    }
    let did_document = DIDDocument::parse_value(&value).expect("pass");
    assert!(did_document.proof_o.is_none());
    assert!(did_document.authentication_v.is_empty());
}

#[test]
fn test_wrong_shapes_are_rejected() {
    let mut value = sample_value();
    value["service"] = serde_json::json!({});
    let err = parse_err(&value);
    assert!(matches!(err, Error::Schema { .. }));
    assert_eq!(err.path(), Some("$.service"));

    let mut value = sample_value();
    value["service"][1]["attributes"]["main"]["timeout"] = serde_json::json!("36000");
    let err = parse_err(&value);
    assert!(matches!(err, Error::Schema { .. }));
    assert_eq!(err.path(), Some("$.service[1].attributes.main.timeout"));

    let mut value = sample_value();
    value["service"][0]["attributes"]["main"]["type"] = serde_json::json!("video");
    let err = parse_err(&value);
    assert!(matches!(err, Error::Schema { .. }));
    assert_eq!(err.path(), Some("$.service[0].attributes.main.type"));

    let mut value = sample_value();
    value["service"][0]["attributes"]["curation"]["rating"] = serde_json::json!("high");
    let err = parse_err(&value);
    assert_eq!(err.path(), Some("$.service[0].attributes.curation.rating"));

    for s in ["[]", "\"did:op:0bc278fe\"", "null"] {
        let err = DIDDocument::parse_str(s).expect_err("pass");
        assert!(matches!(err, Error::Schema { .. }));
        assert_eq!(err.path(), Some("$"));
    }
}

#[test]
fn test_invalid_input_bytes_are_rejected() {
    let err = DIDDocument::parse_str(&DDO_SAMPLE1[..DDO_SAMPLE1.len() / 2]).expect_err("pass");
    assert!(matches!(err, Error::Schema { .. }));
    assert_eq!(err.path(), Some("$"));

    let mut bytes = DDO_SAMPLE1.as_bytes().to_vec();
    bytes[10] = 0xff;
    let err = DIDDocument::parse_slice(&bytes).expect_err("pass");
    assert!(matches!(err, Error::Schema { .. }));
}

#[test]
fn test_input_size_limit() {
    let parse_options = ParseOptions { max_input_len: 100 };
    match DIDDocument::parse_str_with_options(DDO_SAMPLE1, &parse_options) {
        Err(Error::InputTooLarge { len, limit }) => {
            assert_eq!(len, DDO_SAMPLE1.len());
            assert_eq!(limit, 100);
        }
        other => panic!("expected InputTooLarge, got {:?}", other),
    }
    // The limit is checked before anything else, so even invalid input reports it.
    let garbage = vec![0xffu8; 101];
    assert!(matches!(
        DIDDocument::parse_slice_with_options(&garbage, &parse_options),
        Err(Error::InputTooLarge { .. })
    ));
    let parse_options = ParseOptions {
        max_input_len: DDO_SAMPLE1.len(),
    };
    DIDDocument::parse_str_with_options(DDO_SAMPLE1, &parse_options).expect("pass");
}

#[test]
fn test_key_material_must_match_key_type() {
    let pem = sample_value()["publicKey"][0]["publicKeyPem"].clone();

    // Ed25519 key carrying PEM material.
    let mut value = sample_value();
    let public_key = value["publicKey"][1].as_object_mut().expect("pass");
    public_key.remove("publicKeyBase58");
    public_key.insert("publicKeyPem".to_string(), pem.clone());
    let err = parse_err(&value);
    assert!(matches!(err, Error::KeyFormat { .. }));
    assert_eq!(err.path(), Some("$.publicKey[1].publicKeyPem"));

    // Both kinds of material.
    let mut value = sample_value();
    value["publicKey"][1]["publicKeyPem"] = pem;
    let err = parse_err(&value);
    assert!(matches!(err, Error::KeyFormat { .. }));
    assert_eq!(err.path(), Some("$.publicKey[1]"));

    // No material at all.
    let mut value = sample_value();
    value["publicKey"][1]
        .as_object_mut()
        .expect("pass")
        .remove("publicKeyBase58");
    let err = parse_err(&value);
    assert!(matches!(err, Error::KeyFormat { .. }));
    assert_eq!(err.path(), Some("$.publicKey[1]"));

    // Unrecognized key type.
    let mut value = sample_value();
    value["publicKey"][0]["type"] = serde_json::json!("DsaVerificationKey1999");
    let err = parse_err(&value);
    assert!(matches!(err, Error::KeyFormat { .. }));
    assert_eq!(err.path(), Some("$.publicKey[0].type"));
}

#[test]
fn test_key_material_must_be_well_formed() {
    let mut value = sample_value();
    value["publicKey"][0]["publicKeyPem"] = serde_json::json!("MIGfMA0GCSqGSIb3DQEBAQUAA4GNADCBiQKBgQDMbfry5KBRQUTaQ0qNm8oYPei");
    let err = parse_err(&value);
    assert!(matches!(err, Error::KeyFormat { .. }));
    assert_eq!(err.path(), Some("$.publicKey[0].publicKeyPem"));

    // '0', 'O', 'I', and 'l' are not in the Base58 alphabet.
    let mut value = sample_value();
    value["publicKey"][1]["publicKeyBase58"] = serde_json::json!("H3C2AVvLMv6gmMNam3uVAjZpfkcJCwDwnZn6z3wXmqP0");
    let err = parse_err(&value);
    assert!(matches!(err, Error::KeyFormat { .. }));
    assert_eq!(err.path(), Some("$.publicKey[1].publicKeyBase58"));

    // Valid Base58, but far too short for an Ed25519 key.
    let mut value = sample_value();
    value["publicKey"][1]["publicKeyBase58"] = serde_json::json!("3mJr7AoUXx2Wqd");
    let err = parse_err(&value);
    assert!(matches!(err, Error::KeyFormat { .. }));
}

#[test]
fn test_key_references_are_checked() {
    let mut value = sample_value();
    value["authentication"][1]["publicKey"] =
        serde_json::json!(format!("{}#keys-9", SAMPLE_DID));
    let err = parse_err(&value);
    assert!(matches!(err, Error::KeyFormat { .. }));
    assert_eq!(err.path(), Some("$.authentication[1].publicKey"));

    let mut value = sample_value();
    value["publicKey"][2]["id"] = value["publicKey"][0]["id"].clone();
    let err = parse_err(&value);
    assert!(matches!(err, Error::KeyFormat { .. }));
    assert_eq!(err.path(), Some("$.publicKey[2].id"));
}

#[test]
fn test_timestamps() {
    let mut value = sample_value();
    value["created"] = serde_json::json!("08/02/2019 08:13:49");
    let err = parse_err(&value);
    assert!(matches!(err, Error::Format { .. }));
    assert_eq!(err.path(), Some("$.created"));

    let mut value = sample_value();
    value["service"][0]["attributes"]["main"]["dateCreated"] =
        serde_json::json!("2012-10-10T25:00:00Z");
    let err = parse_err(&value);
    assert!(matches!(err, Error::Format { .. }));
    assert_eq!(err.path(), Some("$.service[0].attributes.main.dateCreated"));

    // Timestamps with no UTC offset are accepted and taken to be UTC.
    let mut value = sample_value();
    value["updated"] = serde_json::json!("2019-06-24T13:46:45");
    let did_document = DIDDocument::parse_value(&value).expect("pass");
    assert_eq!(
        did_document.updated_o.expect("pass").to_string(),
        "2019-06-24T13:46:45Z"
    );
    assert!(did_document.created_o < did_document.updated_o);
}

#[test]
fn test_proof_checksum_keys_must_be_contiguous() {
    let mut value = sample_value();
    let checksum = value["proof"]["checksum"].as_object_mut().expect("pass");
    let second = checksum.remove("1").expect("pass");
    checksum.insert("2".to_string(), second);
    let err = parse_err(&value);
    assert!(matches!(err, Error::Schema { .. }));
    assert_eq!(err.path(), Some("$.proof.checksum"));

    let mut value = sample_value();
    value["proof"]["checksum"]["1"] = serde_json::json!(1);
    let err = parse_err(&value);
    assert_eq!(err.path(), Some("$.proof.checksum.1"));
}

#[test]
fn test_credential_capabilities_are_a_set() {
    let mut value = sample_value();
    value["verifiableCredential"][0]["type"] = serde_json::json!(["read", "read"]);
    let err = parse_err(&value);
    assert!(matches!(err, Error::Schema { .. }));
    assert_eq!(err.path(), Some("$.verifiableCredential[0].type[1]"));
}

#[test]
fn test_file_indices_must_match_positions() {
    let mut value = sample_value();
    value["service"][0]["attributes"]["main"]["files"][1]["index"] = serde_json::json!(5);
    let err = parse_err(&value);
    assert!(matches!(err, Error::Schema { .. }));
    assert_eq!(
        err.path(),
        Some("$.service[0].attributes.main.files[1].index")
    );

    let mut value = sample_value();
    value["service"][0]["attributes"]["main"]["files"][0]["url"] =
        serde_json::json!("not a url");
    let err = parse_err(&value);
    assert!(matches!(err, Error::Format { .. }));
    assert_eq!(err.path(), Some("$.service[0].attributes.main.files[0].url"));
}

#[test]
fn test_service_endpoints() {
    let did_document = DIDDocument::parse_str(DDO_SAMPLE1).expect("pass");
    let metadata_endpoint = did_document.service_v[0]
        .endpoint_for(&did_document.did)
        .expect("pass");
    assert_eq!(
        metadata_endpoint.as_str(),
        format!(
            "http://myaquarius.org/api/v1/provider/assets/metadata/{}",
            SAMPLE_DID
        )
    );
    let access_endpoint = did_document.service_v[1]
        .endpoint_for(&did_document.did)
        .expect("pass");
    assert_eq!(
        access_endpoint.as_str(),
        "http://localhost:8030/api/v1/services/consume"
    );

    let mut value = sample_value();
    value["service"][1]["serviceEndpoint"] = serde_json::json!("/api/v1/services/consume");
    let err = parse_err(&value);
    assert!(matches!(err, Error::Format { .. }));
    assert_eq!(err.path(), Some("$.service[1].serviceEndpoint"));
}

#[test]
fn test_lookups() {
    let did_document = DIDDocument::parse_str(DDO_SAMPLE1).expect("pass");

    assert_eq!(
        did_document
            .service_by_type(ServiceType::Access)
            .expect("pass")
            .index,
        1
    );
    assert!(did_document.service_by_type(ServiceType::Compute).is_none());
    assert_eq!(
        did_document.service_by_index(0).expect("pass").service_type(),
        Some(ServiceType::Metadata)
    );
    assert!(did_document.service_by_index(7).is_none());

    let key_id = format!("{}#keys-2", SAMPLE_DID);
    let public_key = did_document
        .public_key(DIDResourceStr::new_ref(key_id.as_str()).expect("pass"))
        .expect("pass");
    assert_eq!(public_key.key_type, KeyType::Ed25519VerificationKey2018);
    assert_eq!(public_key.id.fragment(), "keys-2");
    assert_eq!(public_key.id.did(), did_document.did.as_did_str());

    let metadata_main = did_document.metadata_main().expect("pass");
    assert_eq!(metadata_main.name, "Ocean protocol white paper");
    assert_eq!(
        metadata_main.file_at_index(1).expect("pass").content_type,
        "text/plain"
    );
    assert!(metadata_main.file_at_index(2).is_none());

    // A dataset is not an algorithm, so there is nothing to trust.
    assert!(did_document.trusted_algorithm_entry().expect("pass").is_none());
}

#[test]
fn test_files_checksum() {
    let did_document = DIDDocument::parse_str(DDO_SAMPLE1).expect("pass");
    let files_checksum = did_document.service_v[0]
        .files_checksum()
        .expect("pass")
        .expect("pass");
    // sha256 of encryptedFiles followed by the compact `files` JSON, keys in document order.
    assert_eq!(
        files_checksum,
        "2f9a697c6c0cd97fcee7de29ceff24b4175383c1cccf01c989f4ae1dac0ba9ea"
    );
    assert!(did_document.service_v[1]
        .files_checksum()
        .expect("pass")
        .is_none());

    // The checksum covers the encrypted file URLs as well as the file list.
    let mut value = sample_value();
    value["service"][0]["attributes"]["encryptedFiles"] = serde_json::json!("0x00");
    let changed = DIDDocument::parse_value(&value).expect("pass");
    assert_ne!(
        changed.service_v[0]
            .files_checksum()
            .expect("pass")
            .expect("pass"),
        files_checksum
    );
}

#[test]
fn test_unrecognized_service_type_is_preserved() {
    let mut value = sample_value();
    value["service"]
        .as_array_mut()
        .expect("pass")
        .push(serde_json::json!({
            "type": "authorization",
            "index": 2,
            "serviceEndpoint": "http://localhost:12001",
            "attributes": {
                "main": {
                    "service": "SecretStore",
                    "threshold": 0
                }
            }
        }));
    let did_document = DIDDocument::parse_value(&value).expect("pass");
    let service = did_document.service_by_index(2).expect("pass");
    assert_eq!(service.service_type(), None);
    assert_eq!(service.service_type_str(), "authorization");
    match &service.attributes.main {
        ServiceMain::Other { service_type, main } => {
            assert_eq!(service_type, "authorization");
            assert_eq!(main["threshold"], serde_json::json!(0));
        }
        other => panic!("expected ServiceMain::Other, got {:?}", other),
    }
    assert_eq!(serde_json::to_value(&did_document).expect("pass"), value);
}

fn algorithm_ddo_value() -> serde_json::Value {
    let mut value = sample_value();
    value["id"] = serde_json::json!("did:op:8d1b4d73e7af4634958f071ab8dfe7ab0df14019");
    for public_key in value["publicKey"].as_array_mut().expect("pass") {
        let id = public_key["id"].as_str().expect("pass").replace(
            SAMPLE_DID,
            "did:op:8d1b4d73e7af4634958f071ab8dfe7ab0df14019",
        );
        public_key["id"] = serde_json::json!(id);
    }
    value.as_object_mut().expect("pass").remove("authentication");
    let main = &mut value["service"][0]["attributes"]["main"];
    main["type"] = serde_json::json!("algorithm");
    main["algorithm"] = serde_json::json!({
        "language": "python",
        "version": "0.1.0",
        "container": {
            "entrypoint": "python $ALGO",
            "image": "oceanprotocol/algo_dockers",
            "tag": "python-panda"
        }
    });
    value
}

#[test]
fn test_compute_service_trusts_algorithm() {
    let algorithm_ddo = DIDDocument::parse_value(&algorithm_ddo_value()).expect("pass");
    let trusted_algorithm = algorithm_ddo
        .trusted_algorithm_entry()
        .expect("pass")
        .expect("pass");
    assert_eq!(trusted_algorithm.did, algorithm_ddo.did);
    assert_eq!(
        trusted_algorithm.files_checksum,
        algorithm_ddo.service_v[0]
            .files_checksum()
            .expect("pass")
            .expect("pass")
    );

    // A dataset DDO offering compute, trusting exactly that algorithm.
    let mut value = sample_value();
    value["service"]
        .as_array_mut()
        .expect("pass")
        .push(serde_json::json!({
            "type": "compute",
            "index": 2,
            "serviceEndpoint": "http://localhost:8030/api/v1/services/compute",
            "attributes": {
                "main": {
                    "name": "dataAssetComputingServiceAgreement",
                    "creator": "0x37BB53e3d293494DE59fBe1FF78500423dcFd43B",
                    "datePublished": "2019-04-09T19:02:11Z",
                    "cost": "10",
                    "timeout": 86400,
                    "privacy": {
                        "allowRawAlgorithm": false,
                        "allowNetworkAccess": true,
                        "publisherTrustedAlgorithms": [trusted_algorithm.clone()]
                    }
                }
            }
        }));
    let dataset_ddo = DIDDocument::parse_value(&value).expect("pass");
    let compute_main = dataset_ddo
        .service_by_type(ServiceType::Compute)
        .expect("pass")
        .attributes
        .main
        .as_compute()
        .expect("pass");
    let privacy = &compute_main.privacy;
    assert!(privacy.allow_network_access);
    assert!(!privacy.allow_all_published_algorithms);
    assert!(privacy.allows_algorithm(&trusted_algorithm, None));

    // Republishing the algorithm with a different container invalidates the trust.
    let mut republished_value = algorithm_ddo_value();
    republished_value["service"][0]["attributes"]["main"]["algorithm"]["container"]["tag"] =
        serde_json::json!("python-panda-2");
    let republished = DIDDocument::parse_value(&republished_value)
        .expect("pass")
        .trusted_algorithm_entry()
        .expect("pass")
        .expect("pass");
    assert_eq!(republished.files_checksum, trusted_algorithm.files_checksum);
    assert_ne!(
        republished.container_section_checksum,
        trusted_algorithm.container_section_checksum
    );
    assert!(!privacy.allows_algorithm(&republished, None));

    let mut open_privacy = privacy.clone();
    open_privacy.trusted_algorithm_publisher_v =
        vec!["0x37BB53e3d293494DE59fBe1FF78500423dcFd43B".to_string()];
    assert!(open_privacy.allows_algorithm(
        &republished,
        Some("0x37bb53e3d293494de59fbe1ff78500423dcfd43b")
    ));
    open_privacy.trusted_algorithm_publisher_v.clear();
    open_privacy.allow_all_published_algorithms = true;
    assert!(open_privacy.allows_algorithm(&republished, None));
}

#[test]
fn test_compute_service_requires_privacy() {
    let mut value = sample_value();
    value["service"][1]["type"] = serde_json::json!("compute");
    let err = parse_err(&value);
    assert!(matches!(err, Error::Schema { .. }));
    assert_eq!(err.path(), Some("$.service[1].attributes.main.privacy"));
}

#[test]
fn test_validate_in_memory_document() {
    let mut did_document = DIDDocument::parse_str(DDO_SAMPLE1).expect("pass");
    did_document.validate().expect("pass");

    did_document.service_v[1].index = 0;
    assert!(matches!(
        did_document.validate(),
        Err(Error::DuplicateIndex { index: 0, .. })
    ));
    did_document.service_v[1].index = 1;

    let duplicate_key = did_document.public_key_v[0].clone();
    did_document.public_key_v.push(duplicate_key);
    let err = did_document.validate().expect_err("pass");
    assert!(matches!(err, Error::KeyFormat { .. }));
    assert_eq!(err.path(), Some("$.publicKey[3].id"));
}

#[test]
fn test_created_outside_rfc3339_range_is_rejected() {
    let mut value = sample_value();
    value["created"] = serde_json::json!("-000001-01-01T00:00:00Z");
    let err = parse_err(&value);
    assert!(matches!(err, Error::Format { .. }), "{:?}", err);
    assert_eq!(err.path(), Some("$.created"));

    // Everything that does parse can be written back out.
    value["created"] = serde_json::json!("0001-01-01T00:00:00Z");
    let did_document = DIDDocument::parse_value(&value).expect("pass");
    did_document.content_hash().expect("pass");
    let reparsed = DIDDocument::parse_str(&did_document.serialize_canonically().expect("pass"))
        .expect("pass");
    assert_eq!(reparsed, did_document);
}
