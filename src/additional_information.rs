use std::collections::BTreeMap;

/// Free-form descriptive metadata of a service.  The commonly used fields are broken out; anything
/// else is kept verbatim in `other_m`.
#[derive(Clone, Debug, Default, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct AdditionalInformation {
    #[serde(
        rename = "description",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub description_o: Option<String>,
    #[serde(
        rename = "copyrightHolder",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub copyright_holder_o: Option<String>,
    #[serde(rename = "inLanguage", default, skip_serializing_if = "Option::is_none")]
    pub in_language_o: Option<String>,
    #[serde(
        rename = "updateFrequency",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub update_frequency_o: Option<String>,
    #[serde(rename = "tags", default, skip_serializing_if = "Vec::is_empty")]
    pub tag_v: Vec<String>,
    #[serde(rename = "categories", default, skip_serializing_if = "Vec::is_empty")]
    pub category_v: Vec<String>,
    #[serde(rename = "links", default, skip_serializing_if = "Vec::is_empty")]
    pub link_v: Vec<Link>,
    #[serde(flatten)]
    pub other_m: BTreeMap<String, serde_json::Value>,
}

#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct Link {
    #[serde(rename = "name", default, skip_serializing_if = "Option::is_none")]
    pub name_o: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub link_type_o: Option<String>,
    pub url: String,
}
