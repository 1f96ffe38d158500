use crate::{AccessMain, ComputeMain, MetadataMain, ServiceType};

/// `attributes.main` of a service, whose shape depends on the service's type.  The type itself is
/// carried by the variant; for services of an unrecognized type, the type string and the raw `main`
/// object are kept so the document still round-trips.
#[derive(Clone, Debug, PartialEq)]
pub enum ServiceMain {
    Metadata(MetadataMain),
    Access(AccessMain),
    Compute(ComputeMain),
    Other {
        service_type: String,
        main: serde_json::Value,
    },
}

impl ServiceMain {
    /// Returns None for `Other`.
    pub fn service_type(&self) -> Option<ServiceType> {
        match self {
            Self::Metadata(_) => Some(ServiceType::Metadata),
            Self::Access(_) => Some(ServiceType::Access),
            Self::Compute(_) => Some(ServiceType::Compute),
            Self::Other { .. } => None,
        }
    }
    /// The `type` string of the owning service, as it appears on the wire.
    pub fn service_type_str(&self) -> &str {
        match self {
            Self::Metadata(_) => ServiceType::Metadata.as_str(),
            Self::Access(_) => ServiceType::Access.as_str(),
            Self::Compute(_) => ServiceType::Compute.as_str(),
            Self::Other { service_type, .. } => service_type.as_str(),
        }
    }
    pub fn as_metadata(&self) -> Option<&MetadataMain> {
        match self {
            Self::Metadata(metadata_main) => Some(metadata_main),
            _ => None,
        }
    }
    pub fn as_access(&self) -> Option<&AccessMain> {
        match self {
            Self::Access(access_main) => Some(access_main),
            _ => None,
        }
    }
    pub fn as_compute(&self) -> Option<&ComputeMain> {
        match self {
            Self::Compute(compute_main) => Some(compute_main),
            _ => None,
        }
    }
    /// Decodes a raw `main` object according to the given service type string.
    pub(crate) fn from_type_and_value(
        service_type: &str,
        main: serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        use serde::Deserialize;
        Ok(match service_type.parse::<ServiceType>() {
            Ok(ServiceType::Metadata) => Self::Metadata(MetadataMain::from_json(main)?),
            Ok(ServiceType::Access) => Self::Access(AccessMain::deserialize(main)?),
            Ok(ServiceType::Compute) => Self::Compute(ComputeMain::deserialize(main)?),
            Err(_) => Self::Other {
                service_type: service_type.to_string(),
                main,
            },
        })
    }
}

impl serde::Serialize for ServiceMain {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Metadata(metadata_main) => serde::Serialize::serialize(metadata_main, serializer),
            Self::Access(access_main) => serde::Serialize::serialize(access_main, serializer),
            Self::Compute(compute_main) => serde::Serialize::serialize(compute_main, serializer),
            Self::Other { main, .. } => serde::Serialize::serialize(main, serializer),
        }
    }
}
