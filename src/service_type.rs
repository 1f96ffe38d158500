use crate::{Error, FieldPath};

/// The service types this crate models with a dedicated `attributes.main` shape.  Services of any
/// other type are still accepted (see `ServiceMain::Other`).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ServiceType {
    Metadata,
    Access,
    Compute,
}

impl ServiceType {
    pub const VARIANTS: [ServiceType; 3] = [
        ServiceType::Metadata,
        ServiceType::Access,
        ServiceType::Compute,
    ];
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Metadata => "metadata",
            ServiceType::Access => "access",
            ServiceType::Compute => "compute",
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ServiceType {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceType::VARIANTS
            .into_iter()
            .find(|service_type| service_type.as_str() == s)
            .ok_or_else(|| {
                Error::schema(
                    &FieldPath::root(),
                    format!("unrecognized service type {:?}", s),
                )
            })
    }
}
