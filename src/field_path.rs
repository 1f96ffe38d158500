/// JSONPath-style location of a value within a DDO, e.g. `$.service[1].attributes.main`.  Used to
/// tell the caller exactly which field of a malformed document was rejected.
#[derive(Clone, Debug, derive_more::Display, Eq, PartialEq)]
pub struct FieldPath(String);

impl FieldPath {
    pub fn root() -> Self {
        Self("$".to_string())
    }
    pub fn field(&self, name: &str) -> Self {
        Self(format!("{}.{}", self.0, name))
    }
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{}]", self.0, index))
    }
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for FieldPath {
    fn default() -> Self {
        Self::root()
    }
}
