/// The two ways a DDO publishes public key material.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum KeyEncoding {
    Pem,
    Base58,
}

impl KeyEncoding {
    pub const VARIANTS: [KeyEncoding; 2] = [KeyEncoding::Pem, KeyEncoding::Base58];
    /// Name of the `publicKey` entry field carrying material in this encoding.
    pub fn field_name(&self) -> &'static str {
        match self {
            KeyEncoding::Pem => "publicKeyPem",
            KeyEncoding::Base58 => "publicKeyBase58",
        }
    }
}

impl std::fmt::Display for KeyEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field_name())
    }
}
