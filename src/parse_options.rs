/// Limits applied when parsing a DDO from text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseOptions {
    /// Inputs longer than this many bytes are rejected before any JSON parsing happens.
    pub max_input_len: usize,
}

impl ParseOptions {
    pub const DEFAULT_MAX_INPUT_LEN: usize = 4 * 1024 * 1024;
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_input_len: Self::DEFAULT_MAX_INPUT_LEN,
        }
    }
}
