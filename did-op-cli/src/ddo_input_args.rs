use crate::Result;
use anyhow::Context;
use std::io::Read;

#[derive(clap::Args, Debug)]
pub struct DDOInputArgs {
    /// Path of the DDO (JSON) file to read.  If omitted or "-", the DDO is read from stdin.
    #[arg(name = "PATH")]
    pub path_o: Option<std::path::PathBuf>,
    /// Reject inputs longer than this many bytes.
    #[arg(
        long,
        env = "DID_OP_MAX_INPUT_BYTES",
        value_name = "BYTES",
        default_value_t = did_op::ParseOptions::DEFAULT_MAX_INPUT_LEN
    )]
    pub max_input_bytes: usize,
}

impl DDOInputArgs {
    fn reads_stdin(&self) -> bool {
        match self.path_o.as_ref() {
            None => true,
            Some(path) => path.as_os_str() == "-",
        }
    }
    fn read_input(&self) -> Result<Vec<u8>> {
        if self.reads_stdin() {
            tracing::debug!("reading DDO from stdin");
            read_bounded(std::io::stdin().lock(), self.max_input_bytes)
                .context("Failed to read DDO from stdin")
        } else if let Some(path) = self.path_o.as_ref() {
            tracing::debug!("reading DDO from {:?}", path);
            let file = std::fs::File::open(path)
                .with_context(|| format!("Failed to open DDO file {:?}", path))?;
            read_bounded(file, self.max_input_bytes)
                .with_context(|| format!("Failed to read DDO from {:?}", path))
        } else {
            Ok(Vec::new())
        }
    }
    /// Reads and parses the DDO, applying all the structural and cross-field checks.
    pub fn read_did_document(&self) -> Result<did_op::DIDDocument> {
        let input = self.read_input()?;
        let parse_options = did_op::ParseOptions {
            max_input_len: self.max_input_bytes,
        };
        Ok(did_op::DIDDocument::parse_slice_with_options(
            &input,
            &parse_options,
        )?)
    }
}

/// Reads at most one byte more than `max_input_bytes`, which is enough for the parser's size check
/// to reject oversized input without it being loaded in full.
fn read_bounded<R: Read>(reader: R, max_input_bytes: usize) -> std::io::Result<Vec<u8>> {
    let limit = u64::try_from(max_input_bytes)
        .unwrap_or(u64::MAX)
        .saturating_add(1);
    let mut input = Vec::new();
    reader.take(limit).read_to_end(&mut input)?;
    Ok(input)
}
