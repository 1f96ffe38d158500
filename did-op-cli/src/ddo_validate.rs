use crate::{DDOInputArgs, OutputArgs, Result};

/// Parse and validate a DDO, printing a one-line summary on success.  Exits with a nonzero status
/// and the location of the first problem if the DDO is malformed.
#[derive(clap::Args, Debug)]
pub struct DDOValidate {
    #[command(flatten)]
    pub ddo_input_args: DDOInputArgs,
    #[command(flatten)]
    pub output_args: OutputArgs,
}

impl DDOValidate {
    pub fn handle(self) -> Result<()> {
        let did_document = self.ddo_input_args.read_did_document()?;
        self.output_args.print(&format!(
            "valid: {} ({} public key(s), {} service(s))",
            did_document.did,
            did_document.public_key_v.len(),
            did_document.service_v.len()
        ))?;
        Ok(())
    }
}
