use crate::{DDOInputArgs, OutputArgs, Result};

/// Parse and validate a DDO, then print it in JCS (JSON Canonicalization Scheme) form.
#[derive(clap::Args, Debug)]
pub struct DDOCanonicalize {
    #[command(flatten)]
    pub ddo_input_args: DDOInputArgs,
    #[command(flatten)]
    pub output_args: OutputArgs,
}

impl DDOCanonicalize {
    pub fn handle(self) -> Result<()> {
        let did_document = self.ddo_input_args.read_did_document()?;
        self.output_args.print(&did_document.serialize_canonically()?)?;
        Ok(())
    }
}
