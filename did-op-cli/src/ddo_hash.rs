use crate::{DDOInputArgs, OutputArgs, Result};

/// Print the content hash of a DDO: the hex SHA-256 of its JCS form.  DDOs that differ only in
/// key order or whitespace have the same content hash.
#[derive(clap::Args, Debug)]
pub struct DDOHash {
    #[command(flatten)]
    pub ddo_input_args: DDOInputArgs,
    #[command(flatten)]
    pub output_args: OutputArgs,
}

impl DDOHash {
    pub fn handle(self) -> Result<()> {
        let did_document = self.ddo_input_args.read_did_document()?;
        let content_hash = did_document.content_hash()?;
        self.output_args.print(&content_hash)?;
        Ok(())
    }
}
