use crate::{DDOInputArgs, OutputArgs, Result};

/// Print the files checksum of a DDO's metadata service: the hex SHA-256 of `encryptedFiles`
/// followed by the JCS form of the `files` list.
#[derive(clap::Args, Debug)]
pub struct DDOFilesChecksum {
    #[command(flatten)]
    pub ddo_input_args: DDOInputArgs,
    #[command(flatten)]
    pub output_args: OutputArgs,
}

impl DDOFilesChecksum {
    pub fn handle(self) -> Result<()> {
        let did_document = self.ddo_input_args.read_did_document()?;
        let metadata_service = did_document
            .service_by_type(did_op::ServiceType::Metadata)
            .ok_or_else(|| anyhow::anyhow!("DDO {} has no metadata service", did_document.did))?;
        let files_checksum = metadata_service.files_checksum()?.ok_or_else(|| {
            anyhow::anyhow!("metadata service of DDO {} has no files", did_document.did)
        })?;
        self.output_args.print(&files_checksum)?;
        Ok(())
    }
}
