use crate::{DDOInputArgs, OutputArgs, Result};

/// Print the endpoint URL of one of a DDO's services, with the `{did}` placeholder expanded to the
/// DDO's DID.
#[derive(clap::Args, Debug)]
pub struct DDOServiceEndpoint {
    /// The `index` field of the service (not its position in the service list).
    #[arg(short, long)]
    pub index: u32,
    #[command(flatten)]
    pub ddo_input_args: DDOInputArgs,
    #[command(flatten)]
    pub output_args: OutputArgs,
}

impl DDOServiceEndpoint {
    pub fn handle(self) -> Result<()> {
        let did_document = self.ddo_input_args.read_did_document()?;
        let service = did_document
            .service_by_index(self.index)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "DDO {} has no service with index {}",
                    did_document.did,
                    self.index
                )
            })?;
        let endpoint = service.endpoint_for(&did_document.did)?;
        self.output_args.print(endpoint.as_str())?;
        Ok(())
    }
}
