mod cmd;
mod ddo_canonicalize;
mod ddo_files_checksum;
mod ddo_hash;
mod ddo_input_args;
mod ddo_service_endpoint;
mod ddo_validate;
mod logging;
mod output_args;

pub use crate::{
    ddo_canonicalize::DDOCanonicalize,
    ddo_files_checksum::DDOFilesChecksum,
    ddo_hash::DDOHash,
    ddo_input_args::DDOInputArgs,
    ddo_service_endpoint::DDOServiceEndpoint,
    ddo_validate::DDOValidate,
    logging::{init_logging, LogFormat},
    output_args::OutputArgs,
};
pub use anyhow::{Error, Result};

fn main() -> Result<()> {
    // Ignore errors, since there may not be a .env file.
    let _ = dotenvy::dotenv();

    use clap::Parser;
    let root = cmd::Root::parse();
    init_logging(root.log_format);
    // Note that if the env var RUST_BACKTRACE is set to 1 (or "full"), then the backtrace will be printed
    // to stderr if this returns error.
    root.handle()
}
