use crate::{
    DDOCanonicalize, DDOFilesChecksum, DDOHash, DDOServiceEndpoint, DDOValidate, LogFormat, Result,
};

/// did:op CLI tool for validating and inspecting DID documents (DDOs) of published assets.
#[derive(clap::Parser, Debug)]
#[command(name = "did-op")]
pub struct Root {
    /// Specify the format of the logs (which are written to stderr).  "compact" produces one line
    /// per log message, while "pretty" produces verbose multi-line messages.
    #[arg(
        name = "log-format",
        env = "DID_OP_LOG_FORMAT",
        long,
        global = true,
        value_name = "FORMAT",
        default_value = "compact",
        value_enum
    )]
    pub log_format: LogFormat,
    #[command(subcommand)]
    pub command: Command,
}

impl Root {
    pub fn handle(self) -> Result<()> {
        self.command.handle()
    }
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    #[command(subcommand)]
    DDO(DDO),
}

impl Command {
    pub fn handle(self) -> Result<()> {
        match self {
            Self::DDO(x) => x.handle(),
        }
    }
}

/// Operations on a single DDO, read from a file or stdin.
#[derive(clap::Subcommand, Debug)]
pub enum DDO {
    Canonicalize(DDOCanonicalize),
    FilesChecksum(DDOFilesChecksum),
    Hash(DDOHash),
    ServiceEndpoint(DDOServiceEndpoint),
    Validate(DDOValidate),
}

impl DDO {
    pub fn handle(self) -> Result<()> {
        match self {
            Self::Canonicalize(x) => x.handle(),
            Self::FilesChecksum(x) => x.handle(),
            Self::Hash(x) => x.handle(),
            Self::ServiceEndpoint(x) => x.handle(),
            Self::Validate(x) => x.handle(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn test_command_definition_is_consistent() {
        Root::command().debug_assert();
    }

    #[test]
    fn test_parse_service_endpoint() {
        let root = Root::try_parse_from([
            "did-op",
            "ddo",
            "service-endpoint",
            "--index",
            "1",
            "--max-input-bytes",
            "1024",
            "ddo.json",
        ])
        .expect("pass");
        match root.command {
            Command::DDO(DDO::ServiceEndpoint(x)) => {
                assert_eq!(x.index, 1);
                assert_eq!(x.ddo_input_args.max_input_bytes, 1024);
                assert_eq!(
                    x.ddo_input_args.path_o,
                    Some(std::path::PathBuf::from("ddo.json"))
                );
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_stdin_and_log_format() {
        let root = Root::try_parse_from(["did-op", "ddo", "hash", "--log-format", "pretty", "-n"])
            .expect("pass");
        assert_eq!(root.log_format, LogFormat::Pretty);
        match root.command {
            Command::DDO(DDO::Hash(x)) => {
                assert_eq!(x.ddo_input_args.path_o, None);
                assert!(x.output_args.no_newline);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_service_endpoint_requires_index() {
        assert!(Root::try_parse_from(["did-op", "ddo", "service-endpoint", "ddo.json"]).is_err());
    }
}
