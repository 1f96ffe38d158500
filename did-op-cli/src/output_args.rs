use std::io::Write;

/// How a command writes its single result to stdout.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Omit the trailing newline after the result.
    #[arg(env = "DID_OP_NO_NEWLINE", short, long)]
    pub no_newline: bool,
}

impl OutputArgs {
    /// Writes `output` to stdout, followed by a newline unless `--no-newline` was given.
    pub fn print(&self, output: &str) -> std::io::Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        if !self.no_newline {
            stdout.write_all(b"\n")?;
        }
        stdout.flush()
    }
}
