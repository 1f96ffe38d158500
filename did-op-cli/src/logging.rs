#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum LogFormat {
    Compact,
    Pretty,
}

pub fn init_logging(log_format: LogFormat) {
    // It's necessary to specify EnvFilter::from_default_env in order to use RUST_LOG env var.
    // Logs go to stderr so that stdout carries only command output.
    let tracing_subscriber_fmt = tracing_subscriber::fmt()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr);

    match log_format {
        LogFormat::Compact => tracing_subscriber_fmt.compact().init(),
        LogFormat::Pretty => tracing_subscriber_fmt.pretty().init(),
    }
}
