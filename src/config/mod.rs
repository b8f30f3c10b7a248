use clap::Parser;

/// Command-line surface of the `download` binary. Takes no flags or arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "download")]
#[command(about = "Download data from Amazon S3 or other sources.")]
pub struct CliConfig {}
