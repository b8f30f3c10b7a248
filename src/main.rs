use anyhow::Context;
use clap::Parser;
use data_sync::CliConfig;

fn main() -> anyhow::Result<()> {
    let _config = CliConfig::parse();

    data_sync::download().context("download command failed")?;

    Ok(())
}
