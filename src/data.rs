//! The `download` command.
//!
//! This is a scaffold: [`sync_data`] is where the real download logic
//! (object storage, HTTP, ...) belongs once a data source is chosen.

use crate::utils::error::Result;
use crate::utils::logger;
use std::path::{Path, PathBuf};

pub const SYNC_REMINDER: &str = "Update src/data.rs to sync your data!";

/// Directory reserved for downloaded data, next to this module.
///
/// Resolved at build time from `CARGO_MANIFEST_DIR`, so it only points at a
/// real location inside the source checkout the binary was built from.
pub fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join("data")
}

/// Download data from Amazon S3 or other sources.
///
/// Installs the global logger, so call it once per process.
pub fn download() -> Result<()> {
    logger::init_cli_logger()?;
    sync_data();
    Ok(())
}

pub fn sync_data() {
    tracing::info!("{}", SYNC_REMINDER);
}
