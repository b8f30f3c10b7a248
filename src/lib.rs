pub mod data;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use data::{data_dir, download, sync_data};
pub use utils::error::{DataError, Result};
