pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::local_fs::LocalFs;
pub use config::{toml_config::TomlConfig, CliConfig};
pub use core::{engine::SweepEngine, DocStore, SweepReport};
pub use utils::error::{Result, SweepError};
