//! Configuration loading and parsing for sidebar-migrate.
//!
//! This module handles:
//! - The built-in page list and passes
//! - TOML config file parsing
//! - Config discovery and the `--init` template

pub mod defaults;
pub mod discovery;
pub mod parser;
pub mod types;

pub use discovery::{
	CONFIG_FILE_NAME, find_config, generate_init_template, load_config, write_init_template,
};
pub use parser::{parse_config_file, parse_config_str};
pub use types::{Config, LoadedConfig, PassKind, PassSpec};
