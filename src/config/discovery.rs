use crate::config::parser::parse_config_file;
use crate::config::types::{Config, LoadedConfig};
use crate::error::{MigrateError, Result};
use std::path::{Path, PathBuf};

/// File name searched for when no config is given explicitly.
pub const CONFIG_FILE_NAME: &str = ".sidebar-migrate.toml";

/// Find the nearest config file, starting at `start_dir` and walking up the
/// directory tree.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
	let mut current_dir = Some(start_dir);

	while let Some(dir) = current_dir {
		let config_path = dir.join(CONFIG_FILE_NAME);
		if config_path.is_file() {
			return Some(config_path);
		}
		current_dir = dir.parent();
	}

	None
}

/// Load the effective config.
///
/// An explicit path must exist. Otherwise the nearest discovered file is used,
/// falling back to the built-in defaults when there is none.
pub fn load_config(explicit: Option<&Path>, start_dir: &Path) -> Result<LoadedConfig> {
	let path = match explicit {
		Some(path) => Some(path.to_path_buf()),
		None => find_config(start_dir),
	};

	match path {
		Some(path) => {
			let config = parse_config_file(&path)?;
			Ok(LoadedConfig {
				config,
				path: Some(path),
			})
		}
		None => Ok(LoadedConfig {
			config: Config::default(),
			path: None,
		}),
	}
}

/// Render the built-in defaults as a config file.
pub fn generate_init_template() -> Result<String> {
	let body = toml::to_string_pretty(&Config::default())
		.map_err(|source| MigrateError::ConfigRenderError { source })?;

	Ok(format!(
		"# sidebar-migrate configuration\n\
		 #\n\
		 # paths:  pages to rewrite, in order\n\
		 # passes: applied to each page in order; mode is one of\n\
		 #         first-match, shortest-span, literal\n\n{body}"
	))
}

/// Write the init template into `dir`, refusing to overwrite unless `force`.
pub fn write_init_template(dir: &Path, force: bool) -> Result<PathBuf> {
	let config_path = dir.join(CONFIG_FILE_NAME);

	if config_path.exists() && !force {
		return Err(MigrateError::ConfigExists { path: config_path });
	}

	let template = generate_init_template()?;
	std::fs::write(&config_path, template).map_err(|source| {
		MigrateError::ConfigWriteError {
			path: config_path.clone(),
			source,
		}
	})?;

	Ok(config_path)
}
