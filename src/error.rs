use std::path::PathBuf;

/// Errors raised while loading configuration or rewriting pages.
///
/// Pages that do not exist and passes that find nothing are not errors.
#[derive(Debug, thiserror::Error)]
pub enum MigrateError {
	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Failed to render config template")]
	ConfigRenderError {
		#[source]
		source: toml::ser::Error,
	},

	#[error("Failed to write config file: {path}")]
	ConfigWriteError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Config file already exists: {path}")]
	ConfigExists { path: PathBuf },

	#[error("Invalid regex pattern in pass '{pass}': {pattern}")]
	InvalidRegex {
		pass: String,
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Pass '{pass}' has an empty {field}")]
	EmptyMatcher { pass: String, field: &'static str },

	#[error("Failed to read page: {path}")]
	ReadFailed {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write page: {path}")]
	WriteFailed {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Result type alias using MigrateError.
pub type Result<T> = std::result::Result<T, MigrateError>;
