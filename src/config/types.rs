use crate::config::defaults::{default_passes, default_paths};
use crate::error::MigrateError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration from a `.sidebar-migrate.toml` file.
///
/// Every field falls back to the built-in migration when omitted, so an empty
/// file behaves exactly like running without one.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
	/// Pages to rewrite, processed in order.
	pub paths: Vec<PathBuf>,

	/// Passes applied to every page, in order.
	pub passes: Vec<PassSpec>,
}

impl Default for Config {
	fn default() -> Self {
		Config {
			paths: default_paths(),
			passes: default_passes(),
		}
	}
}

/// One named transformation step.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PassSpec {
	/// Name shown in progress output when the pass changes a page.
	pub name: String,

	#[serde(flatten)]
	pub kind: PassKind,
}

/// How a pass finds the text it replaces.
///
/// Replacement text is always inserted literally; `$` is never expanded.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum PassKind {
	/// Replace the first match of a regex. `.` also matches newlines.
	FirstMatch { pattern: String, replacement: String },

	/// Replace every shortest span running from `start` to the first `end`
	/// after it, both markers included.
	ShortestSpan {
		start: String,
		end: String,
		#[serde(default)]
		replacement: String,
	},

	/// Replace every verbatim occurrence of `find`.
	Literal { find: String, replace: String },
}

/// A loaded configuration with its source path for display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The file it came from, or `None` for the built-in defaults.
	pub path: Option<PathBuf>,
}

impl PassSpec {
	/// Reject matchers that are empty, since they would match everywhere.
	pub fn validate(&self) -> Result<(), MigrateError> {
		let matchers: Vec<(&'static str, &str)> = match &self.kind {
			PassKind::FirstMatch { pattern, .. } => vec![("pattern", pattern.as_str())],
			PassKind::ShortestSpan { start, end, .. } => {
				vec![("start", start.as_str()), ("end", end.as_str())]
			}
			PassKind::Literal { find, .. } => vec![("find", find.as_str())],
		};

		if let Some((field, _)) = matchers.into_iter().find(|(_, value)| value.is_empty()) {
			return Err(MigrateError::EmptyMatcher {
				pass: self.name.clone(),
				field,
			});
		}

		Ok(())
	}

	/// Short label for the pass mode, as written in config files.
	pub fn mode(&self) -> &'static str {
		match self.kind {
			PassKind::FirstMatch { .. } => "first-match",
			PassKind::ShortestSpan { .. } => "shortest-span",
			PassKind::Literal { .. } => "literal",
		}
	}
}

impl Config {
	/// Validate all passes in this config.
	pub fn validate(&self) -> Result<(), MigrateError> {
		for pass in &self.passes {
			pass.validate()?;
		}
		Ok(())
	}
}
