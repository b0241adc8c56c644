use crate::error::{MigrateError, Result};
use std::path::Path;

/// Whole-file access used by the batch rewriter.
pub trait FileAccess {
	/// Whether `path` names something on disk.
	fn exists(&self, path: &Path) -> bool;

	/// Read the full text of `path`.
	fn read_text(&self, path: &Path) -> Result<String>;

	/// Replace the full text of `path`.
	fn write_text(&self, path: &Path, content: &str) -> Result<()>;
}

/// [`FileAccess`] backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileAccess;

impl FileAccess for StdFileAccess {
	fn exists(&self, path: &Path) -> bool {
		path.exists()
	}

	fn read_text(&self, path: &Path) -> Result<String> {
		std::fs::read_to_string(path).map_err(|source| MigrateError::ReadFailed {
			path: path.to_path_buf(),
			source,
		})
	}

	fn write_text(&self, path: &Path, content: &str) -> Result<()> {
		std::fs::write(path, content).map_err(|source| MigrateError::WriteFailed {
			path: path.to_path_buf(),
			source,
		})
	}
}
