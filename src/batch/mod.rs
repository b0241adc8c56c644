//! Batch rewriting for sidebar-migrate.
//!
//! Pages are visited one at a time in list order. Missing pages are skipped;
//! the first read or write failure aborts the batch and leaves already
//! written pages as they are.

pub mod files;

pub use files::{FileAccess, StdFileAccess};

use crate::error::Result;
use crate::passes::Pipeline;
use std::path::{Path, PathBuf};

/// Options controlling a batch run.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
	/// Run the passes and report, but never write.
	pub dry_run: bool,
}

/// Counts for a finished batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
	/// Pages read and run through the pipeline.
	pub processed: usize,

	/// Pages skipped because they do not exist.
	pub skipped: usize,

	/// Processed pages where at least one pass matched.
	pub changed: usize,
}

/// Progress notifications emitted while a batch runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchEvent {
	Skipped { path: PathBuf },
	Updating { path: PathBuf },
	Updated {
		path: PathBuf,
		/// Passes that changed the page, in order. Empty when it was unchanged.
		applied: Vec<String>,
		dry_run: bool,
	},
	Finished(BatchSummary),
}

/// Rewrite every page in `paths` with `pipeline`.
///
/// Pages are written back even when no pass matched, unless `options.dry_run`
/// is set.
pub fn run_batch<F, O>(
	paths: &[PathBuf],
	pipeline: &Pipeline,
	files: &F,
	options: BatchOptions,
	mut observer: O,
) -> Result<BatchSummary>
where
	F: FileAccess + ?Sized,
	O: FnMut(&BatchEvent),
{
	let mut summary = BatchSummary::default();

	for path in paths {
		if !files.exists(path) {
			summary.skipped += 1;
			observer(&BatchEvent::Skipped { path: path.clone() });
			continue;
		}

		observer(&BatchEvent::Updating { path: path.clone() });
		let applied = rewrite_page(path, pipeline, files, options)?;

		summary.processed += 1;
		if !applied.is_empty() {
			summary.changed += 1;
		}
		observer(&BatchEvent::Updated {
			path: path.clone(),
			applied,
			dry_run: options.dry_run,
		});
	}

	observer(&BatchEvent::Finished(summary));
	Ok(summary)
}

/// Read, transform and write back one page. Returns the matched pass names.
fn rewrite_page<F>(
	path: &Path,
	pipeline: &Pipeline,
	files: &F,
	options: BatchOptions,
) -> Result<Vec<String>>
where
	F: FileAccess + ?Sized,
{
	let content = files.read_text(path)?;
	let outcome = pipeline.apply(&content);

	if !options.dry_run {
		files.write_text(path, &outcome.content)?;
	}

	Ok(outcome.applied)
}
