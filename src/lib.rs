//! sidebar-migrate - CLI tool for moving dashboard pages onto the shared
//! sidebar component.
//!
//! This library provides the core functionality for sidebar-migrate, including:
//! - Built-in and file-based configuration of pages and passes
//! - Compiling passes into regex and literal matchers
//! - Running the pass pipeline over a batch of pages
//!
//! # Example
//!
//! ```no_run
//! use sidebar_migrate_cli::batch::{BatchOptions, StdFileAccess, run_batch};
//! use sidebar_migrate_cli::config::load_config;
//! use sidebar_migrate_cli::passes::Pipeline;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let loaded = load_config(None, &cwd).unwrap();
//! let pipeline = Pipeline::compile(&loaded.config.passes).unwrap();
//!
//! let summary = run_batch(
//!     &loaded.config.paths,
//!     &pipeline,
//!     &StdFileAccess,
//!     BatchOptions::default(),
//!     |event| println!("{event:?}"),
//! )
//! .unwrap();
//! println!("{} pages processed", summary.processed);
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod passes;

pub use error::{MigrateError, Result};
