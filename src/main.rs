use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use sidebar_migrate_cli::batch::{BatchEvent, BatchOptions, StdFileAccess, run_batch};
use sidebar_migrate_cli::config::{LoadedConfig, PassKind, load_config, write_init_template};
use sidebar_migrate_cli::passes::Pipeline;

#[derive(Parser)]
#[command(name = "sidebar-migrate")]
#[command(
	author,
	version,
	about = "CLI tool for migrating dashboard pages to the shared sidebar component"
)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Config file to use instead of searching for .sidebar-migrate.toml
	#[arg(long, value_name = "FILE", global = true)]
	config: Option<PathBuf>,

	/// Report what would change without writing any page
	#[arg(long)]
	dry_run: bool,

	/// Create a template .sidebar-migrate.toml in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite existing .sidebar-migrate.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,

	/// Pages to rewrite, replacing the configured list
	#[arg(value_name = "PATHS")]
	paths: Vec<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display the effective configuration and where it came from
	Show,
	/// Check the configuration and compile its passes without touching pages
	Validate,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	let cwd = std::env::current_dir().context("Failed to get current directory")?;

	// Handle --init
	if cli.init {
		return handle_init(&cwd, cli.force);
	}

	// Handle subcommands
	if let Some(command) = cli.command {
		return match command {
			Commands::Config { action } => match action {
				ConfigAction::Show => handle_config_show(cli.config.as_deref(), &cwd),
				ConfigAction::Validate => handle_config_validate(cli.config.as_deref(), &cwd),
			},
		};
	}

	handle_migrate(cli.config.as_deref(), &cwd, cli.paths, cli.dry_run)
}

fn handle_init(cwd: &Path, force: bool) -> Result<ExitCode> {
	let config_path = write_init_template(cwd, force).map_err(|e| match e {
		sidebar_migrate_cli::MigrateError::ConfigExists { path } => anyhow::anyhow!(
			"{} already exists. Use --force to overwrite.",
			path.display()
		),
		other => anyhow::Error::new(other),
	})?;

	println!("Created {}", config_path.display());
	Ok(ExitCode::SUCCESS)
}

fn handle_config_show(explicit: Option<&Path>, cwd: &Path) -> Result<ExitCode> {
	let loaded = load_config(explicit, cwd).context("Failed to load configuration")?;
	print_config(&loaded);
	Ok(ExitCode::SUCCESS)
}

fn print_config(loaded: &LoadedConfig) {
	match &loaded.path {
		Some(path) => println!("# Source: {}", path.display()),
		None => println!("# Source: built-in defaults"),
	}
	println!();

	println!("paths ({}):", loaded.config.paths.len());
	for path in &loaded.config.paths {
		println!("  {}", path.display());
	}
	println!();

	println!("passes ({}):", loaded.config.passes.len());
	for (i, pass) in loaded.config.passes.iter().enumerate() {
		println!("  Pass {}: {} ({})", i + 1, pass.name, pass.mode());
		match &pass.kind {
			PassKind::FirstMatch { pattern, .. } => {
				println!("    pattern: {}", first_line(pattern));
			}
			PassKind::ShortestSpan { start, end, .. } => {
				println!("    start: {}", start.trim());
				println!("    end: {}", end.trim());
			}
			PassKind::Literal { find, .. } => {
				println!("    find: {} ({} lines)", first_line(find), find.lines().count());
			}
		}
	}
}

fn first_line(text: &str) -> &str {
	text.lines().next().unwrap_or_default().trim()
}

fn handle_config_validate(explicit: Option<&Path>, cwd: &Path) -> Result<ExitCode> {
	let loaded = match load_config(explicit, cwd) {
		Ok(loaded) => loaded,
		Err(e) => {
			eprintln!("Configuration error: {}", e);
			return Ok(ExitCode::FAILURE);
		}
	};

	let pipeline = match Pipeline::compile(&loaded.config.passes) {
		Ok(pipeline) => pipeline,
		Err(e) => {
			eprintln!("Configuration error: {}", e);
			return Ok(ExitCode::FAILURE);
		}
	};

	let source = loaded
		.path
		.as_ref()
		.map_or_else(|| "built-in defaults".to_string(), |p| p.display().to_string());
	println!(
		"Configuration is valid: {} ({} paths, {} passes)",
		source,
		loaded.config.paths.len(),
		pipeline.passes().len()
	);
	for pass in pipeline.passes() {
		println!("  {}", pass.name);
	}
	Ok(ExitCode::SUCCESS)
}

fn handle_migrate(
	explicit: Option<&Path>,
	cwd: &Path,
	paths: Vec<PathBuf>,
	dry_run: bool,
) -> Result<ExitCode> {
	let loaded = load_config(explicit, cwd).context("Failed to load configuration")?;
	let pipeline = Pipeline::compile(&loaded.config.passes).context("Failed to compile passes")?;

	let paths = if paths.is_empty() {
		loaded.config.paths
	} else {
		paths
	};

	run_batch(
		&paths,
		&pipeline,
		&StdFileAccess,
		BatchOptions { dry_run },
		print_event,
	)
	.context("Migration aborted")?;

	Ok(ExitCode::SUCCESS)
}

fn print_event(event: &BatchEvent) {
	match event {
		BatchEvent::Skipped { path } => {
			println!("Skipping {} - file not found", path.display());
		}
		BatchEvent::Updating { path } => {
			println!("Updating {}...", path.display());
		}
		BatchEvent::Updated {
			path,
			applied,
			dry_run,
		} => {
			let detail = if applied.is_empty() {
				"no changes".to_string()
			} else {
				applied.join(", ")
			};
			let mode = if *dry_run { ", dry run" } else { "" };
			println!("✓ Updated {} ({}{})", path.display(), detail, mode);
		}
		BatchEvent::Finished(summary) => {
			println!();
			if summary.skipped > 0 {
				println!(
					"{} processed, {} changed, {} skipped",
					summary.processed, summary.changed, summary.skipped
				);
			}
			println!("All pages updated successfully!");
		}
	}
}
