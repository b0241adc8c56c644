#![allow(deprecated)] // assert_cmd::Command::cargo_bin is deprecated but replacement requires nightly

use predicates::prelude::*;
use std::fs;
use std::path::Path;

use sidebar_migrate_cli::config::defaults::{NEW_SCRIPTS, OLD_SCRIPTS};

fn migrate_cmd() -> assert_cmd::Command {
	assert_cmd::Command::cargo_bin("sidebar-migrate").unwrap()
}

const HAMBURGER_BLOCK: &str = r#"    <!-- Hamburger Menu Button (Mobile) -->
    <button class="hamburger-menu fixed top-4 left-4 z-50 lg:hidden bg-white rounded-lg p-2 shadow-md" id="hamburgerBtn"
        aria-label="Toggle Menu">
        <span class="block w-6 h-0.5 bg-slate-700 mb-1"></span>
        <span class="block w-6 h-0.5 bg-slate-700 mb-1"></span>
        <span class="block w-6 h-0.5 bg-slate-700"></span>
    </button>

    <!-- Mobile Overlay -->
    <div class="mobile-overlay fixed inset-0 bg-black/50 z-40 hidden" id="mobileOverlay"></div>"#;

const ASIDE_BLOCK: &str = r#"            <!-- Sidebar -->
            <aside class="sidebar" id="sidebar">
                <a href="index.html">Dashboard</a>
            </aside>"#;

fn dashboard_page() -> String {
	format!(
		"<!DOCTYPE html>\n<html lang=\"en\">\n<body class=\"bg-slate-50\">\n{HAMBURGER_BLOCK}\n\n        <div class=\"flex\">\n{ASIDE_BLOCK}\n            <main>RAM inventory</main>\n        </div>\n\n{OLD_SCRIPTS}\n</html>\n"
	)
}

fn write_page(root: &Path, relative: &str, content: &str) {
	let path = root.join(relative);
	fs::create_dir_all(path.parent().unwrap()).unwrap();
	fs::write(path, content).unwrap();
}

// ============================================================================
// CLI flag tests
// ============================================================================

#[test]
fn test_help_flag() {
	migrate_cmd()
		.arg("--help")
		.assert()
		.success()
		.stdout(predicate::str::contains("shared sidebar component"));
}

#[test]
fn test_version_flag() {
	migrate_cmd()
		.arg("--version")
		.assert()
		.success()
		.stdout(predicate::str::contains("sidebar-migrate"));
}

// ============================================================================
// Migration tests
// ============================================================================

#[test]
fn test_default_run_migrates_dashboard_pages() {
	let temp_dir = tempfile::tempdir().unwrap();
	write_page(temp_dir.path(), "pages/dashboard/ram.html", &dashboard_page());

	migrate_cmd()
		.current_dir(temp_dir.path())
		.assert()
		.success()
		.stdout(predicate::str::contains(
			"Skipping pages/dashboard/storage.html - file not found",
		))
		.stdout(predicate::str::contains("Updating pages/dashboard/ram.html..."))
		.stdout(predicate::str::contains(
			"✓ Updated pages/dashboard/ram.html (placeholder, remove-aside, scripts)",
		))
		.stdout(predicate::str::ends_with("All pages updated successfully!\n"));

	let content = fs::read_to_string(temp_dir.path().join("pages/dashboard/ram.html")).unwrap();
	assert!(content.contains(r#"<div id="sidebar-placeholder"></div>"#));
	assert!(!content.contains("<aside"));
	assert!(!content.contains("hamburgerBtn"));
	assert!(content.contains(NEW_SCRIPTS));
	assert!(content.contains(r#"<script src="../../components/sidebar-manager.js"></script>"#));
	assert!(content.contains("<main>RAM inventory</main>"));
}

#[test]
fn test_missing_and_present_paths() {
	let temp_dir = tempfile::tempdir().unwrap();
	write_page(temp_dir.path(), "present.html", &dashboard_page());

	migrate_cmd()
		.args(["missing.html", "present.html"])
		.current_dir(temp_dir.path())
		.assert()
		.success()
		.stdout(predicate::str::contains("Skipping missing.html - file not found"))
		.stdout(predicate::str::contains("✓ Updated present.html"))
		.stdout(predicate::str::contains("1 processed, 1 changed, 1 skipped"));

	assert!(!temp_dir.path().join("missing.html").exists());
}

#[test]
fn test_second_run_leaves_page_identical() {
	let temp_dir = tempfile::tempdir().unwrap();
	let page = temp_dir.path().join("page.html");
	fs::write(&page, dashboard_page()).unwrap();

	migrate_cmd()
		.arg("page.html")
		.current_dir(temp_dir.path())
		.assert()
		.success();
	let first = fs::read_to_string(&page).unwrap();
	assert_ne!(first, dashboard_page());

	migrate_cmd()
		.arg("page.html")
		.current_dir(temp_dir.path())
		.assert()
		.success()
		.stdout(predicate::str::contains("✓ Updated page.html (no changes)"));
	let second = fs::read_to_string(&page).unwrap();
	assert_eq!(second, first);
}

#[test]
fn test_dry_run_does_not_write() {
	let temp_dir = tempfile::tempdir().unwrap();
	let page = temp_dir.path().join("page.html");
	fs::write(&page, dashboard_page()).unwrap();

	migrate_cmd()
		.args(["--dry-run", "page.html"])
		.current_dir(temp_dir.path())
		.assert()
		.success()
		.stdout(predicate::str::contains("dry run"));

	assert_eq!(fs::read_to_string(&page).unwrap(), dashboard_page());
}

#[test]
fn test_whitespace_drift_disables_script_pass() {
	let temp_dir = tempfile::tempdir().unwrap();
	let page = temp_dir.path().join("page.html");
	let drifted = OLD_SCRIPTS.replace("    <!-- Scripts -->", "    <!-- Scripts --> ");
	fs::write(&page, &drifted).unwrap();

	migrate_cmd()
		.arg("page.html")
		.current_dir(temp_dir.path())
		.assert()
		.success()
		.stdout(predicate::str::contains("(no changes)"));

	assert_eq!(fs::read_to_string(&page).unwrap(), drifted);
}

#[cfg(unix)]
#[test]
fn test_read_failure_aborts_batch() {
	let temp_dir = tempfile::tempdir().unwrap();
	write_page(temp_dir.path(), "first.html", &dashboard_page());
	// A directory exists but cannot be read as text
	fs::create_dir(temp_dir.path().join("broken.html")).unwrap();
	write_page(temp_dir.path(), "last.html", &dashboard_page());

	migrate_cmd()
		.args(["first.html", "broken.html", "last.html"])
		.current_dir(temp_dir.path())
		.assert()
		.failure()
		.stderr(predicate::str::contains("Failed to read page: broken.html"))
		.stdout(predicate::str::contains("All pages updated successfully!").not());

	let first = fs::read_to_string(temp_dir.path().join("first.html")).unwrap();
	assert!(first.contains(NEW_SCRIPTS));
	let last = fs::read_to_string(temp_dir.path().join("last.html")).unwrap();
	assert_eq!(last, dashboard_page());
}

// ============================================================================
// Config file tests
// ============================================================================

#[test]
fn test_config_file_paths_and_passes() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(
		temp_dir.path().join(".sidebar-migrate.toml"),
		r#"
paths = ["site/a.html"]

[[passes]]
name = "nav"
mode = "shortest-span"
start = "<!-- Nav -->"
end = "</nav>"
replacement = "<div id=\"nav-placeholder\"></div>"
"#,
	)
	.unwrap();
	write_page(
		temp_dir.path(),
		"site/a.html",
		"<body><!-- Nav --><nav>x</nav><p>$1</p></body>",
	);

	migrate_cmd()
		.current_dir(temp_dir.path())
		.assert()
		.success()
		.stdout(predicate::str::contains("✓ Updated site/a.html (nav)"));

	let content = fs::read_to_string(temp_dir.path().join("site/a.html")).unwrap();
	assert_eq!(content, "<body><div id=\"nav-placeholder\"></div><p>$1</p></body>");
}

#[test]
fn test_explicit_config_missing_fails() {
	let temp_dir = tempfile::tempdir().unwrap();

	migrate_cmd()
		.args(["--config", "nope.toml"])
		.current_dir(temp_dir.path())
		.assert()
		.failure()
		.stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_invalid_regex_fails_before_touching_pages() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(
		temp_dir.path().join(".sidebar-migrate.toml"),
		r#"
paths = ["a.html"]

[[passes]]
name = "broken"
mode = "first-match"
pattern = "[unclosed"
replacement = ""
"#,
	)
	.unwrap();
	write_page(temp_dir.path(), "a.html", "[unclosed");

	migrate_cmd()
		.current_dir(temp_dir.path())
		.assert()
		.failure()
		.stderr(predicate::str::contains("Failed to compile passes"));

	assert_eq!(
		fs::read_to_string(temp_dir.path().join("a.html")).unwrap(),
		"[unclosed"
	);
}

// ============================================================================
// --init and config subcommand tests
// ============================================================================

#[test]
fn test_init_creates_config() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join(".sidebar-migrate.toml");

	migrate_cmd()
		.arg("--init")
		.current_dir(temp_dir.path())
		.assert()
		.success()
		.stdout(predicate::str::contains("Created"));

	let content = fs::read_to_string(&config_path).unwrap();
	assert!(content.contains("paths"));
	assert!(content.contains("[[passes]]"));
	assert!(content.contains("shortest-span"));
}

#[test]
fn test_init_fails_if_exists() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(temp_dir.path().join(".sidebar-migrate.toml"), "# existing").unwrap();

	migrate_cmd()
		.arg("--init")
		.current_dir(temp_dir.path())
		.assert()
		.failure()
		.stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_init_force_overwrites() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join(".sidebar-migrate.toml");
	fs::write(&config_path, "# existing").unwrap();

	migrate_cmd()
		.args(["--init", "--force"])
		.current_dir(temp_dir.path())
		.assert()
		.success();

	let content = fs::read_to_string(&config_path).unwrap();
	assert!(content.contains("[[passes]]"));
}

#[test]
fn test_config_show_defaults() {
	let temp_dir = tempfile::tempdir().unwrap();

	migrate_cmd()
		.args(["config", "show"])
		.current_dir(temp_dir.path())
		.assert()
		.success()
		.stdout(predicate::str::contains("built-in defaults"))
		.stdout(predicate::str::contains("pages/dashboard/index.html"))
		.stdout(predicate::str::contains("remove-aside (shortest-span)"));
}

#[test]
fn test_config_validate_valid_config() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(
		temp_dir.path().join(".sidebar-migrate.toml"),
		"paths = [\"a.html\"]\n",
	)
	.unwrap();

	migrate_cmd()
		.args(["config", "validate"])
		.current_dir(temp_dir.path())
		.assert()
		.success()
		.stdout(predicate::str::contains("valid"))
		.stdout(predicate::str::contains("1 paths, 3 passes"))
		.stdout(predicate::str::contains("  remove-aside"));
}

#[test]
fn test_config_validate_invalid_config() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(
		temp_dir.path().join(".sidebar-migrate.toml"),
		"invalid toml [[[",
	)
	.unwrap();

	migrate_cmd()
		.args(["config", "validate"])
		.current_dir(temp_dir.path())
		.assert()
		.failure()
		.stderr(predicate::str::contains("Configuration error"));
}
