//! The built-in migration: the dashboard pages and the three passes that
//! move them onto the shared sidebar component.

use crate::config::types::{PassKind, PassSpec};
use std::path::PathBuf;

/// Dashboard pages rewritten when no paths are configured.
pub const DEFAULT_PATHS: &[&str] = &[
	"pages/dashboard/ram.html",
	"pages/dashboard/storage.html",
	"pages/dashboard/motherboard.html",
	"pages/dashboard/nic.html",
	"pages/dashboard/caddy.html",
	"pages/dashboard/chassis.html",
	"pages/dashboard/pciecard.html",
	"pages/dashboard/hbacard.html",
	"pages/dashboard/servers.html",
	"pages/dashboard/acl.html",
	"pages/dashboard/tickets.html",
	"pages/dashboard/index.html",
];

/// Hamburger button followed by the mobile overlay.
///
/// Anchored on the two comments and the `hamburger-menu` / `mobile-overlay`
/// classes; the remaining attribute text may vary. The button body may only
/// hold empty `<span>` bars, so the match never runs past the first
/// `</button>`.
pub const HAMBURGER_BLOCK_PATTERN: &str = r#"[ \t]*<!-- Hamburger Menu Button \(Mobile\) -->\s*<button class="hamburger-menu[^"]*"[^>]*>\s*(?:<span[^>]*>\s*</span>\s*)*</button>\s*<!-- Mobile Overlay -->\s*<div class="mobile-overlay[^"]*"[^>]*></div>"#;

pub const PLACEHOLDER_BLOCK: &str = r#"    <!-- Sidebar Component Placeholder -->
    <div id="sidebar-placeholder"></div>"#;

pub const SIDEBAR_START: &str = "            <!-- Sidebar -->";

pub const SIDEBAR_END: &str = "</aside>";

pub const OLD_SCRIPTS: &str = r#"    <!-- Scripts -->
    <script src="https://cdn.jsdelivr.net/npm/axios@1.6.0/dist/axios.min.js"></script>
    <script src="../../assets/js/toast.js"></script>
    <script src="../../assets/js/dashboard/utils.js"></script>
    <script src="../../assets/js/dashboard/api.js"></script>
    <script src="../../assets/js/server/server-api.js"></script>
    <script src="../../assets/js/server/pcpartpicker-builder.js"></script>
    <script src="../../assets/js/server/acl.js"></script>
    <script src="../../assets/js/tickets.js"></script>
    <script src="../../assets/js/dashboard/dashboard.js"></script>
</body>"#;

/// Same includes as [`OLD_SCRIPTS`], with the sidebar manager and its loader
/// inserted ahead of `dashboard.js`.
pub const NEW_SCRIPTS: &str = r#"    <!-- Scripts -->
    <script src="https://cdn.jsdelivr.net/npm/axios@1.6.0/dist/axios.min.js"></script>
    <script src="../../assets/js/toast.js"></script>
    <script src="../../assets/js/dashboard/utils.js"></script>
    <script src="../../assets/js/dashboard/api.js"></script>
    <script src="../../assets/js/server/server-api.js"></script>
    <script src="../../assets/js/server/pcpartpicker-builder.js"></script>
    <script src="../../assets/js/server/acl.js"></script>
    <script src="../../assets/js/tickets.js"></script>
    <!-- Sidebar Component and Manager (must load before dashboard) -->
    <script src="../../components/sidebar-manager.js"></script>
    <script>
        // Load sidebar HTML into placeholder
        async function loadSidebarComponent() {
            try {
                const response = await fetch('../../components/sidebar.html');
                const html = await response.text();
                document.getElementById('sidebar-placeholder').innerHTML = html;
                // Reinitialize sidebar manager after HTML loads
                if (window.sidebarManager) {
                    await window.sidebarManager.init();
                }
            } catch (error) {
                console.error('Failed to load sidebar component:', error);
            }
        }
        loadSidebarComponent();
    </script>
    <script src="../../assets/js/dashboard/dashboard.js"></script>
</body>"#;

pub fn default_paths() -> Vec<PathBuf> {
	DEFAULT_PATHS.iter().map(PathBuf::from).collect()
}

pub fn default_passes() -> Vec<PassSpec> {
	vec![
		PassSpec {
			name: "placeholder".to_string(),
			kind: PassKind::FirstMatch {
				pattern: HAMBURGER_BLOCK_PATTERN.to_string(),
				replacement: PLACEHOLDER_BLOCK.to_string(),
			},
		},
		PassSpec {
			name: "remove-aside".to_string(),
			kind: PassKind::ShortestSpan {
				start: SIDEBAR_START.to_string(),
				end: SIDEBAR_END.to_string(),
				replacement: String::new(),
			},
		},
		PassSpec {
			name: "scripts".to_string(),
			kind: PassKind::Literal {
				find: OLD_SCRIPTS.to_string(),
				replace: NEW_SCRIPTS.to_string(),
			},
		},
	]
}
