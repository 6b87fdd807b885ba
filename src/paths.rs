//! Centralized path definitions for labelrig
//!
//! ## Config lookup
//!
//! ```text
//! --config <path>                  # explicit, must exist
//! ./labelrig.toml                  # per-directory workflow
//! ~/.config/labelrig/config.toml   # user-level defaults (XDG on Linux)
//! ```
//!
//! The first file found wins. With none, the built-in workflow is used.

use std::path::PathBuf;

/// Per-directory config filename
pub const LOCAL_CONFIG: &str = "labelrig.toml";

/// Global config directory name
const GLOBAL_DIR: &str = "labelrig";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get path to `./labelrig.toml`.
#[must_use]
pub fn local_config() -> PathBuf {
    PathBuf::from(LOCAL_CONFIG)
}

/// Get the global labelrig directory.
///
/// Returns `~/.config/labelrig/` on Linux, the platform equivalent elsewhere.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(GLOBAL_DIR))
}

/// Get the global config file path.
#[must_use]
pub fn global_config() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join(GLOBAL_CONFIG_FILE))
}

/// Implicit config locations, in lookup order
#[must_use]
pub fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![local_config()];
    candidates.extend(global_config());
    candidates
}
