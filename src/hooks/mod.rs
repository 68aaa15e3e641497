pub mod session_start;
pub mod session_stop;

use std::path::{Path, PathBuf};

/// Project root as provided by the host, falling back to the current
/// directory when the variable is unset.
pub fn project_root() -> PathBuf {
    std::env::var("CLAUDE_PROJECT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// A hook is active when its marker directory exists under `docs/`.
///
/// The start hook looks for `.decisions` and the stop hook for `decisions`.
/// The two names are intentionally distinct conventions; do not unify them.
fn is_active(root: &Path, marker_dir: &str) -> bool {
    root.join("docs").join(marker_dir).is_dir()
}
