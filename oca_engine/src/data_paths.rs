//! Locates the data directory holding the world file and `oca.toml`.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

const DATA_DIR: &str = "oca_engine/data";

/// Directory holding the world file and `oca.toml`, resolved once.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(find_data_root);

/// Path of `relative` inside the data directory.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// First existing candidate among the workspace layout, a flat `data/`, and
/// the same two next to (or one level above) the executable.
fn find_data_root() -> PathBuf {
    let mut candidates = vec![PathBuf::from(DATA_DIR), PathBuf::from("data")];

    if let Ok(exe_path) = env::current_exe()
        && let Some(dir) = exe_path.parent()
    {
        candidates.extend([dir.join(DATA_DIR), dir.join("data")]);
        if let Some(parent) = dir.parent() {
            candidates.extend([parent.join(DATA_DIR), parent.join("data")]);
        }
    }

    candidates
        .into_iter()
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| PathBuf::from(DATA_DIR))
}
