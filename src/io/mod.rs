pub mod config_io;
pub mod store_io;

use std::path::PathBuf;

/// Resolve the data directory: `$TICK_DIR`, then `$XDG_DATA_HOME/tick`,
/// then `$HOME/.local/share/tick`. A `--data-dir` flag overrides all of
/// these at the CLI layer.
pub fn default_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("TICK_DIR") {
        return PathBuf::from(dir);
    }
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg).join("tick");
    }
    dirs_home().join(".local/share/tick")
}

fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}
