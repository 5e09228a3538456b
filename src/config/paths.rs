use std::env;
use std::path::{Path, PathBuf};

/// Directory name used under the XDG/HOME config root.
const APP_DIR: &str = "postboard";

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Config directory: `$XDG_CONFIG_HOME/postboard`, else `$HOME/.config/postboard`.
/// Ensured to exist (best effort).
pub fn config_dir() -> PathBuf {
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: `<config_dir>/logs` (ensured to exist)
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Location of `settings.conf` inside `dir`.
pub fn settings_path_in(dir: &Path) -> PathBuf {
    dir.join("settings.conf")
}
