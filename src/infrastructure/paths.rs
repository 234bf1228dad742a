//! Filesystem locations for trace output.
//!
//! The crate persists nothing except optional trace files. They live under the
//! XDG data directory, falling back to `~/.local/share` and finally the system
//! temp directory when no home directory is known.

use std::path::PathBuf;

const APP_DIR: &str = "remote-input";
const TRACE_FILE_NAME: &str = "remote-input-otlp.json";

/// Returns the data directory used for trace files.
///
/// Resolution order: `$XDG_DATA_HOME/remote-input`,
/// `$HOME/.local/share/remote-input`, then `<temp>/remote-input`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(xdg).join(APP_DIR);
    }
    if let Some(home) = std::env::var_os("HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(home).join(".local").join("share").join(APP_DIR);
    }
    std::env::temp_dir().join(APP_DIR)
}

/// Default location of the OTLP trace file.
#[must_use]
pub fn default_trace_file() -> PathBuf {
    get_data_dir().join(TRACE_FILE_NAME)
}

/// Expands a leading `~` to `$HOME`. Paths without one, or any path when `HOME`
/// is unset, are returned unchanged.
///
/// # Examples
///
/// ```
/// use remote_input::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path").to_str(), Some("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = std::env::var_os("HOME").filter(|v| !v.is_empty());
    match (path, home) {
        ("~", Some(home)) => PathBuf::from(home),
        (p, Some(home)) if p.starts_with("~/") => PathBuf::from(home).join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}
