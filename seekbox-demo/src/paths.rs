//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "seekbox";
const APPLICATION: &str = "seekbox-demo";

/// Log file used when no home directory can be determined.
pub const FALLBACK_LOG_FILE: &str = "seekbox-demo.log";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory for regenerable data.
///
/// - Linux: `$XDG_CACHE_HOME/seekbox-demo` or `~/.cache/seekbox-demo`
/// - macOS: `~/Library/Caches/dev.seekbox.seekbox-demo`
/// - Windows: `C:\Users\<User>\AppData\Local\seekbox\seekbox-demo\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the path to the latest log file.
pub fn log_file() -> PathBuf {
    cache_dir()
        .map(|dir| dir.join("latest.log"))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_LOG_FILE))
}
