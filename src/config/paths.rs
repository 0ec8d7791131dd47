// Settings and log path utilities.
// Resolves platform directories for the settings file and the log file.

use std::path::PathBuf;

use directories::ProjectDirs;

const APP_NAME: &str = "aice-shop";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

/// Get the base config directory (~/.config/aice-shop on Linux).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the cache directory, which holds the log file.
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the user settings file.
pub fn settings_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("settings.json"))
}

/// Path to the tracing log file.
pub fn log_path() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(format!("{}.log", APP_NAME)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_use_app_name() {
        // Path construction only, nothing touches the filesystem
        if let Some(path) = settings_path() {
            assert!(path.ends_with("settings.json"));
            assert!(path.to_string_lossy().contains(APP_NAME));
        }
        if let Some(path) = log_path() {
            assert!(path.ends_with("aice-shop.log"));
        }
    }
}
