//! Cross-platform directory path resolution
//!
//! Provides functions to resolve platform-appropriate paths for the
//! user-global configuration and preset directories, plus project-file
//! discovery.
//! - Linux/macOS: XDG Base Directory specification (~/.config, ~/.local/share)
//! - Windows: Known Folder API (AppData\Roaming, AppData\Local)

use std::path::{Path, PathBuf};

/// File names probed, in order, when discovering a project configuration.
pub const PROJECT_FILE_NAMES: &[&str] = &["weftcss.yaml", "weftcss.yml", "weftcss.json"];

/// Get the configuration directory path
///
/// Checks WEFTCSS_CONFIG_DIR environment variable first, then falls back to:
/// - Unix (Linux/macOS): XDG_CONFIG_HOME/weftcss or ~/.config/weftcss
/// - Windows: %APPDATA%\weftcss\config
pub fn config_dir() -> PathBuf {
    std::env::var("WEFTCSS_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            #[cfg(windows)]
            {
                // On Windows, use ProjectDirs for proper AppData paths
                use directories::ProjectDirs;
                ProjectDirs::from("", "", "weftcss")
                    .map(|dirs| dirs.config_dir().to_path_buf())
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join("weftcss"))
            }
            #[cfg(not(windows))]
            {
                // On Unix (Linux/macOS), use XDG_CONFIG_HOME or $HOME/.config
                use directories::BaseDirs;
                std::env::var("XDG_CONFIG_HOME")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| {
                        BaseDirs::new()
                            .map(|dirs| dirs.home_dir().join(".config"))
                            .unwrap_or_else(|| PathBuf::from(".").join(".config"))
                    })
                    .join("weftcss")
            }
        })
}

/// Get the data directory path
///
/// Checks WEFTCSS_DATA_DIR environment variable first, then falls back to:
/// - Unix (Linux/macOS): XDG_DATA_HOME/weftcss or ~/.local/share/weftcss
/// - Windows: %LOCALAPPDATA%\weftcss\data
pub fn data_dir() -> PathBuf {
    std::env::var("WEFTCSS_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            #[cfg(windows)]
            {
                // On Windows, use ProjectDirs for proper AppData paths
                use directories::ProjectDirs;
                ProjectDirs::from("", "", "weftcss")
                    .map(|dirs| dirs.data_dir().to_path_buf())
                    .unwrap_or_else(|| {
                        PathBuf::from(".")
                            .join(".local")
                            .join("share")
                            .join("weftcss")
                    })
            }
            #[cfg(not(windows))]
            {
                // On Unix (Linux/macOS), use XDG_DATA_HOME or $HOME/.local/share
                use directories::BaseDirs;
                std::env::var("XDG_DATA_HOME")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| {
                        BaseDirs::new()
                            .map(|dirs| dirs.home_dir().join(".local").join("share"))
                            .unwrap_or_else(|| PathBuf::from(".").join(".local").join("share"))
                    })
                    .join("weftcss")
            }
        })
}

/// Get the user-global configuration file path
pub fn user_config_path() -> PathBuf {
    config_dir().join("config.yaml")
}

/// Get the system presets directory path (in config dir)
pub fn system_presets_dir() -> PathBuf {
    config_dir().join("presets")
}

/// Get the user presets directory path (in data dir)
pub fn user_presets_dir() -> PathBuf {
    data_dir().join("presets")
}

/// First existing project configuration file under `dir`
pub fn discover_project_file(dir: &Path) -> Option<PathBuf> {
    PROJECT_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
