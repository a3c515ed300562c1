//! Configuration loading and root folder resolution
//!
//! The root folder holds everything Froggy writes: the SQLite database and
//! downloaded call recordings. Resolution priority order:
//! 1. Command-line argument (highest priority)
//! 2. `FROGGY_ROOT` environment variable
//! 3. TOML config file (`root_folder` key)
//! 4. OS-dependent compiled default (fallback)

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Environment variable consulted when no CLI argument is given
pub const ROOT_ENV_VAR: &str = "FROGGY_ROOT";

/// Resolve the root folder for a Froggy binary
pub fn resolve_root_folder(cli_arg: Option<&str>) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(ROOT_ENV_VAR) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = locate_config_file() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(root_folder) = config.get("root_folder").and_then(|v| v.as_str()) {
                    return PathBuf::from(root_folder);
                }
            }
        }
    }

    // Priority 4: OS-dependent compiled default
    default_root_folder()
}

/// Find the platform config file (`froggy/config.toml` under the user config
/// dir, with `/etc/froggy/config.toml` as a Linux system-wide fallback)
fn locate_config_file() -> Result<PathBuf> {
    if let Some(path) = dirs::config_dir().map(|d| d.join("froggy").join("config.toml")) {
        if path.exists() {
            return Ok(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/froggy/config.toml");
        if system_config.exists() {
            return Ok(system_config);
        }
    }

    Err(Error::Config("No config file found".to_string()))
}

/// OS-dependent default root folder
fn default_root_folder() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("froggy"))
        .unwrap_or_else(|| PathBuf::from("./froggy_data"))
}

/// Path of the SQLite database inside the root folder
pub fn database_path(root: &Path) -> PathBuf {
    root.join("froggy.db")
}

/// Directory for locally downloaded call recordings
pub fn audio_dir(root: &Path) -> PathBuf {
    root.join("audio")
}

/// Create the root folder and audio subdirectory if missing
pub fn ensure_directories(root: &Path) -> Result<()> {
    std::fs::create_dir_all(audio_dir(root))?;
    Ok(())
}
