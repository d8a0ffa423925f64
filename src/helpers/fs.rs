//! File System Utilities
//!
//! Configuration directory management for the persisted shell state.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use home::home_dir;
use std::fs;
use std::path::{Path, PathBuf};

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/atrium/` or `$XDG_CONFIG_HOME/atrium/`
/// - **macOS**: `~/Library/Application Support/io.atrium.atrium/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\atrium\atrium\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("io", "atrium", "atrium") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    let config_dir = project_dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    // Migrate from the legacy dotfile location if present
    if let Some(home) = home_dir() {
        let old_config_path = home.join(".atrium");
        if old_config_path.exists() {
            let _ = copy_dir_files(&old_config_path, config_dir);
            let _ = fs::remove_dir_all(&old_config_path);
        }
    }

    Ok(config_dir.to_path_buf())
}

/// Copy files (not directories) from source to destination
fn copy_dir_files(src: &PathBuf, dst: &Path) -> Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            continue;
        }

        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        fs::copy(&src_path, &dst_path)?;
    }
    Ok(())
}
