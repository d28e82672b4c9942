//! Loading and saving `GameConfig` as JSON on disk.

use std::fs;
use std::io;
use std::path::Path;

use crate::config::GameConfig;

/// Reads and validates a config file. Invalid JSON and failed validation both surface as
/// `InvalidData`.
pub fn load_config(path: &Path) -> io::Result<GameConfig> {
    let content = fs::read_to_string(path)?;
    let config: GameConfig = serde_json::from_str(&content)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    config.validate().map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(config)
}

pub fn save_config(config: &GameConfig, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("json.tmp");
    let json = serde_json::to_string_pretty(config).map_err(io::Error::other)?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}
