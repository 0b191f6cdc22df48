//! Grid configuration from `config.toml`.
//!
//! ```toml
//! [grid]
//! rows = 10
//! columns = 10
//! ```

use cells_core::sheet::{DEFAULT_COLUMNS, DEFAULT_ROWS};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    grid: Option<GridSection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct GridSection {
    rows: Option<usize>,
    columns: Option<usize>,
}

/// Effective grid settings.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    pub rows: usize,
    pub columns: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
        }
    }
}

/// Load settings from `config_file`, or from the user's config dir when none
/// is given and `use_user_config` is set. Problems with the file fall back to
/// defaults and are returned as warnings.
pub fn load_config(config_file: Option<&Path>, use_user_config: bool) -> (Config, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let path = match config_file {
        Some(path) => Some(path.to_path_buf()),
        None if use_user_config => user_config_path(),
        None => None,
    };

    let Some(path) = path else {
        return (Config::default(), warnings);
    };
    if !path.exists() {
        if config_file.is_some() {
            warnings.push(format!("Config file {} not found", path.display()));
        }
        return (Config::default(), warnings);
    }

    let file = match std::fs::metadata(&path) {
        Ok(meta) if meta.len() > MAX_CONFIG_FILE_BYTES => {
            warnings.push(format!(
                "Refusing to read {}: file too large ({} bytes, max {})",
                path.display(),
                meta.len(),
                MAX_CONFIG_FILE_BYTES
            ));
            None
        }
        Ok(_) => match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<ConfigFile>(&content) {
                Ok(parsed) => Some(parsed),
                Err(err) => {
                    warnings.push(format!("Failed to parse {}: {}", path.display(), err));
                    None
                }
            },
            Err(err) => {
                warnings.push(format!("Failed to read {}: {}", path.display(), err));
                None
            }
        },
        Err(err) => {
            warnings.push(format!("Failed to read {}: {}", path.display(), err));
            None
        }
    };

    let grid = file.and_then(|f| f.grid).unwrap_or_default();
    let defaults = Config::default();
    let config = Config {
        rows: grid.rows.unwrap_or(defaults.rows),
        columns: grid.columns.unwrap_or(defaults.columns),
    };
    log::debug!("loaded config from {}: {:?}", path.display(), config);
    (config, warnings)
}

fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "cells")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}
