//! Birth date persistence
//!
//! One TOML slot file holds the single stored birth date; every surface
//! reads the same slot, so the value and its MM/DD/YYYY format agree
//! everywhere. Lookup order: $AGECAL_HOME, then ~/.config/agecal, then
//! the platform config directory. Writes go to the first path in the
//! chain, last write wins.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::BirthDate;
use crate::error::StoreError;

const AGECAL_HOME_ENV: &str = "AGECAL_HOME";
const SLOT_FILE: &str = "birthdate.toml";

#[derive(Debug, Serialize, Deserialize)]
struct Slot {
    birth_date: BirthDate,
}

pub(crate) fn load() -> Option<BirthDate> {
    load_internal(false)
}

pub(crate) fn load_quiet() -> Option<BirthDate> {
    load_internal(true)
}

fn load_internal(quiet: bool) -> Option<BirthDate> {
    for path in slot_paths() {
        if let Some(birth) = read_slot(&path, quiet) {
            return Some(birth);
        }
    }
    None
}

/// Write the slot file, creating parent directories as needed.
/// Returns the path that was written.
pub(crate) fn save(birth: BirthDate) -> Result<PathBuf, StoreError> {
    let path = slot_paths().into_iter().next().ok_or(StoreError::NoHome)?;
    write_slot(&path, birth)?;
    Ok(path)
}

fn read_slot(path: &Path, quiet: bool) -> Option<BirthDate> {
    if !path.exists() {
        return None;
    }
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            if !quiet {
                eprintln!("Warning: Failed to read {}: {}", path.display(), e);
            }
            return None;
        }
    };
    match toml::from_str::<Slot>(&content) {
        Ok(slot) => Some(slot.birth_date),
        Err(e) => {
            if !quiet {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
            }
            None
        }
    }
}

fn write_slot(path: &Path, birth: BirthDate) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StoreError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    let content = toml::to_string(&Slot { birth_date: birth })?;
    fs::write(path, content).map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

fn slot_paths() -> Vec<PathBuf> {
    // AGECAL_HOME overrides the whole chain
    if let Ok(home) = env::var(AGECAL_HOME_ENV) {
        return vec![PathBuf::from(home).join(SLOT_FILE)];
    }

    let mut paths = Vec::new();

    // 1. XDG config: ~/.config/agecal/birthdate.toml (Linux/cross-platform)
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".config").join("agecal").join(SLOT_FILE));
    }

    // 2. macOS Application Support: ~/Library/Application Support/agecal/birthdate.toml
    if let Some(config_dir) = dirs::config_dir() {
        let macos_path = config_dir.join("agecal").join(SLOT_FILE);
        if !paths.contains(&macos_path) {
            paths.push(macos_path);
        }
    }

    paths
}
