use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use hanru_core::phonetic::{self, parse_tables_toml, PhoneticTables, TablesError};
use hanru_core::settings::{self, SettingsError};

#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Error reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error in phonetic tables: {0}")]
    Tables(#[from] TablesError),
    #[error("Error in settings: {0}")]
    Settings(#[from] SettingsError),
}

fn read(path: &Path) -> Result<String, ConfigFileError> {
    fs::read_to_string(path).map_err(|source| ConfigFileError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Install custom phonetic tables for the rest of the process.
pub fn install_tables(path: &Path) -> Result<(), ConfigFileError> {
    PhoneticTables::init_custom(read(path)?)?;
    Ok(())
}

/// Install custom settings for the rest of the process.
pub fn install_settings(path: &Path) -> Result<(), ConfigFileError> {
    settings::init_custom(read(path)?)?;
    Ok(())
}

pub fn tables_export() -> &'static str {
    phonetic::default_toml()
}

/// Validate a tables file and describe which tables it overrides.
pub fn tables_validate(path: &Path) -> Result<String, ConfigFileError> {
    let overrides = parse_tables_toml(&read(path)?)?;
    let origin = |custom: bool| if custom { "custom" } else { "builtin" };
    Ok(format!(
        "OK: initials={}, vowels={}, finals={}",
        origin(overrides.initials.is_some()),
        origin(overrides.vowels.is_some()),
        origin(overrides.finals.is_some()),
    ))
}

pub fn settings_export() -> &'static str {
    settings::default_toml()
}

pub fn settings_validate(path: &Path) -> Result<String, ConfigFileError> {
    let s = settings::parse_settings_toml(&read(path)?)?;
    Ok(format!(
        "OK: console.show_prompt={}, output.line_ending={:?}, output.flush_each_line={}",
        s.console.show_prompt, s.output.line_ending, s.output.flush_each_line
    ))
}
