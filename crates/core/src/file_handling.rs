//! Reading the command catalog from disk.
//!
//! A missing catalog file is bootstrapped with a small demo catalog so the
//! first start has something to pick from.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::command_definitions::CommandRecord;
use crate::config::BOOTSTRAP_CATALOG;
use crate::error::{Error, Result};

/// Writes the demo catalog to `config_path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created.
pub fn write_bootstrap_catalog(config_path: &str) -> Result<()> {
    let io_error = |e| Error::io_error("config".to_string(), config_path.to_string(), e);

    if let Some(parent) = Path::new(config_path).parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    fs::write(config_path, BOOTSTRAP_CATALOG).map_err(io_error)
}

/// Parses a catalog from YAML text. `source` is used in error messages.
///
/// # Errors
///
/// Returns an error if the YAML is malformed or contains no commands.
pub fn parse_catalog(yaml: &str, source: &str) -> Result<Vec<CommandRecord>> {
    let records: Vec<CommandRecord> = serde_yaml::from_str(yaml).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "config".to_string(),
            source.to_string(),
            e,
        )
    })?;

    if records.is_empty() {
        return Err(Error::empty_catalog(source.to_string()));
    }

    Ok(records)
}

/// Loads the command catalog.
///
/// If the file does not exist it is created with the demo catalog first and
/// a notice is printed.
///
/// # Errors
///
/// Returns an error if:
/// - The catalog file cannot be read or bootstrapped
/// - The YAML is malformed or doesn't match the expected structure
/// - The catalog is empty
///
/// # Examples
///
/// ```no_run
/// use cmdpick_core::file_handling::get_catalog;
///
/// let catalog = get_catalog("/home/me/.cmdpick/commands.yml")?;
/// println!("Loaded {} commands", catalog.len());
/// # Ok::<(), cmdpick_core::error::Error>(())
/// ```
pub fn get_catalog(config_path: &str) -> Result<Vec<CommandRecord>> {
    if !Path::new(config_path).exists() {
        write_bootstrap_catalog(config_path)?;
        println!("Init bootstrap demo commands, please modify it: {config_path}");
        info!("Wrote bootstrap catalog to `{config_path}`");
    }

    let yaml = fs::read_to_string(config_path)
        .map_err(|e| Error::io_error("config".to_string(), config_path.to_string(), e))?;
    let records = parse_catalog(&yaml, config_path)?;

    debug!("Loaded {} commands from `{config_path}`", records.len());
    Ok(records)
}
