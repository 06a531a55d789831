use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::validation::validate_config_result;
use super::{OncoriskConfig, CONFIG_FILE_NAME};
use crate::errors::ConfigError;
use tracing::{debug, warn};

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse TOML contents and validate the result. `path` only labels errors.
pub fn parse_and_validate_config(
    contents: &str,
    path: &Path,
) -> Result<OncoriskConfig, ConfigError> {
    let config = toml::from_str::<OncoriskConfig>(contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    validate_config_result(&config)?;
    Ok(config)
}

/// Load a discovered config; any failure is logged and yields `None`.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<OncoriskConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents, config_path) {
        Ok(config) => {
            debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Only real read failures are worth a warning; a missing file is the norm.
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` and its parents, nearest first, at most `max_depth` of them.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

pub(crate) fn discover_config_from(start: PathBuf) -> OncoriskConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            OncoriskConfig::default()
        })
}

/// Discover `.oncorisk.toml` from the working directory upwards.
pub fn load_config() -> OncoriskConfig {
    match std::env::current_dir() {
        Ok(current) => discover_config_from(current),
        Err(e) => {
            warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            OncoriskConfig::default()
        }
    }
}

/// Load an explicitly named config file. Every failure is an error.
pub fn load_config_from(path: &Path) -> Result<OncoriskConfig, ConfigError> {
    let contents = read_config_file(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_and_validate_config(&contents, path)
}

/// The explicit file when given, otherwise discovery.
pub fn resolve_config(explicit: Option<&Path>) -> Result<OncoriskConfig, ConfigError> {
    match explicit {
        Some(path) => load_config_from(path),
        None => Ok(load_config()),
    }
}
