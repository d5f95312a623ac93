//! Event catalogue loading at startup.

use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use thiserror::Error;
use tracing::info;

use crate::domain::{CatalogueParseError, EventDefinition, default_catalogue, parse_catalogue};

/// Errors returned while loading the event catalogue.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Seed file could not be read.
    #[error("failed to read event seed at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Seed file contents are not a valid catalogue.
    #[error("invalid event seed at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: CatalogueParseError,
    },
}

/// Load event definitions from `path`, or the built-in catalogue when no
/// path is configured.
///
/// # Examples
///
/// ```
/// use backend::seed::load_catalogue;
///
/// let events = load_catalogue(None).expect("built-in catalogue");
/// assert_eq!(events.len(), 2);
/// ```
pub fn load_catalogue(path: Option<&Path>) -> Result<Vec<EventDefinition>, SeedError> {
    let Some(path) = path else {
        info!(source = "built-in", "event catalogue loaded");
        return Ok(default_catalogue());
    };

    let contents = read_seed(path)?;
    let definitions = parse_catalogue(&contents).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), count = definitions.len(), "event catalogue loaded");
    Ok(definitions)
}

fn read_seed(path: &Path) -> Result<String, SeedError> {
    let read_error = |source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "event seed path must be a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    dir.read_to_string(Path::new(file_name)).map_err(read_error)
}
