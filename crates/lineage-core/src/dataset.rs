//! Creator dataset loading.
//!
//! A dataset is a JSON array of [`Creator`] objects in the application's
//! camelCase shape. Loading validates the one precondition the analysis
//! engine relies on: creator IDs are unique. Dangling edge references are
//! left alone, the engine drops them.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::error::ErrorCode;
use crate::model::Creator;

/// Errors that can occur while loading a creator dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The dataset file does not exist.
    #[error("dataset not found: {}", .0.display())]
    NotFound(PathBuf),

    /// I/O error while reading the dataset.
    #[error("failed to read dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not a JSON array of creators.
    #[error("invalid dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two creators share an ID.
    #[error("duplicate creator id '{0}'")]
    DuplicateId(String),
}

impl DatasetError {
    /// Machine-readable code for CLI error rendering.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound(_) => ErrorCode::DatasetNotFound,
            Self::Io { .. } => ErrorCode::InternalUnexpected,
            Self::Parse(_) => ErrorCode::DatasetParseError,
            Self::DuplicateId(_) => ErrorCode::DuplicateCreatorId,
        }
    }
}

/// Parse a dataset from a JSON string.
///
/// # Errors
///
/// Returns [`DatasetError::Parse`] for malformed JSON and
/// [`DatasetError::DuplicateId`] when two creators share an ID.
pub fn parse_creators(json: &str) -> Result<Vec<Creator>, DatasetError> {
    let creators: Vec<Creator> = serde_json::from_str(json)?;
    ensure_unique_ids(&creators)?;
    Ok(creators)
}

/// Load a dataset from a JSON file.
///
/// # Errors
///
/// Returns [`DatasetError::NotFound`] when `path` does not exist, plus every
/// error [`parse_creators`] can return.
#[instrument]
pub fn load_creators(path: &Path) -> Result<Vec<Creator>, DatasetError> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            DatasetError::NotFound(path.to_path_buf())
        } else {
            DatasetError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let creators = parse_creators(&content)?;
    debug!(count = creators.len(), "loaded creator dataset");
    Ok(creators)
}

fn ensure_unique_ids(creators: &[Creator]) -> Result<(), DatasetError> {
    let mut seen = HashSet::with_capacity(creators.len());
    for creator in creators {
        if !seen.insert(creator.id.as_str()) {
            return Err(DatasetError::DuplicateId(creator.id.clone()));
        }
    }
    Ok(())
}
