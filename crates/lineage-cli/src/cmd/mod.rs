pub mod analyze;
pub mod bridges;
pub mod chains;
pub mod clusters;
pub mod completions;
pub mod path;
pub mod separation;
pub mod stats;
pub mod works;

use anyhow::Result;
use lineage_core::Creator;
use lineage_core::config::EffectiveConfig;
use lineage_core::dataset::load_creators;
use lineage_core::error::ErrorCode;
use tracing::{debug, warn};

use crate::output::{CliError, OutputMode, render_error};

/// Load the configured dataset, rendering a structured error on failure.
pub fn load_dataset(config: &EffectiveConfig, output: OutputMode) -> Result<Vec<Creator>> {
    let creators = match load_creators(&config.data_path) {
        Ok(creators) => creators,
        Err(err) => {
            render_error(output, &CliError::from_code(err.code(), err.to_string()))?;
            anyhow::bail!("failed to load dataset {}", config.data_path.display());
        }
    };

    let max_nodes = config.project.analysis.max_nodes;
    if creators.len() > max_nodes {
        warn!(
            creators = creators.len(),
            max_nodes, "dataset exceeds analysis.max_nodes; chain and bridge analysis may be slow"
        );
    }
    debug!(creators = creators.len(), path = %config.data_path.display(), "dataset loaded");

    Ok(creators)
}

/// Fail with `CreatorNotFound` unless every id names a creator.
pub fn require_creators(creators: &[Creator], ids: &[&str], output: OutputMode) -> Result<()> {
    for id in ids {
        if !creators.iter().any(|c| c.id == *id) {
            render_error(
                output,
                &CliError::from_code(ErrorCode::CreatorNotFound, format!("creator '{id}' not found")),
            )?;
            anyhow::bail!("creator '{id}' not found");
        }
    }
    Ok(())
}

/// Display label for a creator: `Name (years)`, or just the name.
#[must_use]
pub fn label(creator: &Creator) -> String {
    if creator.years.is_empty() {
        creator.name.clone()
    } else {
        format!("{} ({})", creator.name, creator.years)
    }
}
