//! `lineage works`: works ranked by how connected their creator is.

use std::io::{self, Write};

use clap::Args;
use lineage_core::Creator;
use lineage_network::{KeyWork, key_works};

use crate::output::{OutputMode, pretty_section, render_mode};

/// Arguments for `lineage works`.
#[derive(Args, Debug, Default)]
pub struct WorksArgs {
    /// Maximum rows to show (defaults to `output.top`).
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Execute `lineage works`.
pub fn run_works(
    args: &WorksArgs,
    creators: &[Creator],
    default_top: usize,
    output: OutputMode,
) -> anyhow::Result<()> {
    let works: Vec<KeyWork<'_>> = key_works(creators)
        .into_iter()
        .take(args.limit.unwrap_or(default_top))
        .collect();

    render_mode(output, &works, |k, w| render_works_text(k, w), |k, w| render_works_pretty(k, w))
}

fn render_works_text(works: &[KeyWork<'_>], w: &mut dyn Write) -> io::Result<()> {
    for k in works {
        writeln!(w, "{}  {}  {}  {}", k.influence_score, k.work.id, k.work.year, k.creator.id)?;
    }
    Ok(())
}

fn render_works_pretty(works: &[KeyWork<'_>], w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, "Key Works")?;
    for (rank, k) in works.iter().enumerate() {
        writeln!(
            w,
            "{:>3}. {} ({}, {}) by {} [{}]",
            rank + 1,
            k.work.title,
            k.work.year,
            k.work.kind,
            k.creator.name,
            k.influence_score
        )?;
    }
    Ok(())
}
