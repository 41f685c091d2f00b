//! `lineage bridges`: creators that connect otherwise separate circles.

use std::io::{self, Write};

use clap::Args;
use lineage_core::Creator;
use lineage_network::Bridge;
use lineage_network::graph::InfluenceGraph;
use lineage_network::metrics::betweenness::find_bridges;

use crate::cmd::label;
use crate::output::{OutputMode, Renderable, render_list};

/// Arguments for `lineage bridges`.
#[derive(Args, Debug, Default)]
pub struct BridgesArgs {
    /// Maximum rows to show.
    #[arg(long)]
    pub limit: Option<usize>,
}

struct BridgeRow<'a>(Bridge<'a>);

impl Renderable for BridgeRow<'_> {
    fn render_human(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(
            w,
            "{:<44} {:>7.4}",
            label(self.0.creator),
            self.0.betweenness_centrality
        )
    }

    fn render_json(&self, w: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer(&mut *w, &self.0).map_err(io::Error::other)
    }

    fn render_table(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(w, "{}  {:.4}", self.0.creator.id, self.0.betweenness_centrality)
    }

    fn table_headers() -> &'static [&'static str] {
        &["id", "betweenness"]
    }
}

/// Execute `lineage bridges`.
pub fn run_bridges(args: &BridgesArgs, creators: &[Creator], output: OutputMode) -> anyhow::Result<()> {
    let g = InfluenceGraph::from_creators(creators);
    let rows: Vec<BridgeRow<'_>> = find_bridges(&g)
        .into_iter()
        .take(args.limit.unwrap_or(usize::MAX))
        .map(BridgeRow)
        .collect();

    if rows.is_empty() && output == OutputMode::Pretty {
        println!("No bridge creators: every shortest path avoids every intermediate creator.");
        return Ok(());
    }
    render_list(&rows, output)?;
    Ok(())
}
