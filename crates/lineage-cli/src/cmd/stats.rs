//! `lineage stats`: summary statistics for the dataset's network.

use std::io::{self, Write};

use lineage_core::Creator;
use lineage_network::graph::{InfluenceGraph, NetworkStats};

use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Execute `lineage stats`.
pub fn run_stats(creators: &[Creator], output: OutputMode) -> anyhow::Result<()> {
    let g = InfluenceGraph::from_creators(creators);
    let stats = NetworkStats::from_graph(&g);

    render_mode(output, &stats, render_stats_text, render_stats_pretty)
}

fn render_stats_text(s: &NetworkStats, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "nodes  {}", s.node_count)?;
    writeln!(w, "edges  {}", s.edge_count)?;
    writeln!(w, "density  {:.4}", s.density)?;
    writeln!(w, "average_degree  {:.2}", s.average_degree)?;
    writeln!(w, "components  {}", s.component_count)?;
    writeln!(w, "isolated  {}", s.isolated_node_count)?;
    writeln!(w, "max_in_degree  {}", s.max_in_degree)?;
    writeln!(w, "max_out_degree  {}", s.max_out_degree)
}

fn render_stats_pretty(s: &NetworkStats, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, "Network Stats")?;
    pretty_kv(w, "Creators", s.node_count.to_string())?;
    pretty_kv(w, "Influence edges", s.edge_count.to_string())?;
    pretty_kv(w, "Density", format!("{:.4}", s.density))?;
    pretty_kv(w, "Average degree", format!("{:.2}", s.average_degree))?;
    pretty_kv(w, "Components", s.component_count.to_string())?;
    pretty_kv(w, "Isolated", s.isolated_node_count.to_string())?;
    pretty_kv(w, "Max in-degree", s.max_in_degree.to_string())?;
    pretty_kv(w, "Max out-degree", s.max_out_degree.to_string())?;
    if s.is_flat() {
        writeln!(w)?;
        writeln!(w, "No influence edges declared.")?;
    }
    Ok(())
}
