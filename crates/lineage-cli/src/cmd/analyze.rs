//! `lineage analyze`: full network report.

use std::io::{self, Write};

use clap::Args;
use lineage_core::Creator;
use lineage_network::{NetworkMetrics, analyze_network};

use crate::cmd::label;
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `lineage analyze`.
#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// Rows per ranking in pretty/text output (defaults to `output.top`).
    #[arg(long)]
    pub top: Option<usize>,
}

/// Execute `lineage analyze`.
pub fn run_analyze(
    args: &AnalyzeArgs,
    creators: &[Creator],
    default_top: usize,
    output: OutputMode,
) -> anyhow::Result<()> {
    let metrics = analyze_network(creators);
    let top = args.top.unwrap_or(default_top);

    render_mode(
        output,
        &metrics,
        |m, w| render_analyze_text(m, top, w),
        |m, w| render_analyze_pretty(m, top, w),
    )
}

fn render_analyze_text(m: &NetworkMetrics<'_>, top: usize, w: &mut dyn Write) -> io::Result<()> {
    writeln!(
        w,
        "nodes={} edges={} density={:.4} average_degree={:.2} components={}",
        m.total_nodes,
        m.total_edges,
        m.density,
        m.average_degree,
        m.connected_components.len()
    )?;
    for s in m.most_influential.iter().take(top) {
        writeln!(w, "influence  {}  {:.2}", s.creator.id, s.score)?;
    }
    for s in m.most_central.iter().take(top) {
        writeln!(w, "centrality  {}  {:.4}", s.creator.id, s.score)?;
    }
    for c in m.clustering_coefficients.iter().take(top) {
        writeln!(w, "clustering  {}  {:.4}", c.creator.id, c.coefficient)?;
    }
    for b in m.bridges.iter().take(top) {
        writeln!(w, "bridge  {}  {:.4}", b.creator.id, b.betweenness_centrality)?;
    }
    for chain in m.longest_chains.iter().take(top) {
        let ids: Vec<&str> = chain.path.iter().map(|c| c.id.as_str()).collect();
        writeln!(w, "chain  {}  {}", chain.length, ids.join(">"))?;
    }
    Ok(())
}

fn render_analyze_pretty(m: &NetworkMetrics<'_>, top: usize, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, "Influence Network")?;
    pretty_kv(w, "Creators", m.total_nodes.to_string())?;
    pretty_kv(w, "Influence edges", m.total_edges.to_string())?;
    pretty_kv(w, "Density", format!("{:.4}", m.density))?;
    pretty_kv(w, "Average degree", format!("{:.2}", m.average_degree))?;
    pretty_kv(w, "Components", m.connected_components.len().to_string())?;

    writeln!(w)?;
    pretty_section(w, "Most Influential")?;
    for (rank, s) in m.most_influential.iter().take(top).enumerate() {
        writeln!(w, "{:>3}. {:<40} {:>7.2}", rank + 1, label(s.creator), s.score)?;
    }

    writeln!(w)?;
    pretty_section(w, "Most Central")?;
    for (rank, s) in m.most_central.iter().take(top).enumerate() {
        writeln!(w, "{:>3}. {:<40} {:>7.4}", rank + 1, label(s.creator), s.score)?;
    }

    writeln!(w)?;
    pretty_section(w, "Tightest Circles")?;
    for (rank, c) in m.clustering_coefficients.iter().take(top).enumerate() {
        writeln!(w, "{:>3}. {:<40} {:>7.4}", rank + 1, label(c.creator), c.coefficient)?;
    }

    writeln!(w)?;
    pretty_section(w, "Bridge Creators")?;
    if m.bridges.is_empty() {
        writeln!(w, "  (none)")?;
    }
    for (rank, b) in m.bridges.iter().take(top).enumerate() {
        writeln!(
            w,
            "{:>3}. {:<40} {:>7.4}",
            rank + 1,
            label(b.creator),
            b.betweenness_centrality
        )?;
    }

    writeln!(w)?;
    pretty_section(w, "Longest Chains")?;
    if m.longest_chains.is_empty() {
        writeln!(w, "  (none)")?;
    }
    for chain in m.longest_chains.iter().take(top) {
        let names: Vec<&str> = chain.path.iter().map(|c| c.name.as_str()).collect();
        writeln!(w, "  [{}] {}", chain.length, names.join(" → "))?;
    }

    Ok(())
}
