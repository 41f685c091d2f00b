//! `lineage chains`: longest forward influence chains.

use std::io::{self, Write};

use clap::Args;
use lineage_core::Creator;
use lineage_network::InfluenceChain;
use lineage_network::graph::{InfluenceGraph, longest_chains};

use crate::output::{OutputMode, pretty_section, render_mode};

/// Arguments for `lineage chains`.
#[derive(Args, Debug, Default)]
pub struct ChainsArgs {
    /// Only report chains with at least this many steps.
    #[arg(long, default_value_t = 2)]
    pub min_length: usize,
}

/// Execute `lineage chains`.
pub fn run_chains(args: &ChainsArgs, creators: &[Creator], output: OutputMode) -> anyhow::Result<()> {
    let g = InfluenceGraph::from_creators(creators);
    let chains: Vec<InfluenceChain<'_>> = longest_chains(&g)
        .into_iter()
        .filter(|c| c.length >= args.min_length)
        .collect();

    render_mode(output, &chains, |c, w| render_chains_text(c, w), |c, w| render_chains_pretty(c, w))
}

fn render_chains_text(chains: &[InfluenceChain<'_>], w: &mut dyn Write) -> io::Result<()> {
    for chain in chains {
        let ids: Vec<&str> = chain.path.iter().map(|c| c.id.as_str()).collect();
        writeln!(w, "{}  {}", chain.length, ids.join(" "))?;
    }
    Ok(())
}

fn render_chains_pretty(chains: &[InfluenceChain<'_>], w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, "Influence Chains")?;
    if chains.is_empty() {
        return writeln!(w, "  (none)");
    }
    for chain in chains {
        writeln!(w, "{} → {} ({} steps)", chain.from.name, chain.to.name, chain.length)?;
        let names: Vec<&str> = chain.path.iter().map(|c| c.name.as_str()).collect();
        writeln!(w, "  {}", names.join(" → "))?;
    }
    Ok(())
}
