//! `lineage clusters`: connected components presented as movements.

use std::io::{self, Write};

use lineage_core::Creator;
use lineage_network::{MovementCluster, movement_clusters};

use crate::output::{OutputMode, pretty_section, render_mode};

/// Execute `lineage clusters`.
pub fn run_clusters(creators: &[Creator], output: OutputMode) -> anyhow::Result<()> {
    let clusters = movement_clusters(creators);
    render_mode(
        output,
        &clusters,
        |c, w| render_clusters_text(c, w),
        |c, w| render_clusters_pretty(c, w),
    )
}

fn render_clusters_text(clusters: &[MovementCluster<'_>], w: &mut dyn Write) -> io::Result<()> {
    for cluster in clusters {
        let ids: Vec<&str> = cluster.members.iter().map(|c| c.id.as_str()).collect();
        writeln!(w, "{}  {}  {}", cluster.name, cluster.era, ids.join(","))?;
    }
    Ok(())
}

fn render_clusters_pretty(clusters: &[MovementCluster<'_>], w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, "Movements")?;
    for cluster in clusters {
        writeln!(
            w,
            "{} · {} · {} member(s)",
            cluster.name,
            cluster.era,
            cluster.members.len()
        )?;
        let names: Vec<&str> = cluster.members.iter().map(|c| c.name.as_str()).collect();
        writeln!(w, "  {}", names.join(", "))?;
    }
    Ok(())
}
