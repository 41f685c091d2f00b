//! `lineage path` and `lineage lineage`: two-creator path queries.
//!
//! `path` answers "how many steps apart are they", ignoring direction.
//! `lineage` answers "did influence flow from one to the other".

use std::io::{self, Write};

use clap::Args;
use lineage_core::Creator;
use lineage_network::{CreatorPath, directed_path, undirected_path};
use serde::Serialize;

use crate::cmd::{label, require_creators};
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments shared by `lineage path` and `lineage lineage`.
#[derive(Args, Debug)]
pub struct PathArgs {
    /// Starting creator ID.
    pub from: String,

    /// Target creator ID.
    pub to: String,
}

/// Which question is being asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    Separation,
    Lineage,
}

#[derive(Debug, Serialize)]
struct PathReport<'a> {
    kind: PathKind,
    from: &'a str,
    to: &'a str,
    /// `null` when the creators are not connected.
    path: Option<CreatorPath<'a>>,
}

/// Execute `lineage path` (undirected) or `lineage lineage` (directed).
pub fn run_path(
    args: &PathArgs,
    kind: PathKind,
    creators: &[Creator],
    output: OutputMode,
) -> anyhow::Result<()> {
    require_creators(creators, &[&args.from, &args.to], output)?;

    let path = match kind {
        PathKind::Separation => undirected_path(creators, &args.from, &args.to),
        PathKind::Lineage => directed_path(creators, &args.from, &args.to),
    };

    let report = PathReport {
        kind,
        from: &args.from,
        to: &args.to,
        path,
    };

    render_mode(output, &report, render_path_text, render_path_pretty)
}

fn render_path_text(r: &PathReport<'_>, w: &mut dyn Write) -> io::Result<()> {
    match r.path {
        Some(ref p) => {
            let ids: Vec<&str> = p.path.iter().map(|c| c.id.as_str()).collect();
            writeln!(w, "{}  {}", p.length, ids.join(" "))
        }
        None => writeln!(w, "no connection"),
    }
}

fn render_path_pretty(r: &PathReport<'_>, w: &mut dyn Write) -> io::Result<()> {
    let heading = match r.kind {
        PathKind::Separation => "Degrees of Separation",
        PathKind::Lineage => "Influence Lineage",
    };
    pretty_section(w, heading)?;

    let Some(ref p) = r.path else {
        let reason = match r.kind {
            PathKind::Separation => "not connected",
            PathKind::Lineage => "no influence flows this way",
        };
        return writeln!(w, "{} → {}: {reason}", r.from, r.to);
    };

    pretty_kv(w, "Steps", p.length.to_string())?;
    let arrow = match r.kind {
        PathKind::Separation => "—",
        PathKind::Lineage => "→",
    };
    for (i, creator) in p.path.iter().enumerate() {
        if i == 0 {
            writeln!(w, "  {}", label(creator))?;
        } else {
            writeln!(w, "  {arrow} {}", label(creator))?;
        }
    }
    Ok(())
}
