//! `lineage separation`: degrees of separation for every connected pair.

use std::io::{self, Write};

use lineage_core::Creator;
use lineage_network::{Separation, separation_table};
use serde::Serialize;

use crate::output::{OutputMode, Renderable, render_list};

#[derive(Serialize)]
struct SeparationRow<'a> {
    from: &'a str,
    to: &'a str,
    length: usize,
}

impl<'a> From<Separation<'a>> for SeparationRow<'a> {
    fn from(s: Separation<'a>) -> Self {
        Self {
            from: &s.from.id,
            to: &s.to.id,
            length: s.length,
        }
    }
}

impl Renderable for SeparationRow<'_> {
    fn render_human(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(w, "{:<24} {:<24} {}", self.from, self.to, self.length)
    }

    fn render_json(&self, w: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer(&mut *w, self).map_err(io::Error::other)
    }

    fn render_table(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(w, "{}  {}  {}", self.from, self.to, self.length)
    }

    fn table_headers() -> &'static [&'static str] {
        &["from", "to", "steps"]
    }
}

/// Execute `lineage separation`.
pub fn run_separation(creators: &[Creator], output: OutputMode) -> anyhow::Result<()> {
    let rows: Vec<SeparationRow<'_>> = separation_table(creators)
        .into_iter()
        .map(SeparationRow::from)
        .collect();
    render_list(&rows, output)?;
    Ok(())
}
