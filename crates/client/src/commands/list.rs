//! `kart list`: catalog names in selector order.

use std::io::Write;

use anyhow::Result;
use clap::{Args, ValueEnum};
use kart_core::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CatalogKind {
    Characters,
    Machines,
}

/// List catalog entries in selector order
#[derive(Args, Debug)]
pub struct List {
    /// Which catalog to list
    #[arg(value_enum)]
    pub catalog: CatalogKind,

    /// Characters only: hide stat-identical duplicates, as the ranked search does
    #[arg(long)]
    pub distinct: bool,
}

impl List {
    pub fn execute(self, session: &Session, out: &mut dyn Write) -> Result<()> {
        let table = match self.catalog {
            CatalogKind::Characters if self.distinct => session.distinct_characters(),
            CatalogKind::Characters => session.characters(),
            CatalogKind::Machines => session.machines(),
        };

        for name in table.names() {
            writeln!(out, "{name}")?;
        }
        Ok(())
    }
}
