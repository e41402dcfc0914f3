//! Subcommands of the `kart` binary.
//!
//! Each command receives the loaded [`Session`] and writes to the given
//! output, so commands can be exercised against an in-memory buffer.

mod list;
mod presets;
mod search;
mod simulate;

pub use list::{CatalogKind, List};
pub use presets::Presets;
pub use search::Search;
pub use simulate::Simulate;

use std::io::Write;

use anyhow::Result;
use clap::Subcommand;
use kart_core::Session;

use crate::labels::Locale;

/// Output settings shared by every command.
#[derive(Clone, Copy, Debug)]
pub struct Context {
    pub locale: Locale,
    pub result_limit: usize,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rank combinations meeting a threshold by weighted speed
    Search(Search),

    /// Show a pair's combined stats and every pair with identical stats
    Simulate(Simulate),

    /// List catalog entries in selector order
    List(List),

    /// Show threshold presets and the accepted range
    Presets,
}

impl Command {
    pub fn execute(self, session: &Session, ctx: Context, out: &mut dyn Write) -> Result<()> {
        match self {
            Command::Search(cmd) => cmd.execute(session, ctx, out),
            Command::Simulate(cmd) => cmd.execute(session, ctx, out),
            Command::List(cmd) => cmd.execute(session, out),
            Command::Presets => Presets.execute(session, ctx, out),
        }
    }
}
