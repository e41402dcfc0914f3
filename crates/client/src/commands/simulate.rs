//! `kart simulate`: combined stats of one pair and its equivalence set.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use console::style;
use kart_core::{Session, StatKey, Totals};
use serde::Serialize;

use super::Context;
use crate::render::{Align, Table};

/// Show a pair's combined stats and every pair with identical stats
#[derive(Args, Debug)]
pub struct Simulate {
    /// Character name, exactly as listed by `kart list characters`
    #[arg(long, short = 'c')]
    pub character: String,

    /// Machine name, exactly as listed by `kart list machines`
    #[arg(long, short = 'm')]
    pub machine: String,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct SimulateOutput<'a> {
    character: &'a str,
    machine: &'a str,
    totals: &'a Totals,
    equivalents: Vec<Pair<'a>>,
}

#[derive(Serialize)]
struct Pair<'a> {
    character: &'a str,
    machine: &'a str,
}

impl Simulate {
    pub fn execute(self, session: &Session, ctx: Context, out: &mut dyn Write) -> Result<()> {
        let simulation = session.simulate(&self.character, &self.machine)?;
        let selected = &simulation.selected;

        if self.json {
            let output = SimulateOutput {
                character: &selected.character().name,
                machine: &selected.machine().name,
                totals: simulation.totals(),
                equivalents: simulation
                    .equivalents
                    .iter()
                    .map(|combination| Pair {
                        character: &combination.character().name,
                        machine: &combination.machine().name,
                    })
                    .collect(),
            };
            serde_json::to_writer_pretty(&mut *out, &output)?;
            writeln!(out)?;
            return Ok(());
        }

        let locale = ctx.locale;
        writeln!(
            out,
            "{}",
            style(locale.totals_header(&selected.character().name, &selected.machine().name))
                .bold()
        )?;

        let mut totals = Table::new();
        for key in StatKey::COMBINED {
            totals = totals.column(locale.stat_label(key), Align::Right);
        }
        totals.push_row(
            simulation
                .totals()
                .iter()
                .map(|(_, value)| value.to_string())
                .collect(),
        );
        totals.write_to(out)?;
        writeln!(out)?;

        writeln!(out, "{}", style(locale.equivalents_header()).bold())?;
        let mut equivalents = Table::new()
            .column(locale.character(), Align::Left)
            .column(locale.machine(), Align::Left);
        for combination in &simulation.equivalents {
            equivalents.push_row(vec![
                combination.character().name.clone(),
                combination.machine().name.clone(),
            ]);
        }
        equivalents.write_to(out)?;

        if simulation.others().next().is_none() {
            writeln!(out)?;
            writeln!(out, "{}", style(locale.no_other_equivalents()).cyan())?;
        }

        Ok(())
    }
}
