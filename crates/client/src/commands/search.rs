//! `kart search`: ranked search over distinct characters × machines.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use console::style;
use kart_core::{RankedCombination, SearchQuery, Session, StatKey, Totals, WeightVector};
use serde::Serialize;

use super::Context;
use crate::render::{Align, Table};

/// Rank combinations meeting a threshold by weighted speed
#[derive(Args, Debug, Default)]
pub struct Search {
    /// Minimum combined value of the threshold stat (clamped to the configured range)
    #[arg(long, conflicts_with = "preset", allow_negative_numbers = true)]
    pub threshold: Option<i32>,

    /// Use a named threshold preset instead of a number
    #[arg(long)]
    pub preset: Option<String>,

    /// Road speed weight in percent
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=i64::from(WeightVector::MAX_PERCENT)))]
    pub road: Option<u32>,

    /// Terrain speed weight in percent
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=i64::from(WeightVector::MAX_PERCENT)))]
    pub terrain: Option<u32>,

    /// Water speed weight in percent
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=i64::from(WeightVector::MAX_PERCENT)))]
    pub water: Option<u32>,

    /// Maximum rows to print
    #[arg(long)]
    pub limit: Option<usize>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct SearchOutput<'a> {
    query: SearchQuery,
    total: usize,
    results: Vec<RankedRow<'a>>,
}

#[derive(Serialize)]
struct RankedRow<'a> {
    character: &'a str,
    machine: &'a str,
    score: f64,
    totals: &'a Totals,
}

impl Search {
    /// Resolves flags against the session's configured defaults.
    pub fn query(&self, session: &Session) -> Result<SearchQuery> {
        let config = session.config();

        let requested = match &self.preset {
            Some(name) => config.preset(name)?.value,
            None => self.threshold.unwrap_or(config.default_threshold),
        };
        let threshold = config.threshold(requested)?;
        if threshold.value() != requested {
            tracing::warn!(
                requested,
                clamped = threshold.value(),
                "threshold outside {}..={}, clamped",
                config.threshold_min,
                config.threshold_max
            );
        }

        let defaults = config.default_weights;
        let weights = WeightVector::new(
            self.road.unwrap_or(defaults.road),
            self.terrain.unwrap_or(defaults.terrain),
            self.water.unwrap_or(defaults.water),
        );

        Ok(SearchQuery { threshold, weights })
    }

    pub fn execute(self, session: &Session, ctx: Context, out: &mut dyn Write) -> Result<()> {
        let query = self.query(session)?;
        let ranked = session.search(query);
        let limit = self.limit.unwrap_or(ctx.result_limit).max(1);
        let shown = &ranked[..ranked.len().min(limit)];

        if self.json {
            let output = SearchOutput {
                query,
                total: ranked.len(),
                results: shown.iter().map(RankedRow::from).collect(),
            };
            serde_json::to_writer_pretty(&mut *out, &output)?;
            writeln!(out)?;
            return Ok(());
        }

        let locale = ctx.locale;
        writeln!(
            out,
            "{}",
            locale.threshold_header(query.threshold.stat(), query.threshold.value())
        )?;
        writeln!(
            out,
            "{}",
            locale.weights_header(query.weights.road, query.weights.terrain, query.weights.water)
        )?;
        writeln!(out)?;

        if ranked.is_empty() {
            writeln!(out, "{}", style(locale.no_results()).yellow())?;
            return Ok(());
        }

        let columns = [
            StatKey::Road,
            StatKey::Terrain,
            StatKey::Water,
            StatKey::Accel,
            StatKey::Handling,
            StatKey::Weight,
        ];
        let mut table = Table::new()
            .column(locale.character(), Align::Left)
            .column(locale.machine(), Align::Left)
            .column(locale.score(), Align::Right);
        for key in columns {
            table = table.column(locale.column_label(key), Align::Right);
        }

        for result in shown {
            let mut cells = vec![
                result.character().name.clone(),
                result.machine().name.clone(),
                format!("{:.2}", result.score),
            ];
            cells.extend(
                columns
                    .iter()
                    .filter_map(|&key| result.totals().get(key))
                    .map(|total| total.to_string()),
            );
            table.push_row(cells);
        }
        table.write_to(out)?;

        if shown.len() < ranked.len() {
            writeln!(out)?;
            writeln!(out, "{}", style(locale.truncated(shown.len(), ranked.len())).dim())?;
        }

        Ok(())
    }
}

impl<'a> From<&'a RankedCombination<'a>> for RankedRow<'a> {
    fn from(result: &'a RankedCombination<'a>) -> Self {
        Self {
            character: &result.character().name,
            machine: &result.machine().name,
            score: result.score,
            totals: result.totals(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{Command, fixture};
    use crate::labels::Locale;

    fn search(args: Search) -> String {
        fixture::run(Command::Search(args), fixture::context())
    }

    #[test]
    fn default_threshold_can_match_nothing() {
        let text = search(Search::default());

        assert!(text.contains("Target Acceleration: 15 or higher"));
        assert!(text.contains("No combination matches the conditions."));
    }

    #[test]
    fn ranks_distinct_characters() {
        let text = search(Search {
            threshold: Some(11),
            ..Search::default()
        });
        let rows: Vec<_> = text.lines().skip(5).collect();

        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("Mario"));
        assert!(rows[0].contains("6.75"));
        assert!(rows[1].starts_with("Baby Peach  Standard Kart"));
        assert!(!text.contains("Luigi"));
    }

    #[test]
    fn preset_sets_threshold() {
        let text = search(Search {
            preset: Some("lightweight".to_string()),
            ..Search::default()
        });

        assert!(text.contains("Target Acceleration: 14 or higher"));
        assert_eq!(text.lines().skip(5).count(), 1);
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let session = fixture::session();
        let args = Search {
            preset: Some("heavyweight".to_string()),
            ..Search::default()
        };

        let err = args.query(&session).unwrap_err();
        assert!(err.to_string().contains("heavyweight"));
    }

    #[test]
    fn threshold_is_clamped() {
        let session = fixture::session();
        let args = Search {
            threshold: Some(99),
            ..Search::default()
        };

        assert_eq!(args.query(&session).unwrap().threshold.value(), 30);
    }

    #[test]
    fn limit_truncates_output() {
        let text = search(Search {
            threshold: Some(0),
            limit: Some(2),
            ..Search::default()
        });

        assert!(text.contains("Showing 2 of 6 combinations."));
    }

    #[test]
    fn japanese_headers_match_search_table() {
        let mut ctx = fixture::context();
        ctx.locale = Locale::Ja;
        let text = fixture::run(
            Command::Search(Search {
                threshold: Some(0),
                ..Search::default()
            }),
            ctx,
        );
        let header = text.lines().nth(3).unwrap();

        assert!(header.contains("曲がり"));
        assert!(!header.contains("曲がりやすさ"));
        assert!(header.contains("速度スコア"));
    }

    #[test]
    fn json_output_uses_english_keys() {
        let mut ctx = fixture::context();
        ctx.locale = Locale::Ja;
        let text = fixture::run(
            Command::Search(Search {
                threshold: Some(14),
                json: true,
                ..Search::default()
            }),
            ctx,
        );

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["total"], 1);
        assert_eq!(value["results"][0]["character"], "Baby Peach");
        assert_eq!(value["results"][0]["machine"], "Biddybuggy");
        assert_eq!(value["results"][0]["totals"]["accel"], 14);
        assert_eq!(value["query"]["weights"]["road"], 50);
    }
}
