//! `kart presets`: configured threshold presets.

use std::io::Write;

use anyhow::Result;
use kart_core::Session;

use super::Context;
use crate::render::{Align, Table};

/// Lists presets with their localized labels and flag values.
#[derive(Debug)]
pub struct Presets;

impl Presets {
    pub fn execute(self, session: &Session, ctx: Context, out: &mut dyn Write) -> Result<()> {
        let config = session.config();
        let locale = ctx.locale;

        writeln!(
            out,
            "{}",
            locale.threshold_range(
                config.threshold_stat,
                config.threshold_min,
                config.threshold_max,
                config.default_threshold
            )
        )?;
        writeln!(out)?;

        let mut table = Table::new()
            .column(locale.preset(), Align::Left)
            .column("--preset", Align::Left)
            .column(locale.value(), Align::Right);
        for preset in &config.presets {
            table.push_row(vec![
                locale.preset_label(&preset.name),
                preset.name.clone(),
                preset.value.to_string(),
            ]);
        }
        table.write_to(out)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{Command, fixture};
    use crate::labels::Locale;

    #[test]
    fn lists_default_presets() {
        let text = fixture::run(Command::Presets, fixture::context());

        assert!(text.starts_with("Acceleration threshold range: 0..=30 (default 15)"));
        assert!(text.contains("Middleweight  middleweight"));
        assert!(text.contains("time_attack"));
    }

    #[test]
    fn labels_follow_locale() {
        let mut ctx = fixture::context();
        ctx.locale = Locale::Ja;
        let text = fixture::run(Command::Presets, ctx);

        assert!(text.contains("軽量級"));
        assert!(text.contains("lightweight"));
    }
}
