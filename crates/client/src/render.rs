//! Plain-text table rendering.
//!
//! Column widths are measured in terminal cells so CJK labels line up.

use std::io::{self, Write};

use console::{Alignment, measure_text_width, pad_str, style};

/// Column alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

impl From<Align> for Alignment {
    fn from(align: Align) -> Self {
        match align {
            Align::Left => Alignment::Left,
            Align::Right => Alignment::Right,
        }
    }
}

/// A text table with a header row.
#[derive(Clone, Debug, Default)]
pub struct Table {
    headers: Vec<(String, Align)>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn column(mut self, header: impl Into<String>, align: Align) -> Self {
        self.headers.push((header.into(), align));
        self
    }

    /// Appends a row. Missing cells render empty; extra cells are dropped.
    pub fn push_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(index, (header, _))| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(index))
                    .map(|cell| measure_text_width(cell))
                    .chain(std::iter::once(measure_text_width(header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn write_to(&self, out: &mut dyn Write) -> io::Result<()> {
        let widths = self.widths();

        let header: Vec<String> = self
            .headers
            .iter()
            .zip(&widths)
            .map(|((text, align), &width)| {
                style(pad_str(text, width, (*align).into(), None)).bold().to_string()
            })
            .collect();
        writeln!(out, "{}", header.join("  ").trim_end())?;

        let rule: Vec<String> = widths.iter().map(|&width| "─".repeat(width)).collect();
        writeln!(out, "{}", style(rule.join("  ")).dim())?;

        for row in &self.rows {
            let cells: Vec<String> = self
                .headers
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(index, ((_, align), &width))| {
                    let cell = row.get(index).map(String::as_str).unwrap_or("");
                    pad_str(cell, width, (*align).into(), None).into_owned()
                })
                .collect();
            writeln!(out, "{}", cells.join("  ").trim_end())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(table: &Table) -> String {
        console::set_colors_enabled(false);
        let mut out = Vec::new();
        table.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn pads_to_widest_cell() {
        let mut table = Table::new()
            .column("Name", Align::Left)
            .column("N", Align::Right);
        table.push_row(vec!["Mario".into(), "8".into()]);
        table.push_row(vec!["Toad".into(), "12".into()]);

        let text = render(&table);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "Name    N");
        assert_eq!(lines[2], "Mario   8");
        assert_eq!(lines[3], "Toad   12");
    }

    #[test]
    fn measures_wide_characters() {
        let mut table = Table::new().column("キャラ", Align::Left).column("N", Align::Right);
        table.push_row(vec!["A".into(), "1".into()]);

        let text = render(&table);
        // "キャラ" is six cells wide.
        assert_eq!(text.lines().nth(2).unwrap(), "A       1");
    }
}
