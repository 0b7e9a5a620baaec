//! Packing slip

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::packs::{Quantity, RequiredPacks};

/// Errors that can occur when writing a packing slip.
#[derive(Debug, Error)]
pub enum PackingSlipError {
    /// IO error
    #[error("failed to write packing slip: {0}")]
    Io(#[from] io::Error),
}

/// Table of the packs shipped for an order, with a summary of the overshoot.
#[derive(Debug, Clone, Copy)]
pub struct PackingSlip<'a> {
    quantity: Quantity,
    packs: &'a RequiredPacks,
}

impl<'a> PackingSlip<'a> {
    /// Create a slip for `packs` shipped against an order of `quantity` items.
    pub fn new(quantity: Quantity, packs: &'a RequiredPacks) -> Self {
        Self { quantity, packs }
    }

    /// Render the pack table.
    pub fn table(&self) -> String {
        let mut builder = Builder::default();

        builder.push_record(["Pack Size", "Count", "Items"]);

        for (size, count) in self.packs.iter() {
            builder.push_record([
                size.to_string(),
                count.to_string(),
                (i128::from(size) * i128::from(count)).to_string(),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(0..3), Alignment::right());

        table.to_string()
    }

    /// Write the table and summary.
    ///
    /// # Errors
    ///
    /// Returns a [`PackingSlipError`] if writing to `out` fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), PackingSlipError> {
        writeln!(out, "\n{}", self.table())?;

        let lines = [
            (" Ordered:", self.quantity.to_string()),
            (" Shipped:", self.packs.total_items().to_string()),
            (" Overshoot:", self.overshoot().to_string()),
            (" Packs:", self.packs.total_packs().to_string()),
        ];

        let label_width = lines.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        let value_width = lines.iter().map(|(_, value)| value.len()).max().unwrap_or(0);

        for (label, value) in lines {
            writeln!(out, "{label:<label_width$} {value:>value_width$}")?;
        }

        writeln!(out)?;

        Ok(())
    }

    /// Items shipped beyond the order, zero when nothing was ordered.
    fn overshoot(&self) -> i128 {
        if self.packs.is_empty() {
            return 0;
        }

        self.packs.overshoot(self.quantity)
    }
}
