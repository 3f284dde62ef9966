// SPDX-FileCopyrightText: 2026 Foods contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Renders catalog items as aligned terminal rows.

use std::error::Error;
use std::io;

use colored::Colorize as _;
use foods_core::Item;

/// Writes catalog items as aligned rows: id, title, price, description.
#[derive(Debug, Default, Clone, Copy)]
pub struct ItemFormatter;

impl ItemFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Writes one row per item.
    ///
    /// Cells are padded before styling so ANSI escapes don't skew the
    /// column widths.
    pub fn write(&self, w: &mut impl io::Write, items: &[Item]) -> Result<(), Box<dyn Error>> {
        let id_width = items
            .iter()
            .map(|item| item.id.as_str().len())
            .max()
            .unwrap_or(0);
        let title_width = items.iter().map(|item| item.title.len()).max().unwrap_or(0);

        for item in items {
            let id = format!("{:>id_width$}", item.id.as_str());
            let title = format!("{:<title_width$}", item.title);
            writeln!(
                w,
                "{}  {}  {}  {}",
                id.dimmed(),
                title.bold(),
                format_price(item),
                item.description
            )?;
        }

        Ok(())
    }
}

/// Formats the price cell, with the previous price struck through when the
/// item carries one.
pub fn format_price(item: &Item) -> String {
    let price = format!("${:.2}", item.price).green();
    match item.old_price {
        Some(old) => format!("{price} {}", format!("${old:.2}").dimmed().strikethrough()),
        None => price.to_string(),
    }
}
