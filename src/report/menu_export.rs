//! Menu table display and CSV export

use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Table};
use polars::prelude::*;

use crate::pipeline::{MenuSet, DISHES_COLUMN, MENU_NUMBER_COLUMN};

/// Default output file for the menu table
pub const DEFAULT_OUTPUT_FILE: &str = "menus.txt";

/// Build the `MenuNumber`/`Dishes` table for terminal display.
pub fn menu_table(menus: &MenuSet) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new(MENU_NUMBER_COLUMN).add_attribute(Attribute::Bold),
        Cell::new(DISHES_COLUMN).add_attribute(Attribute::Bold),
    ]);

    for (label, dishes) in menus.iter() {
        table.add_row(vec![Cell::new(label), Cell::new(dishes)]);
    }

    table
}

/// Print the menu table, indented to match the rest of the output
pub fn display_menus(menus: &MenuSet) {
    for line in menu_table(menus).to_string().lines() {
        println!("    {}", line);
    }
}

/// Write the menus as comma-separated values with a `MenuNumber,Dishes` header.
///
/// The file is created, written and closed before this returns.
pub fn write_menus_csv(menus: &MenuSet, path: &Path) -> Result<()> {
    let mut df = menus.to_dataframe()?;

    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(b',')
        .finish(&mut df)
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;

    Ok(())
}

/// Read a menu CSV back into ordered `(MenuNumber, Dishes)` pairs.
pub fn read_menus_csv(path: &Path) -> Result<Vec<(String, String)>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .finish()
        .with_context(|| format!("Failed to load CSV file: {}", path.display()))?
        .collect()
        .with_context(|| format!("Failed to read CSV file: {}", path.display()))?;

    let labels = df
        .column(MENU_NUMBER_COLUMN)
        .with_context(|| format!("Missing '{}' column", MENU_NUMBER_COLUMN))?
        .str()?;
    let dishes = df
        .column(DISHES_COLUMN)
        .with_context(|| format!("Missing '{}' column", DISHES_COLUMN))?
        .str()?;

    let rows = labels
        .into_iter()
        .zip(dishes.into_iter())
        .map(|(label, dish)| {
            (
                label.unwrap_or_default().to_string(),
                dish.unwrap_or_default().to_string(),
            )
        })
        .collect();

    Ok(rows)
}
