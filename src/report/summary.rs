//! Input summary report shown before menus are generated

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::CuisineSpec;

/// Summary of the validated input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSummary {
    pub cuisines: usize,
    pub dishes_per_cuisine: Vec<usize>,
    pub dropped_cuisines: usize,
    pub total_dishes: u64,
    pub total_menus: Option<u64>,
}

impl InputSummary {
    pub fn new(spec: &CuisineSpec) -> Self {
        Self {
            cuisines: spec.len(),
            dishes_per_cuisine: spec.counts().to_vec(),
            dropped_cuisines: spec.dropped(),
            total_dishes: spec.total_dishes(),
            total_menus: spec.menu_count(),
        }
    }

    /// Dish counts rendered as `[3 4 5]`
    pub fn dishes_display(&self) -> String {
        format_counts(&self.dishes_per_cuisine)
    }

    /// Total menus, or "overflow" when the product does not fit in a u64
    pub fn menus_display(&self) -> String {
        match self.total_menus {
            Some(n) => n.to_string(),
            None => "overflow".to_string(),
        }
    }

    /// Build the metric/value table printed by [`InputSummary::display`].
    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("🍽️  Number of cuisines"),
            Cell::new(self.cuisines),
        ]);
        table.add_row(vec![
            Cell::new("📋 Dishes per cuisine"),
            Cell::new(self.dishes_display()),
        ]);
        table.add_row(vec![
            Cell::new("🥄 Number of unique dishes"),
            Cell::new(self.total_dishes),
        ]);
        table.add_row(vec![
            Cell::new("✅ Total number of menus"),
            Cell::new(self.menus_display())
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        table
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("SUMMARY OF INPUTS").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        for line in self.to_table().to_string().lines() {
            println!("    {}", line);
        }
    }
}

/// Render dish counts as a bracketed, space-separated list
pub fn format_counts(counts: &[usize]) -> String {
    let inner: Vec<String> = counts.iter().map(|c| c.to_string()).collect();
    format!("[{}]", inner.join(" "))
}
