//! Menu generation as an iterative Cartesian product over cuisines

use anyhow::Result;
use polars::prelude::*;

use super::cuisine::CuisineSpec;

/// Separator placed between dishes of a menu
pub const DISH_SEPARATOR: &str = " ";

/// Column holding the `Menu<k>` labels
pub const MENU_NUMBER_COLUMN: &str = "MenuNumber";

/// Column holding the space-separated dishes of a menu
pub const DISHES_COLUMN: &str = "Dishes";

/// Every menu for a cuisine spec, in generation order.
///
/// The first cuisine varies slowest and the last varies fastest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSet {
    cuisine_count: usize,
    menus: Vec<String>,
}

impl MenuSet {
    /// Number of menus
    pub fn len(&self) -> usize {
        self.menus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }

    /// Number of cuisines each menu draws from
    pub fn cuisine_count(&self) -> usize {
        self.cuisine_count
    }

    /// Menu strings in generation order
    pub fn dishes(&self) -> &[String] {
        &self.menus
    }

    /// `Menu1`, `Menu2`, ... one per menu
    pub fn labels(&self) -> Vec<String> {
        (1..=self.menus.len()).map(menu_label).collect()
    }

    /// Iterate over `(label, dishes)` pairs in generation order.
    pub fn iter(&self) -> impl Iterator<Item = (String, &str)> + '_ {
        self.menus
            .iter()
            .enumerate()
            .map(|(i, menu)| (menu_label(i + 1), menu.as_str()))
    }

    /// Build the two-column `MenuNumber`/`Dishes` frame used for export.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let df = DataFrame::new(vec![
            Column::new(MENU_NUMBER_COLUMN.into(), self.labels()),
            Column::new(DISHES_COLUMN.into(), self.menus.clone()),
        ])?;
        Ok(df)
    }
}

/// Label for the k-th menu (1-based)
pub fn menu_label(k: usize) -> String {
    format!("Menu{}", k)
}

/// Dish identifiers for one cuisine: `letter` followed by 1..=count.
pub fn dish_ids(letter: char, count: usize) -> Vec<String> {
    (1..=count).map(|n| format!("{}{}", letter, n)).collect()
}

/// Pair every element of `outer` with every element of `inner`.
///
/// Outer elements vary slowest: for each outer element in order, all inner
/// elements are appended in order.
pub fn cross_product(outer: &[String], inner: &[String], sep: &str) -> Vec<String> {
    let mut result = Vec::with_capacity(outer.len().saturating_mul(inner.len()));
    for left in outer {
        for right in inner {
            let mut menu = String::with_capacity(left.len() + sep.len() + right.len());
            menu.push_str(left);
            menu.push_str(sep);
            menu.push_str(right);
            result.push(menu);
        }
    }
    result
}

/// Generate every menu for the given cuisines.
///
/// A single cuisine yields its dish list unchanged. With more cuisines the
/// accumulated menus are folded against each next cuisine's dishes.
pub fn generate_menus(spec: &CuisineSpec) -> MenuSet {
    let mut cuisines = spec
        .cuisines()
        .map(|(letter, count)| dish_ids(letter, count));

    let first = cuisines.next().unwrap_or_default();
    let menus = cuisines.fold(first, |acc, dishes| {
        cross_product(&acc, &dishes, DISH_SEPARATOR)
    });

    MenuSet {
        cuisine_count: spec.len(),
        menus,
    }
}
