//! Dish-count parsing and cuisine validation

use crate::cli::usage_text;

use super::error::MenuError;

/// Letters assigned to cuisines by position, after zero-count cuisines are removed.
pub const CUISINE_LETTERS: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Validated dish counts, one per retained cuisine.
///
/// Every count is strictly positive and there are at most
/// `CUISINE_LETTERS.len()` cuisines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CuisineSpec {
    counts: Vec<usize>,
    dropped: usize,
}

impl CuisineSpec {
    /// Parse raw command-line tokens and validate them into a `CuisineSpec`.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, MenuError> {
        let counts = parse_counts(tokens)?;
        Self::from_counts(&counts)
    }

    /// Validate integer dish counts, dropping cuisines that have no dishes.
    pub fn from_counts(counts: &[i64]) -> Result<Self, MenuError> {
        if counts.is_empty() {
            return Err(MenuError::Usage {
                usage: usage_text(),
            });
        }

        if counts.iter().all(|&c| c == 0) {
            return Err(MenuError::NoDishes);
        }

        let retained: Vec<i64> = counts.iter().copied().filter(|&c| c != 0).collect();
        let dropped = counts.len() - retained.len();

        if retained.iter().any(|&c| c <= 0) {
            return Err(MenuError::Invariant(
                "Number of dishes must be positive for all cuisines.".to_string(),
            ));
        }

        if retained.len() > CUISINE_LETTERS.len() {
            return Err(MenuError::TooManyCuisines {
                count: retained.len(),
                max: CUISINE_LETTERS.len(),
            });
        }

        let counts = retained.into_iter().map(|c| c as usize).collect();
        Ok(Self { counts, dropped })
    }

    /// Dish count per retained cuisine, in input order
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Number of retained cuisines
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// False for every validated `CuisineSpec`
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of zero-count cuisines removed during validation
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Letters of the retained cuisines, starting at 'A'
    pub fn letters(&self) -> &'static [char] {
        &CUISINE_LETTERS[..self.counts.len()]
    }

    /// Iterate over `(letter, dish count)` for each retained cuisine.
    pub fn cuisines(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        CUISINE_LETTERS.iter().copied().zip(self.counts.iter().copied())
    }

    /// Total number of distinct dishes across all cuisines
    pub fn total_dishes(&self) -> u64 {
        self.counts
            .iter()
            .fold(0u64, |acc, &c| acc.saturating_add(c as u64))
    }

    /// Number of menus these counts produce, or `None` if it overflows `u64`.
    pub fn menu_count(&self) -> Option<u64> {
        self.counts
            .iter()
            .try_fold(1u64, |acc, &c| acc.checked_mul(c as u64))
    }
}

/// Convert raw tokens into integer dish counts.
///
/// Decimal tokens are rounded to the nearest integer, half away from zero.
pub fn parse_counts<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<i64>, MenuError> {
    if tokens.is_empty() {
        return Err(MenuError::Usage {
            usage: usage_text(),
        });
    }

    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            parse_count(token.as_ref()).ok_or_else(|| MenuError::InvalidCount {
                position: i + 1,
                token: token.as_ref().to_string(),
            })
        })
        .collect()
}

/// Parse a single dish count, returning `None` for anything non-numeric.
fn parse_count(token: &str) -> Option<i64> {
    let token = token.trim();
    if let Ok(value) = token.parse::<i64>() {
        return Some(value);
    }

    let value = token.parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }

    let rounded = value.round();
    if rounded < i64::MIN as f64 || rounded > i64::MAX as f64 {
        return None;
    }
    Some(rounded as i64)
}
