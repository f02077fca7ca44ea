//! Error types for menu generation.
//!
//! Every variant is terminal: the binary prints it and exits with a
//! non-zero status. No variant is retried.

use thiserror::Error;

/// Errors that can occur while turning command-line tokens into menus.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuError {
    /// No dish counts were supplied at all.
    ///
    /// Carries the full usage text so the caller can print it verbatim.
    #[error("Incorrect usage: at least one dish count is required")]
    Usage {
        /// Syntax, example and notes for the command line
        usage: String,
    },

    /// A token could not be read as a number.
    #[error("Dish count #{position} ('{token}') is not a number")]
    InvalidCount {
        /// 1-based position of the token on the command line
        position: usize,
        /// The offending token as typed
        token: String,
    },

    /// Every cuisine has zero dishes, so no menu can be built.
    #[error("All cuisines seem to have zero dishes. No menus to generate.")]
    NoDishes,

    /// More cuisines were retained than there are cuisine letters.
    #[error("A maximum of {max} cuisines are allowed, got {count}. Reduce length of input list.")]
    TooManyCuisines {
        /// Number of non-zero cuisines supplied
        count: usize,
        /// Size of the cuisine alphabet
        max: usize,
    },

    /// A non-positive count survived zero filtering.
    #[error("Invariant violated: {0}")]
    Invariant(String),
}

impl MenuError {
    /// Whether the usage text should be shown alongside this error.
    pub fn wants_usage(&self) -> bool {
        matches!(
            self,
            MenuError::Usage { .. } | MenuError::InvalidCount { .. } | MenuError::TooManyCuisines { .. }
        )
    }
}
