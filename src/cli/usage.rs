//! Usage text shown when the command line cannot be turned into menus

use crate::pipeline::CUISINE_LETTERS;

/// Build the usage text: description, syntax, an example and the input rules.
pub fn usage_text() -> String {
    format!(
        "\
Description:
   Given list of number of dishes per cuisine, lists all possible menus.
   A menu contains exactly one dish from each cuisine and all cuisines must be included.
   Cuisines are indicated by letters and dishes by numbers.

Usage:
   menugen dishes1 dishes2 ...
   Example: menugen 3 4 5 6
   In this example, we have 4 cuisines, each with 3, 4, 5 and 6 dishes.

Notes:
   Maximum number of cuisines i.e. length of list of dishes allowed is {}.
   Number of (non-zero) dishes for a minimum of 1 cuisine is required.
   Floating point numbers will be rounded to nearest integer.
   Cuisines with 0 dishes will be skipped.",
        CUISINE_LETTERS.len()
    )
}
