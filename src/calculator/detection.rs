//! Token classification for expression editing.
//!
//! The calculator does no syntax validation while the user types. These
//! helpers implement the few lexical guards the append rule needs.

use super::scope::CONSTANTS;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches tokens made only of digits and dots, such as `7`, `12.5` or `.`.
    static ref NUMERIC_DOTTED: Regex = Regex::new(r"^[\d.]+$").unwrap();
}

/// Check if the token is purely digits and dots.
pub fn is_numeric_token(token: &str) -> bool {
    NUMERIC_DOTTED.is_match(token)
}

/// Check if the token names any constant bound in the evaluation scope.
pub fn is_constant(token: &str) -> bool {
    CONSTANTS.contains(&token)
}

/// Check if appending `token` to `expression` would produce a doubled dot.
pub fn is_duplicate_dot(expression: &str, token: &str) -> bool {
    token == "." && expression.ends_with('.')
}
