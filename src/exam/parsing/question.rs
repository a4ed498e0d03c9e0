//! Question start detection

use once_cell::sync::Lazy;
use regex::Regex;

static QUESTION_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\\question(?:\s.*)?$").expect("valid question regex"));

/// Determines whether a question starts at the given line.
///
/// A question starts iff the line starts with the command `\question` followed
/// by whitespace or the end of the line.
pub fn starts_question(line: &str) -> bool {
    QUESTION_START.is_match(line)
}
