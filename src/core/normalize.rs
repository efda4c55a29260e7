use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s\s+").expect("WHITESPACE_RUN regex should compile"));

/// Replaces `&nbsp;` entities with spaces, then collapses every run of two or
/// more whitespace characters into a single space.
///
/// Lone whitespace characters (including a lone tab or newline) are kept and
/// nothing is trimmed from either end.
pub fn remove_extra_spaces(s: &str) -> String {
    let spaced = s.replace("&nbsp;", " ");
    WHITESPACE_RUN.replace_all(&spaced, " ").into_owned()
}
