//! Wildcard matching in the style of the classic `Like` operator.
//!
//! | token    | matches                                  |
//! |----------|------------------------------------------|
//! | `?`      | any single character                     |
//! | `*`      | zero or more characters                  |
//! | `#`      | a single decimal digit                   |
//! | `[abc]`  | one character from the list (ranges ok)  |
//! | `[!abc]` | one character not in the list            |
//!
//! Everything else is literal. `?`, `*` and `#` keep their translation inside
//! brackets too, so `[#x]` means "a digit or `x`" and `[*]` means "`.` or
//! `*`". The whole subject must match and the comparison is case-sensitive.
//! An empty pattern never matches.

use crate::utils::error::{Result, TextError};
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// A wildcard pattern compiled to an anchored regular expression.
#[derive(Debug, Clone)]
pub struct WildcardPattern {
    pattern: String,
    regex: Regex,
}

impl WildcardPattern {
    /// Translates and compiles `pattern`.
    ///
    /// Fails with [`TextError::InvalidPattern`] when the translation is not a
    /// valid expression, e.g. an unclosed `[`.
    pub fn new(pattern: &str) -> Result<Self> {
        let source = translate(pattern);
        tracing::trace!("wildcard '{}' translated to '{}'", pattern, source);

        let regex = Regex::new(&source).map_err(|e| TextError::InvalidPattern {
            pattern: pattern.to_string(),
            source: e,
        })?;

        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    pub fn is_match(&self, s: &str) -> bool {
        !self.pattern.is_empty() && self.regex.is_match(s)
    }

    /// The original wildcard text.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// The anchored expression the wildcard was translated to.
    pub fn regex_source(&self) -> &str {
        self.regex.as_str()
    }
}

impl FromStr for WildcardPattern {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for WildcardPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Reports whether `s` matches `pattern` in full.
///
/// Returns `false` for an absent subject or an empty pattern without
/// compiling anything.
pub fn is_like<'a>(s: impl Into<Option<&'a str>>, pattern: &str) -> Result<bool> {
    let Some(subject) = s.into() else {
        return Ok(false);
    };
    if pattern.is_empty() {
        return Ok(false);
    }

    Ok(WildcardPattern::new(pattern)?.is_match(subject))
}

fn translate(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2 + 2);
    out.push('^');

    let mut in_class = false;
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if in_class {
            match c {
                ']' => {
                    out.push(']');
                    in_class = false;
                }
                '-' => out.push('-'),
                '?' => out.push('.'),
                '*' => out.push_str(".*"),
                '#' => out.push_str(r"\d"),
                _ => push_literal(&mut out, c),
            }
            continue;
        }

        match c {
            '[' => {
                out.push('[');
                if chars.peek() == Some(&'!') {
                    chars.next();
                    out.push('^');
                }
                in_class = true;
            }
            ']' => out.push_str(r"\]"),
            '?' => out.push('.'),
            '*' => out.push_str(".*"),
            '#' => out.push_str(r"\d"),
            _ => push_literal(&mut out, c),
        }
    }

    out.push('$');
    out
}

fn push_literal(out: &mut String, c: char) {
    let mut buf = [0u8; 4];
    out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_wildcard() {
        assert!(is_like("Hello123", "Hello###").unwrap());
        assert!(!is_like("HelloABC", "Hello###").unwrap());
        assert!(!is_like("Hello12", "Hello###").unwrap());
    }

    #[test]
    fn test_star_and_question() {
        assert!(is_like("file.txt", "*.txt").unwrap());
        assert!(!is_like("file.txt.bak", "*.txt").unwrap());
        assert!(!is_like("filextxt", "*.txt").unwrap());
        assert!(is_like("cat", "c?t").unwrap());
        assert!(!is_like("ct", "c?t").unwrap());
        assert!(is_like("", "*").unwrap());
    }

    #[test]
    fn test_absent_subject_or_blank_pattern() {
        assert!(!is_like(None, "*").unwrap());
        assert!(!is_like("anything", "").unwrap());
        assert!(!is_like(None, "[").unwrap());
    }

    #[test]
    fn test_character_classes() {
        assert!(is_like("b", "[abc]").unwrap());
        assert!(!is_like("d", "[abc]").unwrap());
        assert!(is_like("d", "[!abc]").unwrap());
        assert!(!is_like("a", "[!abc]").unwrap());
        assert!(is_like("m", "[a-z]").unwrap());
        assert!(!is_like("M", "[a-z]").unwrap());
        assert!(is_like("x9", "[!0-9]#").unwrap());
    }

    #[test]
    fn test_wildcards_inside_classes() {
        assert!(is_like("5", "[#]").unwrap());
        assert!(!is_like("#", "[#]").unwrap());
        assert!(is_like("x", "[#x]").unwrap());
        assert!(is_like(".", "[*]").unwrap());
        assert!(is_like("*", "[*]").unwrap());
        assert!(!is_like("a", "[*]").unwrap());
        assert!(is_like(".", "[?]").unwrap());
        assert!(!is_like("a", "[?]").unwrap());
        assert!(!is_like("7", "[!#]").unwrap());
        assert!(is_like("a", "[!#]").unwrap());

        assert_eq!(translate("[#]"), r"^[\d]$");
        assert_eq!(translate("[*?]"), "^[.*.]$");
    }

    #[test]
    fn test_other_class_members_are_literal() {
        assert!(is_like("[", "[[]").unwrap());
        assert!(is_like("^", "[^]").unwrap());
        assert!(is_like("a]", "a]").unwrap());
    }

    #[test]
    fn test_empty_classes_are_invalid() {
        for pattern in ["[]", "[!]", "a[]b"] {
            let err = WildcardPattern::new(pattern).unwrap_err();
            assert_eq!(err.pattern(), Some(pattern));
            assert!(is_like("x", pattern).is_err());
        }
    }

    #[test]
    fn test_empty_pattern_never_matches() {
        let pattern = WildcardPattern::new("").unwrap();
        assert!(!pattern.is_match(""));
        assert!(!pattern.is_match("anything"));
        assert!(!is_like("", "").unwrap());
    }

    #[test]
    fn test_literals_are_escaped() {
        assert!(is_like("a+b(c)", "a+b(c)").unwrap());
        assert!(!is_like("aab(c)", "a+b(c)").unwrap());
        assert!(is_like("$5.00", "$#.##").unwrap());
        assert!(is_like(r"C:\temp", r"C:\*").unwrap());
        assert!(is_like("x|y", "x|y").unwrap());
        assert!(!is_like("x", "x|y").unwrap());
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!is_like("README", "readme").unwrap());
        assert!(is_like("README", "READ*").unwrap());
    }

    #[test]
    fn test_invalid_pattern_carries_original() {
        let err = is_like("anything", "[").unwrap_err();
        assert!(matches!(err, TextError::InvalidPattern { .. }));
        assert_eq!(err.pattern(), Some("["));
        assert!(err.to_string().contains('['));

        assert!(is_like("", "abc[!").is_err());
        assert!(WildcardPattern::new("[z-a]").is_err());
    }

    #[test]
    fn test_compiled_pattern() {
        let pattern: WildcardPattern = "IMG_####.jp*g".parse().unwrap();
        assert_eq!(pattern.as_str(), "IMG_####.jp*g");
        assert_eq!(pattern.to_string(), "IMG_####.jp*g");
        assert!(pattern.regex_source().starts_with('^'));
        assert!(pattern.regex_source().ends_with('$'));
        assert!(pattern.is_match("IMG_0042.jpg"));
        assert!(pattern.is_match("IMG_0042.jpeg"));
        assert!(!pattern.is_match("IMG_42.jpg"));
    }

    #[test]
    fn test_translation() {
        assert_eq!(translate("a?b*#"), r"^a.b.*\d$");
        assert_eq!(translate("[!a-c]"), "^[^a-c]$");
        assert_eq!(translate("x.y"), r"^x\.y$");
    }
}
