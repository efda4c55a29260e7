//! Null/empty predicates and fallback values.
//!
//! Every function accepts either a `&str` or an `Option<&str>`; `None` is
//! treated exactly like the empty string.

/// Placeholder returned by [`with_na_default`].
pub const NOT_AVAILABLE: &str = "N/A";

pub fn is_blank<'a>(s: impl Into<Option<&'a str>>) -> bool {
    s.into().map_or(true, str::is_empty)
}

pub fn is_present<'a>(s: impl Into<Option<&'a str>>) -> bool {
    !is_blank(s)
}

/// Returns `s` when it has content, otherwise `fallback`.
pub fn with_default<'a>(s: impl Into<Option<&'a str>>, fallback: &'a str) -> &'a str {
    match s.into() {
        Some(value) if !value.is_empty() => value,
        _ => fallback,
    }
}

pub fn with_na_default<'a>(s: impl Into<Option<&'a str>>) -> &'a str {
    with_default(s, NOT_AVAILABLE)
}

/// True when `value` equals none of `candidates`.
pub fn not_contains<T: PartialEq>(value: &T, candidates: &[T]) -> bool {
    !candidates.contains(value)
}
