use crate::core::{guard, html, hyperlink, normalize, truncate, wildcard};
use crate::utils::error::Result;

/// Method-style access to the string helpers.
///
/// ```
/// use textkit::TextExt;
///
/// assert_eq!("<p>Hi  there</p>".strip_html().remove_extra_spaces(), "Hi there");
/// assert!("report_2024.csv".is_like("report_####.csv").unwrap());
/// ```
pub trait TextExt {
    fn is_blank(&self) -> bool;
    fn is_present(&self) -> bool;
    fn or_default<'a>(&'a self, fallback: &'a str) -> &'a str;
    fn or_na(&self) -> &str;
    fn truncate_chars(&self, max_length: usize) -> Result<String>;
    fn truncate_chars_with(&self, max_length: usize, include_ellipsis: bool) -> Result<String>;
    fn remove_extra_spaces(&self) -> String;
    fn strip_html(&self) -> String;
    fn first_image_src(&self) -> String;
    fn is_like(&self, pattern: &str) -> Result<bool>;
    fn to_hyperlink_html(&self, text: &str, open_in_new_tab: bool) -> String;
}

impl TextExt for str {
    fn is_blank(&self) -> bool {
        guard::is_blank(self)
    }

    fn is_present(&self) -> bool {
        guard::is_present(self)
    }

    fn or_default<'a>(&'a self, fallback: &'a str) -> &'a str {
        guard::with_default(self, fallback)
    }

    fn or_na(&self) -> &str {
        guard::with_na_default(self)
    }

    fn truncate_chars(&self, max_length: usize) -> Result<String> {
        truncate::truncate(self, max_length)
    }

    fn truncate_chars_with(&self, max_length: usize, include_ellipsis: bool) -> Result<String> {
        truncate::truncate_with(self, max_length, include_ellipsis)
    }

    fn remove_extra_spaces(&self) -> String {
        normalize::remove_extra_spaces(self)
    }

    fn strip_html(&self) -> String {
        html::strip_html(self)
    }

    fn first_image_src(&self) -> String {
        html::first_image_src(self)
    }

    fn is_like(&self, pattern: &str) -> Result<bool> {
        wildcard::is_like(self, pattern)
    }

    fn to_hyperlink_html(&self, text: &str, open_in_new_tab: bool) -> String {
        hyperlink::to_hyperlink_html(self, text, open_in_new_tab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_form_matches_functions() {
        let s = String::from("Hello World");
        assert_eq!(s.truncate_chars(5).unwrap(), "Hello...");
        assert_eq!(s.truncate_chars_with(5, false).unwrap(), "Hello");
        assert!(s.is_present());
        assert!("".is_blank());
        assert_eq!("".or_na(), "N/A");
        assert_eq!("x".or_default("y"), "x");
        assert_eq!("a&nbsp; b".remove_extra_spaces(), "a b");
        assert_eq!("<img src='p.png'>".first_image_src(), "p.png");
        assert_eq!(
            "http://x".to_hyperlink_html("x", false),
            "<a href='http://x'>x</a>"
        );
    }
}
