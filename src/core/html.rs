//! Regex-based markup helpers.
//!
//! None of these parse HTML. Tag boundaries are found with a lazy
//! `<...>` match, so comments, nested angle brackets and attribute values
//! containing `>` can be stripped incorrectly. That lossy behavior is part of
//! the contract; callers needing real parsing should use an HTML parser.

use regex::Regex;
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?.+?>").expect("TAG_RE should compile"));

static IMG_SRC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<img[^>]*?src\s*=\s*["']?([^'" >]+?)[ '"][^>]*?>"#)
        .expect("IMG_SRC_RE should compile")
});

/// Deletes everything that looks like an opening or closing tag.
pub fn strip_html(input: &str) -> String {
    TAG_RE.replace_all(input, "").into_owned()
}

/// Returns the `src` value of the first `<img>` tag, or an empty string.
///
/// The value is returned verbatim (entities are not decoded). It must be
/// followed by a quote or a space to be recognized.
pub fn first_image_src(html_source: &str) -> String {
    IMG_SRC_RE
        .captures(html_source)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("<p>Hello <b>World</b></p>"), "Hello World");
        assert_eq!(strip_html("<br/>line<br />"), "line");
        assert_eq!(strip_html("plain text"), "plain text");
    }

    #[test]
    fn test_strip_html_is_lossy() {
        // `<>` needs at least one character between the brackets.
        assert_eq!(strip_html("a <> b"), "a <> b");
        assert_eq!(strip_html("1 < 2 and 3 > 2"), "1  2");
        assert_eq!(strip_html("<a title='x>y'>link</a>"), "y'>link");
    }

    #[test]
    fn test_strip_html_idempotent() {
        let html = "<div class=\"c\"><span>one</span> two</div>";
        let once = strip_html(html);
        assert_eq!(once, "one two");
        assert_eq!(strip_html(&once), once);
    }

    #[test]
    fn test_first_image_src() {
        assert_eq!(first_image_src("<img src='a.png'><img src='b.png'>"), "a.png");
        assert_eq!(
            first_image_src(r#"<p>x</p><IMG class="hero" SRC="/img/hero.jpg" alt="">"#),
            "/img/hero.jpg"
        );
        assert_eq!(first_image_src("<img\n  src = 'multi.gif' />"), "multi.gif");
        assert_eq!(first_image_src("<img src=bare.png alt=x>"), "bare.png");
    }

    #[test]
    fn test_first_image_src_missing() {
        assert_eq!(first_image_src("no images here"), "");
        assert_eq!(first_image_src("<img alt='none'>"), "");
        // Unquoted value running straight into `>` has no terminator.
        assert_eq!(first_image_src("<img src=a.png>"), "");
    }

    #[test]
    fn test_first_image_src_keeps_entities() {
        assert_eq!(
            first_image_src("<img src=\"a.png?x=1&amp;y=2\">"),
            "a.png?x=1&amp;y=2"
        );
    }
}
