/// Builds an anchor element for `link`.
///
/// The display text falls back to `link` when `text` is empty. Neither value
/// is escaped: quotes or markup in `link`/`text` end up in the output as-is,
/// so only pass trusted values.
pub fn to_hyperlink_html(link: &str, text: &str, open_in_new_tab: bool) -> String {
    let display = if text.is_empty() { link } else { text };
    let target = if open_in_new_tab { " target='_blank'" } else { "" };

    format!("<a href='{}'{}>{}</a>", link, target, display)
}
