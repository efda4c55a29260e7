use crate::utils::error::{Result, TextError};

/// Marker appended to text that was cut short.
pub const ELLIPSIS: &str = "...";

/// Truncates to `max_length` characters, appending [`ELLIPSIS`] when cut.
pub fn truncate(s: &str, max_length: usize) -> Result<String> {
    truncate_with(s, max_length, true)
}

/// Truncates `s` to at most `max_length` characters.
///
/// Empty input is returned untouched. When the text is longer than
/// `max_length` and `include_ellipsis` is set, trailing whitespace is removed
/// from the cut and `"..."` is appended, so the result can be up to three
/// characters longer than `max_length`.
///
/// Fails with [`TextError::InvalidArgument`] when `max_length` is zero.
pub fn truncate_with(s: &str, max_length: usize, include_ellipsis: bool) -> Result<String> {
    if s.is_empty() {
        return Ok(String::new());
    }
    if max_length < 1 {
        return Err(TextError::InvalidArgument {
            name: "max_length".to_string(),
            reason: "max_length may not be less than 1".to_string(),
        });
    }

    let cut = match s.char_indices().nth(max_length) {
        Some((byte_index, _)) => &s[..byte_index],
        None => return Ok(s.to_string()),
    };

    if include_ellipsis {
        Ok(format!("{}{}", cut.trim_end(), ELLIPSIS))
    } else {
        Ok(cut.to_string())
    }
}
