use crate::utils::error::{TextError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(TextError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TextError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Checks that every entry translates to a usable wildcard matcher.
pub fn validate_wildcard_patterns(field_name: &str, patterns: &[String]) -> Result<()> {
    for pattern in patterns {
        if pattern.is_empty() {
            return Err(TextError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: pattern.clone(),
                reason: "Wildcard pattern cannot be empty".to_string(),
            });
        }
        if let Err(e) = crate::core::wildcard::WildcardPattern::new(pattern) {
            return Err(TextError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: pattern.clone(),
                reason: e.to_string(),
            });
        }
    }
    Ok(())
}
