use crate::utils::error::{Result, TextError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("ENV_VAR_RE should compile"));

/// A named cleaning profile, usually loaded from a TOML file.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileConfig {
    pub profile: ProfileInfo,
    #[serde(default)]
    pub transform: TransformOptions,
    pub truncate: Option<TruncateConfig>,
    pub filter: Option<FilterConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransformOptions {
    pub strip_html: Option<bool>,
    pub remove_extra_spaces: Option<bool>,
    pub trim_whitespace: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TruncateConfig {
    pub max_length: usize,
    pub include_ellipsis: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterConfig {
    pub include: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
}

impl ProfileConfig {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TextError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| TextError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn include_patterns(&self) -> &[String] {
        self.filter
            .as_ref()
            .and_then(|f| f.include.as_deref())
            .unwrap_or(&[])
    }

    pub fn exclude_patterns(&self) -> &[String] {
        self.filter
            .as_ref()
            .and_then(|f| f.exclude.as_deref())
            .unwrap_or(&[])
    }
}

impl Validate for ProfileConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("profile.name", &self.profile.name)?;

        if let Some(truncate) = &self.truncate {
            validation::validate_positive_number("truncate.max_length", truncate.max_length, 1)?;
        }

        validation::validate_wildcard_patterns("filter.include", self.include_patterns())?;
        validation::validate_wildcard_patterns("filter.exclude", self.exclude_patterns())?;

        Ok(())
    }
}
