use crate::config::profile::ProfileConfig;
use crate::core::wildcard::WildcardPattern;
use crate::core::{html, normalize, truncate, CleanStep, LineReport, Transform};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

impl Transform for CleanStep {
    fn name(&self) -> &'static str {
        match self {
            CleanStep::StripHtml => "strip_html",
            CleanStep::RemoveExtraSpaces => "remove_extra_spaces",
            CleanStep::TrimWhitespace => "trim_whitespace",
            CleanStep::Truncate { .. } => "truncate",
        }
    }

    fn apply(&self, input: &str) -> Result<String> {
        match self {
            CleanStep::StripHtml => Ok(html::strip_html(input)),
            CleanStep::RemoveExtraSpaces => Ok(normalize::remove_extra_spaces(input)),
            CleanStep::TrimWhitespace => Ok(input.trim().to_string()),
            CleanStep::Truncate {
                max_length,
                include_ellipsis,
            } => truncate::truncate_with(input, *max_length, *include_ellipsis),
        }
    }
}

/// Ordered cleaning steps plus include/exclude wildcard filters.
#[derive(Debug, Clone, Default)]
pub struct CleanPipeline {
    steps: Vec<CleanStep>,
    include: Vec<WildcardPattern>,
    exclude: Vec<WildcardPattern>,
}

impl CleanPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_step(mut self, step: CleanStep) -> Self {
        self.steps.push(step);
        self
    }

    pub fn include(mut self, pattern: WildcardPattern) -> Self {
        self.include.push(pattern);
        self
    }

    pub fn exclude(mut self, pattern: WildcardPattern) -> Self {
        self.exclude.push(pattern);
        self
    }

    /// Builds a pipeline from a validated profile.
    ///
    /// Steps always run in the order strip, squeeze, trim, truncate.
    pub fn from_profile(profile: &ProfileConfig) -> Result<Self> {
        profile.validate()?;

        let mut pipeline = Self::new();
        let transform = &profile.transform;

        if transform.strip_html.unwrap_or(false) {
            pipeline = pipeline.with_step(CleanStep::StripHtml);
        }
        if transform.remove_extra_spaces.unwrap_or(false) {
            pipeline = pipeline.with_step(CleanStep::RemoveExtraSpaces);
        }
        if transform.trim_whitespace.unwrap_or(false) {
            pipeline = pipeline.with_step(CleanStep::TrimWhitespace);
        }
        if let Some(limit) = &profile.truncate {
            pipeline = pipeline.with_step(CleanStep::Truncate {
                max_length: limit.max_length,
                include_ellipsis: limit.include_ellipsis.unwrap_or(true),
            });
        }

        if let Some(filter) = &profile.filter {
            for pattern in filter.include.iter().flatten() {
                pipeline = pipeline.include(WildcardPattern::new(pattern)?);
            }
            for pattern in filter.exclude.iter().flatten() {
                pipeline = pipeline.exclude(WildcardPattern::new(pattern)?);
            }
        }

        tracing::debug!(
            "Built pipeline '{}' with {} steps, {} include and {} exclude patterns",
            profile.profile.name,
            pipeline.steps.len(),
            pipeline.include.len(),
            pipeline.exclude.len()
        );

        Ok(pipeline)
    }

    pub fn steps(&self) -> &[CleanStep] {
        &self.steps
    }

    /// Runs every step over `input` in order.
    pub fn clean(&self, input: &str) -> Result<String> {
        let mut current = input.to_string();
        for step in &self.steps {
            current = step.apply(&current)?;
            tracing::trace!("Applied {} -> {:?}", step.name(), current);
        }
        Ok(current)
    }

    /// True when `input` passes the include list (or it is empty) and matches
    /// no exclude pattern.
    pub fn accepts(&self, input: &str) -> bool {
        let included = self.include.is_empty() || self.include.iter().any(|p| p.is_match(input));
        included && !self.exclude.iter().any(|p| p.is_match(input))
    }

    /// Filters then cleans each line of `input`.
    pub fn process_lines(&self, input: &str) -> Result<LineReport> {
        let mut report = LineReport::default();

        for line in input.lines() {
            if !self.accepts(line) {
                tracing::debug!("Skipping line: {:?}", line);
                report.skipped += 1;
                continue;
            }
            report.kept.push(self.clean(line)?);
        }

        tracing::debug!(
            "Processed {} lines ({} skipped)",
            report.kept.len() + report.skipped,
            report.skipped
        );
        Ok(report)
    }
}
