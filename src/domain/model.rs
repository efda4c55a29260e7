/// One stage of a cleaning pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanStep {
    StripHtml,
    RemoveExtraSpaces,
    TrimWhitespace,
    Truncate {
        max_length: usize,
        include_ellipsis: bool,
    },
}

/// Outcome of running a pipeline over multi-line input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineReport {
    pub kept: Vec<String>,
    pub skipped: usize,
}
