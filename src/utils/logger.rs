use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output shape of log lines. Both formats write to stderr so stdout stays
/// reserved for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Filter used when `RUST_LOG` is not set.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "textkit=debug,info"
    } else {
        "textkit=info"
    }
}

fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

/// Installs the global subscriber. Returns `false` if one was already set.
pub fn init_logger(format: LogFormat, verbose: bool) -> bool {
    let registry = tracing_subscriber::registry().with(build_filter(verbose));
    let base = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false);

    let installed = match format {
        LogFormat::Compact => registry.with(base.compact()).try_init(),
        LogFormat::Json => registry.with(base.json()).try_init(),
    };
    installed.is_ok()
}
