use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use textkit::utils::logger::{self, LogFormat};
use textkit::{CleanPipeline, ProfileConfig, TextExt, WildcardPattern};

#[derive(Parser)]
#[command(name = "textkit")]
#[command(about = "String cleanup helpers: truncation, tag stripping, wildcard matching")]
struct Cli {
    /// Read input from this string instead of stdin
    #[arg(short, long, global = true)]
    input: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Cut input to a maximum number of characters
    Truncate {
        #[arg(short, long)]
        max_length: usize,

        /// Do not append "..." when the text is cut
        #[arg(long)]
        no_ellipsis: bool,
    },
    /// Collapse runs of whitespace and &nbsp; entities
    Squeeze,
    /// Remove markup tags
    StripHtml,
    /// Print the src of the first <img> tag
    FirstImg,
    /// Print the input lines that match a wildcard pattern
    Like {
        pattern: String,

        /// Print non-matching lines instead
        #[arg(long)]
        invert: bool,
    },
    /// Wrap the input in an anchor tag
    Link {
        #[arg(short, long, default_value = "")]
        text: String,

        #[arg(long)]
        new_tab: bool,
    },
    /// Run a TOML cleaning profile over every input line
    Clean {
        #[arg(short, long)]
        config: String,
    },
}

fn read_input(input: Option<String>) -> Result<String> {
    match input {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let input = read_input(cli.input)?;

    match cli.command {
        Command::Truncate {
            max_length,
            no_ellipsis,
        } => {
            let text = input.trim_end_matches(['\r', '\n']);
            println!("{}", text.truncate_chars_with(max_length, !no_ellipsis)?);
        }
        Command::Squeeze => print!("{}", input.remove_extra_spaces()),
        Command::StripHtml => print!("{}", input.strip_html()),
        Command::FirstImg => {
            let src = input.first_image_src();
            if src.is_blank() {
                tracing::warn!("No <img> tag with a src attribute found");
            }
            println!("{}", src);
        }
        Command::Like { pattern, invert } => {
            if pattern.is_empty() {
                tracing::warn!("Empty wildcard pattern matches nothing");
            }
            let pattern = WildcardPattern::new(&pattern)?;
            tracing::debug!("Translated wildcard to {}", pattern.regex_source());
            for line in input.lines().filter(|line| pattern.is_match(line) != invert) {
                println!("{}", line);
            }
        }
        Command::Link { text, new_tab } => {
            let link = input.trim();
            println!("{}", link.to_hyperlink_html(&text, new_tab));
        }
        Command::Clean { config } => {
            tracing::info!("📁 Loading profile from: {}", config);
            let profile = ProfileConfig::from_file(&config)
                .with_context(|| format!("Failed to load profile '{}'", config))?;
            let pipeline = CleanPipeline::from_profile(&profile)?;

            let report = pipeline.process_lines(&input)?;
            for line in &report.kept {
                println!("{}", line);
            }
            tracing::info!(
                "✅ Profile '{}' kept {} lines, skipped {}",
                profile.profile.name,
                report.kept.len(),
                report.skipped
            );
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // 初始化日誌
    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(format, cli.verbose);

    if let Err(e) = run(cli) {
        tracing::error!("❌ {:#}", e);
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}
