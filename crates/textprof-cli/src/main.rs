mod input;
mod render;

use std::io::Write;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use textprof_core::{AppConfig, OutputFormat};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "textprof")]
#[command(about = "Inspect a piece of text: counts, frequencies, Unicode metadata and more")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    // Without a subcommand the text is inspected.
    #[command(flatten)]
    input: InputArgs,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Full report: sizes, class counts, frequency table, numeric and palindrome checks
    Inspect(InputArgs),
    /// Shape predicates only: digits, letters, casing, title case
    Dissect(InputArgs),
}

#[derive(Debug, Args, Default)]
struct InputArgs {
    /// Text to analyze; multiple words are joined with single spaces.
    /// Reads one line from stdin when omitted. Values such as `-12` are text,
    /// and everything after the first word is taken verbatim.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    text: Vec<String>,

    /// Emit JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Number of rows in the frequency section
    #[arg(long, value_name = "N")]
    top: Option<usize>,

    /// Number of rows in the character detail section
    #[arg(long, value_name = "N")]
    details: Option<usize>,
}

impl InputArgs {
    /// Layers command-line flags over the environment-derived config.
    fn apply(&self, mut config: AppConfig) -> AppConfig {
        if self.json {
            config.format = OutputFormat::Json;
        }
        if let Some(top) = self.top {
            config.top_n = top;
        }
        if let Some(details) = self.details {
            config.detail_limit = details;
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    let config = textprof_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let (args, dissect_only) = match cli.command {
        Some(Commands::Inspect(args)) => (args, false),
        Some(Commands::Dissect(args)) => (args, true),
        None => (cli.input, false),
    };
    let config = args.apply(config);

    let text = input::acquire(&args.text).context("failed to read input")?;
    tracing::info!(chars = text.chars().count(), format = %config.format, "profiling input");

    let profile = textprof_core::profile(&text);
    let report = match (config.format, dissect_only) {
        (OutputFormat::Json, false) => serde_json::to_string_pretty(&profile)?,
        (OutputFormat::Json, true) => serde_json::to_string_pretty(&profile.shape)?,
        (OutputFormat::Text, false) => render::inspect_report(&profile, &config),
        (OutputFormat::Text, true) => render::dissect_report(&profile),
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{report}").context("failed to write report")?;
    Ok(())
}
