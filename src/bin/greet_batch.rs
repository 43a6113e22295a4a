use anyhow::Context;
use clap::Parser;
use greeter::core::batch::{greet_lines, InputMode, OutputFormat};
use greeter::utils::logger::{self, LogFormat};
use greeter::{Greeter, GreetingSettings, SettingsOverrides};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};

#[derive(Parser)]
#[command(name = "greet-batch")]
#[command(about = "Greets every line of a file or standard input")]
struct Args {
    /// Input file, one name per line (defaults to stdin)
    #[arg(short, long)]
    input: Option<String>,

    /// Treat each line as a JSON value (JSON Lines)
    #[arg(long)]
    json: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Salutation word, e.g. "Hello" or "Hi"
    #[arg(long, env = "GREETER_SALUTATION")]
    salutation: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let settings = GreetingSettings::resolve(&SettingsOverrides {
        salutation: args.salutation.as_deref(),
        config_path: args.config.as_deref(),
        log_format: args.log_format,
        verbose: args.verbose,
    })
    .context("failed to load configuration")?;

    logger::init_cli_logger(
        settings.verbose,
        settings.log_format,
        settings.log_level.as_deref(),
    );

    tracing::info!("🚀 Starting batch greeting");

    let greeter = Greeter::from_config(&settings)?;
    let input_mode = if args.json {
        InputMode::Json
    } else {
        InputMode::Text
    };

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => {
            tracing::info!("📁 Reading names from: {}", path);
            let file = File::open(path).with_context(|| format!("cannot open '{}'", path))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let writer = BufWriter::new(io::stdout().lock());
    let summary = greet_lines(&greeter, reader, writer, input_mode, args.output)
        .context("batch greeting failed")?;

    tracing::info!(
        "✅ Greeted {} lines ({} by name, {} as stranger)",
        summary.total,
        summary.greeted,
        summary.fallbacks
    );

    Ok(())
}
