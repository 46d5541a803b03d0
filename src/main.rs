use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use itertools::Itertools;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use talk_embed::config::{Config, CONFIG_FILE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Render descriptor as JSON
    Json,
    /// Talk section markup
    Html,
}

#[derive(Parser)]
#[command(name = "talk-embed")]
#[command(about = "Resolve the live and replay talk slots into a player descriptor")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Live slot input, overrides the config file
    #[arg(short, long)]
    live: Option<String>,

    /// Replay slot input, overrides the config file
    #[arg(short, long)]
    replay: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Log level
    #[arg(short = 'v', long, default_value = "warn", env = "TALK_LOG_LEVEL")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("talk_embed={}", cli.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let mut config = Config::load(&cli.config)
        .with_context(|| format!("could not read {}", cli.config.display()))?;
    if let Some(live) = cli.live {
        config.live_input = Some(live);
    }
    if let Some(replay) = cli.replay {
        config.replay_input = Some(replay);
    }

    let classifier = config.classifier()?;
    debug!(
        providers = %classifier.providers().map(|p| p.name()).join(", "),
        "loaded provider table"
    );
    let descriptor = config.render(&classifier);
    info!(state = descriptor.state.as_str(), "rendered talk section");

    Ok(match cli.format {
        Format::Json if cli.pretty => serde_json::to_string_pretty(&descriptor)?,
        Format::Json => serde_json::to_string(&descriptor)?,
        Format::Html => descriptor.section_html(&config.title, config.description.as_deref()),
    })
}
