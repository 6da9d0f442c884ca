//! Clima CLI
//!
//! Terminal front end for the weather lookup: a one-shot query and an
//! interactive prompt.

mod console;
mod interactive;
mod render;
mod sound;

use std::path::PathBuf;
use std::sync::Arc;

use application::{AmbienceService, Locale, QueryController, WeatherPresenter, WeatherQueryService};
use clap::{Parser, Subcommand};
use infrastructure::{AppConfig, StaticConditionAssets, TelemetryAppConfig, WeatherAdapter, init_tracing};

use crate::console::Console;
use crate::interactive::Session;
use crate::render::{render_error, render_view};
use crate::sound::TerminalSound;

/// Clima CLI
#[derive(Parser)]
#[command(name = "clima")]
#[command(author, version, about = "Current weather and 5-day forecast by city", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long, env = "CLIMA_CONFIG")]
    config: Option<PathBuf>,

    /// Message language, overriding `ui.locale`
    #[arg(short, long, value_parser = parse_locale)]
    locale: Option<Locale>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up one city and exit
    ///
    /// Exits with status 1 when the query fails.
    Query {
        /// City name, e.g. "Porto Alegre"
        city: String,
    },

    /// Read cities from standard input, one per line
    Interactive,
}

fn parse_locale(value: &str) -> Result<Locale, String> {
    value.parse()
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(&path.to_string_lossy())?,
        None => AppConfig::load()?,
    };
    if let Some(locale) = cli.locale {
        config.ui.locale = locale;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    init_tracing(&TelemetryAppConfig {
        log_filter: log_filter_from_verbosity(cli.verbose).to_string(),
        json: config.telemetry.json,
    })?;

    let locale = config.ui.locale;
    let adapter = WeatherAdapter::with_config(config.weather_client_config()?)?;
    let service = Arc::new(WeatherQueryService::new(Arc::new(adapter)));
    let assets = Arc::new(StaticConditionAssets::from_config(&config.assets));
    let presenter = Arc::new(WeatherPresenter::new(assets.clone(), locale));
    let console = Console::stdout();

    match cli.command {
        Commands::Query { city } => match service.query(&city).await {
            Ok(snapshot) => {
                let view = presenter.present(&snapshot);
                if cli.json {
                    console.line(&serde_json::to_string_pretty(&view)?);
                } else {
                    console.line(&render_view(&view, locale));
                }
            },
            Err(err) => {
                if cli.json {
                    console.line(&serde_json::to_string_pretty(&err)?);
                } else {
                    console.line(&render_error(&err, locale));
                }
                std::process::exit(1);
            },
        },

        Commands::Interactive => {
            let sound = TerminalSound::new(console.clone());
            let session = Session {
                controller: Arc::new(QueryController::new(service)),
                presenter,
                ambience: Arc::new(AmbienceService::new(Arc::new(sound), assets)),
                console,
            };
            session
                .run(tokio::io::BufReader::new(tokio::io::stdin()))
                .await?;
        },
    }

    Ok(())
}
