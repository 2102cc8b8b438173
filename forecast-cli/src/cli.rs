use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use forecast_core::{Config, DEFAULT_HORIZON, aggregate, source};
use tracing::debug;

use crate::view;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "City weather and daily forecast")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store OpenWeatherMap credentials and preferences.
    Configure,

    /// Show current weather and the daily forecast for a city.
    Show {
        /// City name, e.g. "Seoul" or "Paris,FR".
        city: String,

        /// How many forecast days to display.
        #[arg(long, default_value_t = DEFAULT_HORIZON)]
        days: usize,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, days } => show(&city, days).await,
        }
    }
}

/// Prompt for credentials and persist them to the platform config dir.
fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeatherMap API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    config.set_api_key(api_key);

    let language = inquire::Text::new("Language code for descriptions (blank for English):")
        .with_initial_value(config.language.as_deref().unwrap_or(""))
        .prompt()
        .context("Failed to read language code")?;
    config.set_language(language);

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn show(city: &str, days: usize) -> Result<()> {
    let config = Config::load()?;
    let source = source::source_from_config(&config)?;

    // Current weather and forecast are independent requests; issue both at
    // once and only render after both have settled.
    let (current, samples) = tokio::join!(source.current_weather(city), source.forecast(city));
    let current = current?;
    let samples = samples?;

    debug!(samples = samples.len(), days, "aggregating forecast");
    let daily = aggregate(&samples, days);

    print!("{}", view::render(&current, &daily));

    Ok(())
}
