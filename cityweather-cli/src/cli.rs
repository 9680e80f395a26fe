use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use cityweather_core::{Config, OpenWeatherClient, SearchOutcome, WeatherScreen};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};

use crate::render::{OutputFormat, TerminalSink};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "Current weather for a city")]
pub struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print debug logs to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and the default city.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name; defaults to the configured default city.
        city: Option<String>,

        /// Print the rendered fields as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Interactive search: show the default city, then look up each entered name.
    Search {
        /// Print the rendered fields as JSON.
        #[arg(long)]
        json: bool,
    },
}

type Screen = WeatherScreen<TerminalSink>;

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = self.load_config()?;

        match self.command {
            Command::Configure => configure(config, self.config),
            Command::Show { city, json } => {
                let screen = open_screen(&config, json)?;
                let city = city.unwrap_or_else(|| config.default_city.clone());
                show(&screen, &city).await
            }
            Command::Search { json } => {
                let screen = Arc::new(open_screen(&config, json)?);
                search_loop(screen, config.default_city).await
            }
        }
    }

    fn load_config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }
}

fn open_screen(config: &Config, json: bool) -> anyhow::Result<Screen> {
    let client = OpenWeatherClient::from_config(config)?;
    let format = if json { OutputFormat::Json } else { OutputFormat::Text };
    Ok(WeatherScreen::new(Arc::new(client), TerminalSink::new(format)))
}

fn configure(mut config: Config, path: Option<PathBuf>) -> anyhow::Result<()> {
    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    config.set_api_key(api_key);

    let city = Text::new("Default city:")
        .with_default(&config.default_city)
        .prompt()
        .context("Failed to read default city")?;
    if !city.trim().is_empty() {
        config.default_city = city.trim().to_string();
    }

    let saved_to = match path {
        Some(path) => {
            config.save_to(&path)?;
            path
        }
        None => config.save()?,
    };
    println!("Configuration saved to {}", saved_to.display());

    Ok(())
}

async fn show(screen: &Screen, city: &str) -> anyhow::Result<()> {
    match screen.submit(city).await? {
        SearchOutcome::NotFound => println!("No match for '{city}'."),
        SearchOutcome::Rendered(_) | SearchOutcome::Superseded => {}
    }
    Ok(())
}

async fn search_loop(screen: Arc<Screen>, default_city: String) -> anyhow::Result<()> {
    spawn_search(&screen, default_city);

    loop {
        let answer = tokio::task::spawn_blocking(|| Text::new("Search city:").prompt())
            .await
            .context("Search prompt task failed")?;

        match answer {
            Ok(query) if query.trim().is_empty() => continue,
            Ok(query) => spawn_search(&screen, query),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read search query"),
        }
    }

    Ok(())
}

/// Run a lookup without waiting for it, so a newer query can overtake it.
fn spawn_search(screen: &Arc<Screen>, query: String) {
    let screen = Arc::clone(screen);
    tokio::spawn(async move {
        // Failures were already shown by the sink.
        if let Ok(SearchOutcome::NotFound) = screen.submit(&query).await {
            println!("No match for '{query}'.");
        }
    });
}
