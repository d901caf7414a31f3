use std::{process::ExitCode, sync::Arc};

use anyhow::Context;
use clap::{
    Parser, Subcommand,
    builder::{Styles, styling::AnsiColor},
};
use inquire::{InquireError, Password, PasswordDisplayMode, Select, Text};
use weather_core::{
    Config, FileStore, OpenWeatherProvider, SearchOutcome, UnitPreference, Units, WeatherApp,
};

use crate::terminal::TerminalView;

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default())
    .usage(AnsiColor::Green.on_default())
    .literal(AnsiColor::Green.on_default())
    .placeholder(AnsiColor::Green.on_default());

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, styles = STYLES, about = "Current weather for a city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Units requested from the weather service: metric or imperial.
    #[arg(long, global = true, value_parser = parse_units)]
    pub units: Option<Units>,

    /// Temperature scale to display: celsius or fahrenheit.
    #[arg(long, global = true, value_parser = parse_display)]
    pub display: Option<UnitPreference>,

    /// Log debug diagnostics to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key and preferred units.
    Configure,

    /// Show current weather once.
    Show {
        /// City name; defaults to the last city searched successfully.
        city: Option<String>,
    },

    /// Keep prompting for cities until Esc or Ctrl-C.
    Interactive,
}

fn parse_units(s: &str) -> Result<Units, String> {
    Units::try_from(s).map_err(|e| e.to_string())
}

fn parse_display(s: &str) -> Result<UnitPreference, String> {
    UnitPreference::try_from(s).map_err(|e| e.to_string())
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match &self.command {
            Command::Configure => {
                configure()?;
                Ok(ExitCode::SUCCESS)
            }
            Command::Show { city } => {
                let app = self.build_app()?;
                let outcome = match city {
                    Some(city) => Some(app.search(city).await),
                    None => app.start().await,
                };

                Ok(match outcome {
                    Some(SearchOutcome::Failed(_)) => ExitCode::FAILURE,
                    _ => ExitCode::SUCCESS,
                })
            }
            Command::Interactive => {
                let app = self.build_app()?;
                app.start().await;

                loop {
                    match Text::new("City:").prompt() {
                        Ok(city) => {
                            app.search(&city).await;
                        }
                        Err(
                            InquireError::OperationCanceled
                            | InquireError::OperationInterrupted,
                        ) => break,
                        Err(e) => return Err(e).context("Failed to read city"),
                    }
                }

                Ok(ExitCode::SUCCESS)
            }
        }
    }

    fn build_app(&self) -> anyhow::Result<WeatherApp> {
        let config = Config::load()?;
        let client = config.client_config(self.units)?;
        let store = FileStore::open_default()?;
        tracing::debug!(state = %store.path().display(), units = %client.units, "Starting");

        let app = WeatherApp::new(
            Arc::new(OpenWeatherProvider::new(client)),
            Arc::new(TerminalView::new()),
            Arc::new(store),
        );

        Ok(match self.display {
            Some(unit) => app.with_display_unit(unit),
            None => app,
        })
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;
    if config.is_configured() {
        println!("An API key is already stored; entering a new one replaces it.");
    }

    let api_key = Password::new("OpenWeatherMap API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let options = vec![Units::Metric, Units::Imperial];
    let start = options.iter().position(|u| *u == config.units).unwrap_or(0);
    let units = Select::new("Units:", options)
        .with_starting_cursor(start)
        .prompt()
        .context("Failed to read units")?;

    config.set_api_key(api_key.trim().to_string());
    config.units = units;
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}
