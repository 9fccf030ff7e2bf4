//! wttr-lookup CLI
//!
//! Looks up the weather for typed locations on wttr.in.

#![allow(clippy::print_stdout)]

use std::sync::Arc;

use anyhow::Context;
use application::{LookupOutcome, WeatherLookupService};
use clap::Parser;
use infrastructure::{AppConfig, WttrWeatherAdapter, init_logging};
use presentation_cli::render::{render_current, render_history, render_upcoming};
use presentation_cli::{Cli, Commands, convert, log_filter_from_verbosity, session};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    init_logging(&config.logging, log_filter_from_verbosity(cli.verbose))
        .context("Failed to initialize logging")?;

    match cli.command {
        Commands::Convert { value, to } => {
            println!("{}", convert(value, to));
        },

        Commands::Lookup { locations, json } => {
            let service = build_service(config)?;

            for location in &locations {
                let outcome = service
                    .search(location)
                    .await
                    .with_context(|| format!("Lookup for {location:?} failed"))?;

                match outcome {
                    LookupOutcome::Displayed(view) if json => {
                        println!("{}", serde_json::to_string(&view)?);
                    },
                    LookupOutcome::Displayed(view) => {
                        println!("{}", render_current(&view));
                        println!();
                        println!("{}", render_upcoming(&view));
                        println!();
                    },
                    LookupOutcome::Stale(_) | LookupOutcome::Unchanged => {},
                }
            }

            if !json {
                println!("{}", render_history(&service.history()));
            }
        },

        Commands::Interactive => {
            let service = build_service(config)?;
            info!("Starting interactive session");

            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout().lock();
            session::run(&service, stdin, &mut stdout)
                .await
                .context("Interactive session failed")?;
        },
    }

    Ok(())
}

fn build_service(config: AppConfig) -> anyhow::Result<WeatherLookupService> {
    let adapter =
        WttrWeatherAdapter::with_config(config.weather).context("Failed to create weather client")?;
    Ok(WeatherLookupService::new(Arc::new(adapter)))
}
