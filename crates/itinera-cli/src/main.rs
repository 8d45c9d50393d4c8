//! Itinera CLI Application
//!
//! Command-line front-end for the Itinera trip planning service.

mod args;
mod cli;
mod renderer;

use std::time::Duration;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use itinera_core::{ClientConfig, PlanningClientBuilder};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        api_url,
        timeout,
        no_color,
        command,
    } = Args::parse();

    let config = ClientConfig::from_env().context("Invalid planning service environment")?;
    let client = PlanningClientBuilder::new()
        .with_config(config)
        .with_base_url(api_url)
        .with_timeout(timeout.map(Duration::from_secs))
        .build()
        .context("Failed to initialize planning client")?;

    info!("Itinera started against {}", client.base_url());

    let cli = Cli::new(client, TerminalRenderer::new(!no_color));
    match command {
        Plan { command } => cli.handle_plan_command(command).await,
        Hotels { command } => cli.handle_hotel_command(command).await,
        Health => cli.check_health().await,
    }
}
