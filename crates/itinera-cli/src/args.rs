use clap::{Parser, Subcommand};

use crate::cli::{HotelCommands, PlanCommands};

/// Command-line front-end for the Itinera trip planner
///
/// Builds plan requests from flags, checks them before anything is sent, and
/// talks to the planning service to create, show and edit plans or search
/// hotels.
#[derive(Parser)]
#[command(version, about, name = "itinera")]
pub struct Args {
    /// Base URL of the planning service [overrides ITINERA_API_URL]
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds [overrides ITINERA_API_TIMEOUT_SECS]
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Create, show and edit plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Search hotels
    #[command(alias = "h")]
    Hotels {
        #[command(subcommand)]
        command: HotelCommands,
    },
    /// Check that the planning service is reachable
    Health,
}
