use crate::config::toml_config::HotelConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use chrono::NaiveDate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "hotel-registry")]
#[command(about = "Room inventory and reservation desk for a single hotel")]
pub struct CliConfig {
    /// Path to a TOML file describing the hotel, its rooms and fixture reservations
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pin the current date (YYYY-MM-DD) instead of reading the system clock
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Start without fixture reservations
    #[arg(long)]
    pub no_seed: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl CliConfig {
    /// Loads the hotel description the flags point at, falling back to the built-in fixture.
    pub fn hotel_config(&self) -> Result<HotelConfig> {
        let config = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path.display());
                HotelConfig::from_file(path)?
            }
            None => {
                tracing::debug!("No configuration file given, using built-in fixture");
                HotelConfig::default()
            }
        };

        config.validate()?;

        if self.no_seed {
            tracing::debug!("Dropping {} fixture reservations", config.reservations.len());
            Ok(config.without_reservations())
        } else {
            Ok(config)
        }
    }
}
