use anyhow::Context;
use clap::Parser;
use hotel_registry::app::{build_hotel, Console};
use hotel_registry::utils::logger;
use hotel_registry::{CliConfig, Clock, FixedClock, HotelError, SystemClock};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting hotel-registry");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!("❌ {:#}", e);
        eprintln!("❌ {:#}", e);

        let exit_code = match e.downcast_ref::<HotelError>() {
            Some(hotel_error) => {
                eprintln!("💡 Suggestion: {}", hotel_error.recovery_suggestion());
                match hotel_error {
                    HotelError::IoError(_) => 2,
                    _ => 1,
                }
            }
            None => 1,
        };
        std::process::exit(exit_code);
    }
}

fn run(config: &CliConfig) -> anyhow::Result<()> {
    let clock: Box<dyn Clock> = match config.today {
        Some(today) => {
            tracing::info!("Current date pinned to {}", today);
            Box::new(FixedClock(today))
        }
        None => Box::new(SystemClock),
    };

    let hotel_config = config
        .hotel_config()
        .context("Failed to load hotel configuration")?;
    let mut hotel = build_hotel(&hotel_config, clock.today())
        .context("Failed to set up the hotel")?;

    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout(), &*clock);
    console.run(&mut hotel).context("Console session failed")?;

    tracing::info!(
        "Leaving with {} reservations on record",
        hotel.reservations().len()
    );
    Ok(())
}
