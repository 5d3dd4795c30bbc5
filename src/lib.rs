pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::HotelConfig;
pub use crate::core::{overlaps, Hotel};
pub use domain::model::{Reservation, Room, RoomKind};
pub use domain::ports::{Clock, FixedClock, SystemClock};
pub use utils::error::{HotelError, Result};
