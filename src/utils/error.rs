use crate::domain::model::Reservation;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HotelError {
    #[error("Reservation must end after it starts (start {start}, end {end})")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Reservation must start tomorrow at the earliest (start {start}, today {today})")]
    PastOrTodayStart { start: NaiveDate, today: NaiveDate },

    #[error("Reservation conflicts with an existing reservation: {existing}")]
    DateConflict { existing: Box<Reservation> },

    #[error("No room with number {number}")]
    RoomNotFound { number: u32 },

    #[error("Reservation not found")]
    ReservationNotFound,

    #[error("Room number {number} is already registered")]
    DuplicateRoom { number: u32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl HotelError {
    /// True for the failures `validate_reservation` can produce.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            HotelError::InvalidRange { .. }
                | HotelError::PastOrTodayStart { .. }
                | HotelError::DateConflict { .. }
                | HotelError::RoomNotFound { .. }
        )
    }

    pub fn is_config(&self) -> bool {
        matches!(
            self,
            HotelError::TomlError(_)
                | HotelError::ConfigError { .. }
                | HotelError::InvalidConfigValueError { .. }
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HotelError::InvalidRange { .. } => "Pick an end date later than the start date",
            HotelError::PastOrTodayStart { .. } => "Pick a start date from tomorrow onwards",
            HotelError::DateConflict { .. } => {
                "Pick other dates or another room; check the reservation list"
            }
            HotelError::RoomNotFound { .. } => "Choose one of the listed room numbers",
            HotelError::ReservationNotFound => "Choose one of the listed reservations",
            HotelError::DuplicateRoom { .. } => "Give every room a distinct number",
            HotelError::IoError(_) => "Check that the file exists and is readable",
            HotelError::TomlError(_) => "Check the configuration file for TOML syntax errors",
            HotelError::ConfigError { .. } | HotelError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and try again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, HotelError>;
