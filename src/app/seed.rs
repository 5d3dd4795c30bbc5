use crate::config::toml_config::HotelConfig;
use crate::core::Hotel;
use crate::utils::error::{HotelError, Result};
use chrono::{Duration, NaiveDate};

/// Builds a registry from `config`, placing fixture reservations relative to `today`.
///
/// Fixture reservations go through the raw `add_reservation` path and are not
/// validated against each other or against `today`.
pub fn build_hotel(config: &HotelConfig, today: NaiveDate) -> Result<Hotel> {
    let mut hotel = Hotel::new(config.hotel.name.clone());

    for room in &config.rooms {
        hotel.add_room(room.to_room())?;
    }

    for seed in &config.reservations {
        let room = *hotel
            .find_room_by_number(seed.room)
            .ok_or(HotelError::RoomNotFound { number: seed.room })?;
        let start = shift(today, seed.start_offset_days)?;
        let end = shift(start, seed.nights)?;
        let cost = hotel.add_reservation(start, end, &room);
        tracing::debug!(
            "Seeded reservation for room {} from {} to {} (cost {})",
            room.number(),
            start,
            end,
            cost
        );
    }

    tracing::info!(
        "Hotel '{}' ready with {} rooms and {} reservations",
        hotel.name(),
        hotel.rooms().len(),
        hotel.reservations().len()
    );

    Ok(hotel)
}

fn shift(date: NaiveDate, days: i64) -> Result<NaiveDate> {
    Duration::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or_else(|| HotelError::InvalidConfigValueError {
            field: "reservations".to_string(),
            value: days.to_string(),
            reason: "Day offset leaves the supported calendar range".to_string(),
        })
}
