use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomKind {
    Single,
    Double,
}

impl RoomKind {
    pub fn bed_count(&self) -> u32 {
        match self {
            RoomKind::Single => 1,
            RoomKind::Double => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomKind::Single => "single",
            RoomKind::Double => "double",
        }
    }
}

/// A bookable room. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    number: u32,
    kind: RoomKind,
    nightly_rate: u64,
}

impl Room {
    pub fn new(number: u32, kind: RoomKind, nightly_rate: u64) -> Self {
        Self {
            number,
            kind,
            nightly_rate,
        }
    }

    pub fn single(number: u32, nightly_rate: u64) -> Self {
        Self::new(number, RoomKind::Single, nightly_rate)
    }

    pub fn double(number: u32, nightly_rate: u64) -> Self {
        Self::new(number, RoomKind::Double, nightly_rate)
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn kind(&self) -> RoomKind {
        self.kind
    }

    pub fn nightly_rate(&self) -> u64 {
        self.nightly_rate
    }

    pub fn bed_count(&self) -> u32 {
        self.kind.bed_count()
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let beds = self.bed_count();
        write!(
            f,
            "Room {} ({}, {} bed{}), nightly rate: {}",
            self.number,
            self.kind.as_str(),
            beds,
            if beds == 1 { "" } else { "s" },
            self.nightly_rate
        )
    }
}

/// A booked interval bound to one room.
///
/// Performs no validation of its own; `Hotel::validate_reservation` decides
/// whether an interval is acceptable before one of these is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    start: NaiveDate,
    end: NaiveDate,
    room: Room,
}

impl Reservation {
    pub fn new(start: NaiveDate, end: NaiveDate, room: Room) -> Self {
        Self { start, end, room }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn room_number(&self) -> u32 {
        self.room.number()
    }

    pub fn night_count(&self) -> i64 {
        night_count(self.start, self.end)
    }

    pub fn cost(&self) -> u64 {
        stay_cost(self.start, self.end, &self.room)
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "room {}, from {} to {}, cost: {}",
            self.room.number(),
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d"),
            self.cost()
        )
    }
}

/// Whole days between `start` and `end`. Negative when `end` precedes `start`.
pub fn night_count(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Billing for a stay; an inverted interval costs nothing.
pub fn stay_cost(start: NaiveDate, end: NaiveDate, room: &Room) -> u64 {
    let nights = u64::try_from(night_count(start, end)).unwrap_or(0);
    nights.saturating_mul(room.nightly_rate())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_bed_count_per_kind() {
        assert_eq!(Room::single(1, 200).bed_count(), 1);
        assert_eq!(Room::double(2, 450).bed_count(), 2);
    }

    #[test]
    fn test_room_display() {
        assert_eq!(
            Room::single(1, 200).to_string(),
            "Room 1 (single, 1 bed), nightly rate: 200"
        );
        assert_eq!(
            Room::double(2, 450).to_string(),
            "Room 2 (double, 2 beds), nightly rate: 450"
        );
    }

    #[test]
    fn test_reservation_cost_and_display() {
        let reservation = Reservation::new(date(2024, 6, 1), date(2024, 6, 6), Room::double(2, 450));
        assert_eq!(reservation.night_count(), 5);
        assert_eq!(reservation.cost(), 2250);
        assert_eq!(
            reservation.to_string(),
            "room 2, from 2024-06-01 to 2024-06-06, cost: 2250"
        );
    }

    #[test]
    fn test_inverted_interval_costs_nothing() {
        let room = Room::single(1, 200);
        assert_eq!(stay_cost(date(2024, 6, 5), date(2024, 6, 1), &room), 0);
        assert_eq!(stay_cost(date(2024, 6, 1), date(2024, 6, 1), &room), 0);
    }

    #[test]
    fn test_room_kind_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            kind: RoomKind,
        }
        let parsed: Wrapper = toml::from_str(r#"kind = "double""#).unwrap();
        assert_eq!(parsed.kind, RoomKind::Double);
    }
}
