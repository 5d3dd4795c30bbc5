use crate::core::overlap::overlaps;
use crate::domain::model::{stay_cost, Reservation, Room};
use crate::utils::error::{HotelError, Result};
use chrono::NaiveDate;

/// Owns the rooms and reservations of one establishment.
///
/// Every reservation references a room registered here. The no-overlap rule is
/// enforced by `book_reservation`; `add_reservation` is the raw path used for
/// fixtures and does not check anything.
#[derive(Debug, Clone)]
pub struct Hotel {
    name: String,
    rooms: Vec<Room>,
    reservations: Vec<Reservation>,
}

impl Hotel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rooms: Vec::new(),
            reservations: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Reservations in the order they were added.
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn add_room(&mut self, room: Room) -> Result<()> {
        if self.find_room_by_number(room.number()).is_some() {
            return Err(HotelError::DuplicateRoom {
                number: room.number(),
            });
        }
        self.rooms.push(room);
        Ok(())
    }

    pub fn find_room_by_number(&self, number: u32) -> Option<&Room> {
        self.rooms.iter().find(|room| room.number() == number)
    }

    pub fn reservations_for_room(&self, number: u32) -> impl Iterator<Item = &Reservation> {
        self.reservations
            .iter()
            .filter(move |reservation| reservation.room_number() == number)
    }

    pub fn list_rooms(&self) -> Vec<String> {
        numbered(&self.rooms)
    }

    pub fn list_reservations(&self) -> Vec<String> {
        numbered(&self.reservations)
    }

    /// Checks whether `room` can be booked for `[start, end]`.
    ///
    /// A zero-night stay (`start == end`) is rejected as `InvalidRange`; the
    /// original desk program only rejected `start > end` and let such stays
    /// through at zero cost.
    ///
    /// Read-only: a successful check does not hold the slot.
    pub fn validate_reservation(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        room: &Room,
        today: NaiveDate,
    ) -> Result<()> {
        if start >= end {
            return Err(HotelError::InvalidRange { start, end });
        }

        if start <= today {
            return Err(HotelError::PastOrTodayStart { start, today });
        }

        if self.find_room_by_number(room.number()).is_none() {
            return Err(HotelError::RoomNotFound {
                number: room.number(),
            });
        }

        if let Some(existing) = self
            .reservations_for_room(room.number())
            .find(|existing| overlaps(existing.start(), existing.end(), start, end))
        {
            return Err(HotelError::DateConflict {
                existing: Box::new(existing.clone()),
            });
        }

        Ok(())
    }

    /// Appends a reservation without any checks and returns its cost.
    pub fn add_reservation(&mut self, start: NaiveDate, end: NaiveDate, room: &Room) -> u64 {
        self.reservations.push(Reservation::new(start, end, *room));
        stay_cost(start, end, room)
    }

    /// Validates and appends in one step.
    pub fn book_reservation(
        &mut self,
        start: NaiveDate,
        end: NaiveDate,
        room: &Room,
        today: NaiveDate,
    ) -> Result<u64> {
        self.validate_reservation(start, end, room, today)?;
        Ok(self.add_reservation(start, end, room))
    }

    /// Removes the first reservation equal to `reservation`.
    pub fn remove_reservation(&mut self, reservation: &Reservation) -> Result<()> {
        let index = self
            .reservations
            .iter()
            .position(|existing| existing == reservation)
            .ok_or(HotelError::ReservationNotFound)?;
        self.reservations.remove(index);
        Ok(())
    }

    /// Removes the reservation shown at `ordinal` (1-based) in `list_reservations`.
    pub fn cancel_reservation(&mut self, ordinal: usize) -> Result<Reservation> {
        if ordinal == 0 || ordinal > self.reservations.len() {
            return Err(HotelError::ReservationNotFound);
        }
        Ok(self.reservations.remove(ordinal - 1))
    }
}

fn numbered<T: std::fmt::Display>(items: &[T]) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect()
}
