use crate::core::Hotel;
use crate::domain::model::Room;
use crate::domain::ports::Clock;
use crate::utils::error::Result;
use chrono::NaiveDate;
use std::io::{BufRead, Write};

const EXIT_KEYWORD: &str = "exit";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Text front end for the reservation desk.
///
/// Every prompt returns `None` once the user types `exit` or input runs out;
/// callers unwind and `run` returns normally.
pub struct Console<R: BufRead, W: Write, C: Clock> {
    input: R,
    output: W,
    clock: C,
}

impl<R: BufRead, W: Write, C: Clock> Console<R, W, C> {
    pub fn new(input: R, output: W, clock: C) -> Self {
        Self {
            input,
            output,
            clock,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self, hotel: &mut Hotel) -> Result<()> {
        writeln!(self.output, "Welcome to the {} hotel", hotel.name())?;
        writeln!(
            self.output,
            "Type '{}' at any prompt to leave the program",
            EXIT_KEYWORD
        )?;

        loop {
            writeln!(self.output, "Choose an option:")?;
            writeln!(self.output, "1: new reservation")?;
            writeln!(self.output, "2: cancel a reservation")?;
            writeln!(self.output, "3: list reservations")?;
            writeln!(self.output, "any other number: quit")?;

            let Some(choice) = self.read_int("")? else {
                break;
            };

            let keep_going = match choice {
                1 => self.create_reservation(hotel)?.is_some(),
                2 => self.cancel_reservation(hotel)?.is_some(),
                3 => {
                    self.print_reservations(hotel)?;
                    true
                }
                _ => false,
            };

            if !keep_going {
                break;
            }
        }

        tracing::debug!("Console session finished");
        Ok(())
    }

    fn create_reservation(&mut self, hotel: &mut Hotel) -> Result<Option<()>> {
        writeln!(self.output, "Rooms:")?;
        self.print_lines(&hotel.list_rooms(), "(no rooms)")?;
        self.print_reservations(hotel)?;

        let Some(room) = self.read_room(hotel)? else {
            return Ok(None);
        };
        writeln!(self.output, "Start of the reservation:")?;
        let Some(start) = self.read_date()? else {
            return Ok(None);
        };
        writeln!(self.output, "End of the reservation:")?;
        let Some(end) = self.read_date()? else {
            return Ok(None);
        };

        let today = self.clock.today();
        match hotel.book_reservation(start, end, &room, today) {
            Ok(cost) => {
                tracing::info!(
                    "Booked room {} from {} to {} (cost {})",
                    room.number(),
                    start,
                    end,
                    cost
                );
                writeln!(self.output, "Reservation accepted, cost: {}", cost)?;
                self.print_reservations(hotel)?;
            }
            Err(e) if e.is_validation() => {
                tracing::debug!("Reservation rejected: {}", e);
                writeln!(self.output, "{}", e)?;
                writeln!(self.output, "{}", e.recovery_suggestion())?;
            }
            Err(e) => return Err(e),
        }

        Ok(Some(()))
    }

    fn cancel_reservation(&mut self, hotel: &mut Hotel) -> Result<Option<()>> {
        if hotel.reservations().is_empty() {
            writeln!(self.output, "There are no reservations to cancel")?;
            return Ok(Some(()));
        }

        self.print_reservations(hotel)?;
        writeln!(self.output, "Which reservation would you like to cancel?")?;
        let Some(ordinal) = self.read_in_range(1, hotel.reservations().len() as i64)? else {
            return Ok(None);
        };
        let ordinal = ordinal as usize;

        writeln!(
            self.output,
            "Cancel this reservation? {}",
            hotel.reservations()[ordinal - 1]
        )?;
        writeln!(self.output, "1: yes, 2: no")?;
        let Some(confirm) = self.read_in_range(1, 2)? else {
            return Ok(None);
        };

        if confirm == 1 {
            let removed = hotel.cancel_reservation(ordinal)?;
            tracing::info!("Cancelled reservation: {}", removed);
            writeln!(self.output, "Reservation cancelled, remaining reservations:")?;
            self.print_lines(&hotel.list_reservations(), "(no reservations)")?;
        }

        Ok(Some(()))
    }

    fn print_reservations(&mut self, hotel: &Hotel) -> Result<()> {
        writeln!(self.output, "Reservations:")?;
        self.print_lines(&hotel.list_reservations(), "(no reservations)")
    }

    fn print_lines(&mut self, lines: &[String], empty: &str) -> Result<()> {
        if lines.is_empty() {
            writeln!(self.output, "{}", empty)?;
        }
        for line in lines {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let line = line.trim();
        if line == EXIT_KEYWORD {
            return Ok(None);
        }
        Ok(Some(line.to_string()))
    }

    fn read_int(&mut self, prompt: &str) -> Result<Option<i64>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match line.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Please enter a number")?,
            }
        }
    }

    fn read_in_range(&mut self, lower: i64, upper: i64) -> Result<Option<i64>> {
        let prompt = format!("Enter a number between {} and {}: ", lower, upper);
        loop {
            let Some(value) = self.read_int(&prompt)? else {
                return Ok(None);
            };
            if (lower..=upper).contains(&value) {
                return Ok(Some(value));
            }
            writeln!(self.output, "Number out of range")?;
        }
    }

    fn read_room(&mut self, hotel: &Hotel) -> Result<Option<Room>> {
        loop {
            let Some(number) = self.read_int("Number of the room you would like to book: ")? else {
                return Ok(None);
            };
            let room = u32::try_from(number)
                .ok()
                .and_then(|number| hotel.find_room_by_number(number));
            match room {
                Some(room) => return Ok(Some(*room)),
                None => writeln!(self.output, "No room with that number")?,
            }
        }
    }

    fn read_date(&mut self) -> Result<Option<NaiveDate>> {
        loop {
            let Some(line) = self.read_line("Enter the date as YYYY-MM-DD: ")? else {
                return Ok(None);
            };
            match NaiveDate::parse_from_str(&line, DATE_FORMAT) {
                Ok(date) => return Ok(Some(date)),
                Err(_) => writeln!(self.output, "Invalid date format")?,
            }
        }
    }
}
