use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::CinemaError;
use crate::models::room::{Room, RoomInfo, RoomParams};
use crate::models::seat::SeatGrid;
use crate::models::ticket::Ticket;
use crate::services::TicketPricer;

pub const MAX_ROOMS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CinemaInfo {
    pub name: String,
    pub room_count: usize,
}

/// Доступность мест в зале: снимок настроек плюс ссылка на сетку для отрисовки.
#[derive(Debug, Clone)]
pub struct Availability<'a> {
    pub room: RoomInfo,
    pub available: usize,
    pub grid: &'a SeatGrid,
}

/// Кинотеатр: фиксированный набор залов, индексы с нуля.
#[derive(Debug, Clone)]
pub struct Cinema {
    name: String,
    rooms: Vec<Room>,
    pricer: TicketPricer,
}

impl Cinema {
    pub fn new(name: impl Into<String>, room_count: usize) -> Result<Self, CinemaError> {
        Self::with_pricer(name, room_count, TicketPricer::default())
    }

    pub fn with_pricer(
        name: impl Into<String>,
        room_count: usize,
        pricer: TicketPricer,
    ) -> Result<Self, CinemaError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CinemaError::EmptyInput("cinema name"));
        }
        CinemaError::check_range("room count", room_count, 1, MAX_ROOMS)?;

        let rooms = (1..=room_count).map(Room::unconfigured).collect();
        info!(cinema = %name, room_count, "Cinema created");
        Ok(Self { name, rooms, pricer })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn info(&self) -> CinemaInfo {
        CinemaInfo {
            name: self.name().to_string(),
            room_count: self.rooms.len(),
        }
    }

    fn check_index(&self, index: usize) -> Result<usize, CinemaError> {
        if index >= self.rooms.len() {
            return Err(CinemaError::InvalidRange {
                field: "room index",
                value: index,
                min: 0,
                max: self.rooms.len() - 1,
            });
        }
        Ok(index)
    }

    pub fn room(&self, index: usize) -> Result<&Room, CinemaError> {
        let index = self.check_index(index)?;
        Ok(&self.rooms[index])
    }

    fn room_mut(&mut self, index: usize) -> Result<&mut Room, CinemaError> {
        let index = self.check_index(index)?;
        Ok(&mut self.rooms[index])
    }

    pub fn configure_room(&mut self, index: usize, params: RoomParams) -> Result<(), CinemaError> {
        self.room_mut(index)?.configure(params)
    }

    pub fn reserve_seat(&mut self, index: usize, row: usize, seat: usize) -> Result<(), CinemaError> {
        self.room_mut(index)?.grid_mut().reserve(row, seat)?;
        debug!(room = index + 1, row, seat, "Seat reserved");
        Ok(())
    }

    pub fn cancel_seat(&mut self, index: usize, row: usize, seat: usize) -> Result<(), CinemaError> {
        self.room_mut(index)?.grid_mut().cancel(row, seat)?;
        debug!(room = index + 1, row, seat, "Reservation cancelled");
        Ok(())
    }

    pub fn availability(&self, index: usize) -> Result<Availability<'_>, CinemaError> {
        let room = self.room(index)?;
        Ok(Availability {
            room: room.describe(),
            available: room.grid().available_count(),
            grid: room.grid(),
        })
    }

    pub fn room_price(&self, index: usize) -> Result<f64, CinemaError> {
        Ok(self.room(index)?.price(&self.pricer))
    }

    /// Билет выдаётся только на место, которое реально забронировано в этом зале.
    pub fn issue_ticket(&self, index: usize, row: usize, seat: usize) -> Result<Ticket, CinemaError> {
        let room = self.room(index)?;
        if !room.grid().is_reserved(row, seat)? {
            return Err(CinemaError::NotReserved { row, seat });
        }

        let ticket = Ticket {
            id: Uuid::new_v4(),
            cinema_name: self.name().to_string(),
            room_number: room.number(),
            room_code: room.room_code().to_string(),
            row,
            seat,
            is_3d: room.is_3d(),
            price: room.price(&self.pricer),
            issued_at: Utc::now(),
        };
        info!(
            ticket = %serde_json::to_string(&ticket).unwrap_or_default(),
            "Ticket issued"
        );
        Ok(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::room::Movie;

    fn params(rows: usize, seats: usize, is_3d: bool) -> RoomParams {
        RoomParams {
            rows,
            seats_per_row: seats,
            is_3d,
            room_code: format!("R{rows}x{seats}"),
            early_movie: Movie::new("Vertigo", "V-1"),
            late_movie: Movie::new("Psycho", "P-2"),
        }
    }

    #[test]
    fn room_count_bounds() {
        assert!(Cinema::new("Odeon", 1).is_ok());
        assert!(Cinema::new("Odeon", 20).is_ok());
        assert!(matches!(
            Cinema::new("Odeon", 0),
            Err(CinemaError::InvalidRange { field: "room count", .. })
        ));
        assert!(Cinema::new("Odeon", 21).is_err());
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(matches!(Cinema::new("  ", 3), Err(CinemaError::EmptyInput(_))));
    }

    #[test]
    fn info_snapshot() {
        let cinema = Cinema::new("Rex", 4).unwrap();
        assert_eq!(cinema.name(), "Rex");
        assert_eq!(
            cinema.info(),
            CinemaInfo { name: "Rex".into(), room_count: 4 }
        );
    }

    #[test]
    fn bad_room_index() {
        let mut cinema = Cinema::new("Rex", 2).unwrap();
        assert!(matches!(
            cinema.configure_room(2, params(1, 1, false)),
            Err(CinemaError::InvalidRange { field: "room index", value: 2, max: 1, .. })
        ));
        assert!(cinema.reserve_seat(5, 0, 0).is_err());
        assert!(cinema.availability(2).is_err());
    }

    #[test]
    fn ticket_requires_reservation() {
        let mut cinema = Cinema::new("Rex", 1).unwrap();
        cinema.configure_room(0, params(5, 10, true)).unwrap();

        assert!(matches!(
            cinema.issue_ticket(0, 2, 3),
            Err(CinemaError::NotReserved { row: 2, seat: 3 })
        ));

        cinema.reserve_seat(0, 2, 3).unwrap();
        let ticket = cinema.issue_ticket(0, 2, 3).unwrap();
        assert_eq!(ticket.cinema_name, "Rex");
        assert_eq!(ticket.room_number, 1);
        assert_eq!(ticket.room_code, "R5x10");
        assert!(ticket.is_3d);
        assert_eq!(ticket.formatted_price(), "15.00");
    }

    #[test]
    fn ticket_bounds_use_real_dimensions() {
        let mut cinema = Cinema::new("Rex", 1).unwrap();
        cinema.configure_room(0, params(5, 10, false)).unwrap();
        // в пределах 0-50/0-100, но вне реального зала
        assert!(matches!(
            cinema.issue_ticket(0, 20, 0),
            Err(CinemaError::InvalidRange { field: "row", .. })
        ));
    }

    #[test]
    fn availability_tracks_reservations() {
        let mut cinema = Cinema::new("Rex", 1).unwrap();
        cinema.configure_room(0, params(2, 2, false)).unwrap();
        cinema.reserve_seat(0, 0, 0).unwrap();

        let availability = cinema.availability(0).unwrap();
        assert_eq!(availability.available, 3);
        assert_eq!(availability.room.room_code, "R2x2");
        assert_eq!(availability.grid.render().count(), 2);
    }
}
