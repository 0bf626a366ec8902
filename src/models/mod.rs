pub mod cinema;
pub mod room;
pub mod seat;
pub mod ticket;

pub use cinema::{Availability, Cinema, CinemaInfo};
pub use room::{Movie, Room, RoomInfo, RoomParams};
pub use seat::{SeatGrid, SeatState};
pub use ticket::Ticket;
