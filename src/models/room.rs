use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use crate::error::CinemaError;
use crate::models::seat::SeatGrid;
use crate::services::TicketPricer;

pub const MAX_ROWS: usize = 50;
pub const MAX_SEATS_PER_ROW: usize = 100;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Movie {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub code: String,
}

impl Movie {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self { name: name.into(), code: code.into() }
    }
}

/// Параметры настройки зала, уже собранные с консоли.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RoomParams {
    #[validate(range(min = 1, max = 50))]
    pub rows: usize,
    #[validate(range(min = 1, max = 100))]
    pub seats_per_row: usize,
    pub is_3d: bool,
    #[validate(length(min = 1))]
    pub room_code: String,
    #[validate(nested)]
    pub early_movie: Movie,
    #[validate(nested)]
    pub late_movie: Movie,
}

/// Снимок конфигурации зала для отображения.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomInfo {
    pub number: usize,
    pub configured: bool,
    pub room_code: String,
    pub is_3d: bool,
    pub rows: usize,
    pub seats_per_row: usize,
    pub early_movie: Movie,
    pub late_movie: Movie,
}

#[derive(Debug, Clone, Default)]
pub struct Room {
    number: usize,
    configured: bool,
    is_3d: bool,
    room_code: String,
    early_movie: Movie,
    late_movie: Movie,
    grid: SeatGrid,
}

impl Room {
    /// Пустой слот: сетка 0x0 до первой настройки. `number` - номер зала с единицы.
    pub fn unconfigured(number: usize) -> Self {
        Self { number, ..Default::default() }
    }

    /// Применяет параметры и пересоздаёт сетку. Все прежние брони теряются.
    pub fn configure(&mut self, params: RoomParams) -> Result<(), CinemaError> {
        params.validate()?;

        let had_reservations = self.grid.reserved_count();
        self.grid = SeatGrid::new(params.rows, params.seats_per_row)?;
        self.is_3d = params.is_3d;
        self.room_code = params.room_code;
        self.early_movie = params.early_movie;
        self.late_movie = params.late_movie;
        self.configured = true;

        info!(
            room = self.number,
            code = %self.room_code,
            rows = params.rows,
            seats_per_row = params.seats_per_row,
            is_3d = self.is_3d,
            dropped_reservations = had_reservations,
            "Room configured"
        );
        Ok(())
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    pub fn is_3d(&self) -> bool {
        self.is_3d
    }

    pub fn room_code(&self) -> &str {
        &self.room_code
    }

    pub fn grid(&self) -> &SeatGrid {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut SeatGrid {
        &mut self.grid
    }

    pub fn price(&self, pricer: &TicketPricer) -> f64 {
        pricer.price(self.is_3d)
    }

    pub fn describe(&self) -> RoomInfo {
        RoomInfo {
            number: self.number,
            configured: self.configured,
            room_code: self.room_code.clone(),
            is_3d: self.is_3d,
            rows: self.grid.rows(),
            seats_per_row: self.grid.seats_per_row(),
            early_movie: self.early_movie.clone(),
            late_movie: self.late_movie.clone(),
        }
    }
}
