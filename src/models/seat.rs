use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CinemaError;
use crate::models::room::{MAX_ROWS, MAX_SEATS_PER_ROW};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatState {
    #[default]
    Available,
    Reserved,
}

impl SeatState {
    pub fn marker(self) -> char {
        match self {
            SeatState::Available => '0',
            SeatState::Reserved => '1',
        }
    }
}

impl fmt::Display for SeatState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // через char::fmt, чтобы работали ширина и выравнивание
        fmt::Display::fmt(&self.marker(), f)
    }
}

/// Сетка мест одного зала.
///
/// Хранится плоским вектором `rows * seats_per_row`; размеры фиксируются при создании.
/// Любой доступ к ячейке идёт через [`SeatGrid::slot`], где и живёт проверка границ.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeatGrid {
    rows: usize,
    seats_per_row: usize,
    cells: Vec<SeatState>,
}

impl SeatGrid {
    /// Все места свободны. Размеры: 1..=50 рядов, 1..=100 мест в ряду.
    /// Пустая сетка 0x0 есть только у ненастроенного зала (`Default`).
    pub fn new(rows: usize, seats_per_row: usize) -> Result<Self, CinemaError> {
        CinemaError::check_range("rows", rows, 1, MAX_ROWS)?;
        CinemaError::check_range("seats per row", seats_per_row, 1, MAX_SEATS_PER_ROW)?;
        Ok(Self {
            rows,
            seats_per_row,
            cells: vec![SeatState::Available; rows * seats_per_row],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn seats_per_row(&self) -> usize {
        self.seats_per_row
    }

    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    fn slot(&self, row: usize, seat: usize) -> Result<usize, CinemaError> {
        if row >= self.rows {
            return Err(CinemaError::InvalidRange {
                field: "row",
                value: row,
                min: 0,
                max: self.rows.saturating_sub(1),
            });
        }
        if seat >= self.seats_per_row {
            return Err(CinemaError::InvalidRange {
                field: "seat",
                value: seat,
                min: 0,
                max: self.seats_per_row.saturating_sub(1),
            });
        }
        Ok(row * self.seats_per_row + seat)
    }

    pub fn state(&self, row: usize, seat: usize) -> Result<SeatState, CinemaError> {
        let idx = self.slot(row, seat)?;
        Ok(self.cells[idx])
    }

    pub fn is_reserved(&self, row: usize, seat: usize) -> Result<bool, CinemaError> {
        Ok(self.state(row, seat)? == SeatState::Reserved)
    }

    pub fn reserve(&mut self, row: usize, seat: usize) -> Result<(), CinemaError> {
        let idx = self.slot(row, seat)?;
        if self.cells[idx] == SeatState::Reserved {
            return Err(CinemaError::AlreadyReserved { row, seat });
        }
        self.cells[idx] = SeatState::Reserved;
        Ok(())
    }

    pub fn cancel(&mut self, row: usize, seat: usize) -> Result<(), CinemaError> {
        let idx = self.slot(row, seat)?;
        if self.cells[idx] == SeatState::Available {
            return Err(CinemaError::NotReserved { row, seat });
        }
        self.cells[idx] = SeatState::Available;
        Ok(())
    }

    // Считаем каждый раз заново, счётчик не кешируем
    pub fn available_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|s| **s == SeatState::Available)
            .count()
    }

    pub fn reserved_count(&self) -> usize {
        self.capacity() - self.available_count()
    }

    /// Ленивый обход по рядам. Каждый вызов начинает обход заново.
    pub fn render(&self) -> impl Iterator<Item = &[SeatState]> + '_ {
        self.cells.chunks(self.seats_per_row.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_available() {
        let grid = SeatGrid::new(5, 10).unwrap();
        assert_eq!(grid.capacity(), 50);
        assert_eq!(grid.available_count(), 50);
        assert_eq!(grid.reserved_count(), 0);
    }

    #[test]
    fn three_by_three_scenario() {
        let mut grid = SeatGrid::new(3, 3).unwrap();
        grid.reserve(1, 1).unwrap();
        assert_eq!(grid.available_count(), 8);
        assert!(grid.is_reserved(1, 1).unwrap());
        grid.cancel(1, 1).unwrap();
        assert_eq!(grid.available_count(), 9);
    }

    #[test]
    fn double_reserve_fails_and_keeps_state() {
        let mut grid = SeatGrid::new(2, 2).unwrap();
        grid.reserve(0, 1).unwrap();
        let err = grid.reserve(0, 1).unwrap_err();
        assert!(matches!(err, CinemaError::AlreadyReserved { row: 0, seat: 1 }));
        assert!(grid.is_reserved(0, 1).unwrap());
        assert_eq!(grid.available_count(), 3);
    }

    #[test]
    fn cancel_available_fails() {
        let mut grid = SeatGrid::new(2, 2).unwrap();
        let err = grid.cancel(1, 0).unwrap_err();
        assert!(matches!(err, CinemaError::NotReserved { row: 1, seat: 0 }));
        assert_eq!(grid.available_count(), 4);
    }

    #[test]
    fn out_of_bounds_is_invalid_range() {
        let mut grid = SeatGrid::new(5, 10).unwrap();
        assert!(matches!(
            grid.reserve(10, 0),
            Err(CinemaError::InvalidRange { field: "row", value: 10, max: 4, .. })
        ));
        assert!(matches!(
            grid.is_reserved(0, 10),
            Err(CinemaError::InvalidRange { field: "seat", value: 10, max: 9, .. })
        ));
    }

    #[test]
    fn new_rejects_dimensions_outside_limits() {
        assert!(matches!(
            SeatGrid::new(3, 0),
            Err(CinemaError::InvalidRange { field: "seats per row", value: 0, .. })
        ));
        assert!(matches!(
            SeatGrid::new(0, 3),
            Err(CinemaError::InvalidRange { field: "rows", value: 0, .. })
        ));
        assert!(SeatGrid::new(51, 1).is_err());
        assert!(SeatGrid::new(1, 101).is_err());
        assert!(SeatGrid::new(usize::MAX, usize::MAX).is_err());
        assert_eq!(SeatGrid::new(50, 100).unwrap().capacity(), 5000);
    }

    #[test]
    fn display_respects_width() {
        assert_eq!(format!("{:>3}", SeatState::Reserved), "  1");
        assert_eq!(SeatState::Available.to_string(), "0");
    }

    #[test]
    fn empty_grid_rejects_everything() {
        let grid = SeatGrid::default();
        assert!(grid.is_reserved(0, 0).is_err());
        assert_eq!(grid.render().count(), 0);
        assert_eq!(grid.available_count(), 0);
    }

    #[test]
    fn render_yields_rows_in_order() {
        let mut grid = SeatGrid::new(2, 3).unwrap();
        grid.reserve(1, 2).unwrap();

        let rows: Vec<String> = grid
            .render()
            .map(|row| row.iter().map(|s| s.marker()).collect())
            .collect();
        assert_eq!(rows, vec!["000".to_string(), "001".to_string()]);

        // повторный обход даёт то же самое
        assert_eq!(grid.render().count(), 2);
    }
}
