use thiserror::Error;

/// Ошибки ядра: все они восстановимы и показываются пользователю как сообщение.
#[derive(Debug, Error)]
pub enum CinemaError {
    #[error("Invalid {field}: {value} (allowed {min}..={max})")]
    InvalidRange {
        field: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },

    #[error("Seat {seat} in row {row} is already reserved")]
    AlreadyReserved { row: usize, seat: usize },

    #[error("Seat {seat} in row {row} is not reserved")]
    NotReserved { row: usize, seat: usize },

    #[error("{0} cannot be empty")]
    EmptyInput(&'static str),

    #[error("Invalid room parameters: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl CinemaError {
    /// Проверка `min <= value <= max` с единым форматом ошибки.
    pub fn check_range(
        field: &'static str,
        value: usize,
        min: usize,
        max: usize,
    ) -> Result<usize, CinemaError> {
        if value < min || value > max {
            return Err(CinemaError::InvalidRange { field, value, min, max });
        }
        Ok(value)
    }
}

/// Ошибки консольного слоя.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Ввод закончился (EOF) - штатное завершение сессии.
    #[error("input closed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_range_accepts_bounds() {
        assert_eq!(CinemaError::check_range("rows", 1, 1, 50).unwrap(), 1);
        assert_eq!(CinemaError::check_range("rows", 50, 1, 50).unwrap(), 50);
    }

    #[test]
    fn check_range_rejects_outside() {
        let err = CinemaError::check_range("rows", 51, 1, 50).unwrap_err();
        assert!(matches!(
            err,
            CinemaError::InvalidRange { field: "rows", value: 51, min: 1, max: 50 }
        ));
        assert_eq!(err.to_string(), "Invalid rows: 51 (allowed 1..=50)");
    }
}
