use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Билет на зарезервированное место.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ticket {
    pub id: Uuid,
    pub cinema_name: String,
    pub room_number: usize,
    pub room_code: String,
    pub row: usize,
    pub seat: usize,
    pub is_3d: bool,
    pub price: f64,
    pub issued_at: DateTime<Utc>,
}

impl Ticket {
    /// Цена с двумя знаками после запятой, как на чеке.
    pub fn formatted_price(&self) -> String {
        format!("{:.2}", self.price)
    }
}
