//! pricing.rs
//!
//! Плоское ценообразование билетов: базовая цена плюс фиксированная надбавка за 3D.
//! Других измерений цены нет.

use crate::config::PricingConfig;

/// Базовая цена билета.
pub const BASE_PRICE: f64 = 10.0;
/// Надбавка за 3D-сеанс.
pub const PRICE_3D: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TicketPricer {
    base_price: f64,
    surcharge_3d: f64,
}

impl Default for TicketPricer {
    fn default() -> Self {
        Self::new(BASE_PRICE, PRICE_3D)
    }
}

impl TicketPricer {
    pub fn new(base_price: f64, surcharge_3d: f64) -> Self {
        Self { base_price, surcharge_3d }
    }

    pub fn from_config(config: &PricingConfig) -> Self {
        Self::new(config.base_price, config.surcharge_3d)
    }

    pub fn price(&self, is_3d: bool) -> f64 {
        if is_3d {
            self.base_price + self.surcharge_3d
        } else {
            self.base_price
        }
    }
}
