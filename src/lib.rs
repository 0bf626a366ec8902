pub mod config;
pub mod console;
pub mod controllers;
pub mod error;
pub mod models;
pub mod services;

pub use error::{CinemaError, ConsoleError};
pub use models::Cinema;
