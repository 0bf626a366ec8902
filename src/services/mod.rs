pub mod pricing;

pub use pricing::TicketPricer;
