pub mod health;
pub mod search;
pub mod ticket_store;

pub use health::HealthService;
pub use search::SearchService;
pub use ticket_store::TicketService;
