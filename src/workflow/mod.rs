pub mod busy;
pub mod console;

pub use busy::BusyState;
pub use console::{FlowFailure, TicketConsole};
