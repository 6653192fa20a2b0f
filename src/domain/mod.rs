pub mod search;
pub mod ticket;
