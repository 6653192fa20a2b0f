pub mod config;
pub mod console;
pub mod health;
pub mod search;
pub mod tickets;
