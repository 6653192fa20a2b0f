pub mod ticket_api;
