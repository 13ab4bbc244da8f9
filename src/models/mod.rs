pub mod account;
pub mod error;
pub mod order;
pub mod ticket;
