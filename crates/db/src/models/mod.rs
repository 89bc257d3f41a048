pub mod account;
pub mod client;
pub mod technician;
pub mod ticket;
