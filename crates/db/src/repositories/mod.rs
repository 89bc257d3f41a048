mod account_repo;
mod client_repo;
mod technician_repo;
mod ticket_repo;

pub use account_repo::AccountRepo;
pub use client_repo::ClientRepo;
pub use technician_repo::TechnicianRepo;
pub use ticket_repo::TicketRepo;
