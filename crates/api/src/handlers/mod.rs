//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod clients;
pub mod technicians;
pub mod tickets;
