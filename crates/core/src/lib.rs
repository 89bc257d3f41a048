//! Shared domain types, errors, and input validation for the helpdesk backend.

pub mod error;
pub mod types;
pub mod validation;
