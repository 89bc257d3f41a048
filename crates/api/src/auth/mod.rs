//! Credential and token utilities: JWT bearer tokens, Argon2id password
//! hashing, and opaque random tokens for email verification / password reset.

pub mod jwt;
pub mod password;
pub mod token;
