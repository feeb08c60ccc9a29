//! Diesel models mirroring the database schema.

pub mod artist;
#[cfg(feature = "server")]
pub mod config;
