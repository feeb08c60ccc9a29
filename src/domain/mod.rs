//! Domain types exposed by the artist search service layer.

pub mod artist;
pub mod search;
pub mod types;
