use serde::{Deserialize, Serialize};

use crate::domain::types::ArtistId;

/// Artist summary returned by searches and lookups.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    pub age: i32,
    pub years_active: i32,
    pub genre: String,
    pub website: Option<String>,
    pub net_worth: i64,
    pub label_name: String,
    pub retired: bool,
}
