use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::artist::Artist as DomainArtist;
use crate::domain::types::{ArtistId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::artists)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::artist::Artist`].
pub struct Artist {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub years_active: i32,
    pub genre: String,
    pub website: Option<String>,
    pub net_worth: i64,
    pub label_name: String,
    pub retired: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Artist> for DomainArtist {
    type Error = TypeConstraintError;

    fn try_from(artist: Artist) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ArtistId::new(artist.id)?,
            name: artist.name,
            age: artist.age,
            years_active: artist.years_active,
            genre: artist.genre,
            website: artist.website,
            net_worth: artist.net_worth,
            label_name: artist.label_name,
            retired: artist.retired,
        })
    }
}
