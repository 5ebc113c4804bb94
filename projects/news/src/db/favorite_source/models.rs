use chrono::NaiveDateTime;
use diesel::prelude::*;
use crate::db::schema::favorite_sources;
use crate::domain::CreateFavoriteSourceCommand;

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = favorite_sources)]
pub struct FavoriteSource {
    pub id: i64,
    pub owner_key: String,
    pub source_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = favorite_sources)]
pub struct NewFavoriteSource<'a> {
    pub owner_key: &'a str,
    pub source_id: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl<'a> NewFavoriteSource<'a> {
    /// Builds the insert row; both timestamps start at `now`.
    pub fn from_command(command: &'a CreateFavoriteSourceCommand, now: NaiveDateTime) -> Self {
        Self {
            owner_key: command.owner_key(),
            source_id: command.source_id(),
            created_at: now,
            updated_at: now,
        }
    }
}
