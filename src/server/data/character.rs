//! Character repository.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::db::CharacterModel;

/// Repository for the `characters` table
pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a character by primary key
    pub async fn get_by_id(&self, character_id: i32) -> Result<Option<CharacterModel>, DbErr> {
        entity::prelude::Characters::find_by_id(character_id).one(self.db).await
    }

    /// Returns every character ordered by ID, which matches insertion order
    pub async fn get_all(&self) -> Result<Vec<CharacterModel>, DbErr> {
        entity::prelude::Characters::find()
            .order_by_asc(entity::characters::Column::Id)
            .all(self.db)
            .await
    }
}
