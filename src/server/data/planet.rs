//! Planet repository.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::db::PlanetModel;

/// Repository for the `planets` table
pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a planet by primary key
    pub async fn get_by_id(&self, planet_id: i32) -> Result<Option<PlanetModel>, DbErr> {
        entity::prelude::Planets::find_by_id(planet_id).one(self.db).await
    }

    /// Returns every planet ordered by ID, which matches insertion order
    pub async fn get_all(&self) -> Result<Vec<PlanetModel>, DbErr> {
        entity::prelude::Planets::find()
            .order_by_asc(entity::planets::Column::Id)
            .all(self.db)
            .await
    }
}
