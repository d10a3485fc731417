//! Vehicle repository.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::db::VehicleModel;

/// Repository for the `vehicles` table
pub struct VehicleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleRepository<'a, C> {
    /// Creates a new instance of [`VehicleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a vehicle by primary key
    pub async fn get_by_id(&self, vehicle_id: i32) -> Result<Option<VehicleModel>, DbErr> {
        entity::prelude::Vehicles::find_by_id(vehicle_id).one(self.db).await
    }

    /// Returns every vehicle ordered by ID, which matches insertion order
    pub async fn get_all(&self) -> Result<Vec<VehicleModel>, DbErr> {
        entity::prelude::Vehicles::find()
            .order_by_asc(entity::vehicles::Column::Id)
            .all(self.db)
            .await
    }
}
