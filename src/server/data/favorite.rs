//! Favorite repository.
//!
//! A favorite row references its target through one of three nullable columns, selected
//! by [`TargetKind`].

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    catalog::{FavoriteTarget, TargetKind},
    db::FavoriteModel,
};

/// Repository for the `favorites` table
pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a favorite for the user pointing at the provided target
    ///
    /// Only the column matching the target's kind is populated, the other two target
    /// columns are written as NULL.
    pub async fn create(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<FavoriteModel, DbErr> {
        let favorite = entity::favorites::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            favorite_characters: ActiveValue::Set(target.id_for(TargetKind::Character)),
            favorite_planets: ActiveValue::Set(target.id_for(TargetKind::Planet)),
            favorite_vehicles: ActiveValue::Set(target.id_for(TargetKind::Vehicle)),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Returns every favorite ordered by ID
    pub async fn get_all(&self) -> Result<Vec<FavoriteModel>, DbErr> {
        entity::prelude::Favorites::find()
            .order_by_asc(entity::favorites::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds the oldest favorite the user has for the provided target
    ///
    /// Duplicate favorites are possible, in which case the one with the lowest ID is returned.
    pub async fn find_by_user_and_target(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<FavoriteModel>, DbErr> {
        entity::prelude::Favorites::find()
            .filter(entity::favorites::Column::UserId.eq(user_id))
            .filter(target_column(target.kind).eq(target.id))
            .order_by_asc(entity::favorites::Column::Id)
            .one(self.db)
            .await
    }

    /// Deletes a favorite
    ///
    /// Returns OK regardless of the favorite existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorites::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }
}

/// Column of the favorites table holding the target ID for `kind`
fn target_column(kind: TargetKind) -> entity::favorites::Column {
    match kind {
        TargetKind::Character => entity::favorites::Column::FavoriteCharacters,
        TargetKind::Planet => entity::favorites::Column::FavoritePlanets,
        TargetKind::Vehicle => entity::favorites::Column::FavoriteVehicles,
    }
}
