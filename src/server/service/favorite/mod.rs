//! Favorite relationship management.
//!
//! Favorites join one user to one character, planet, or vehicle. Every mutation checks
//! the referenced rows before touching the favorites table, and a failed check returns
//! before anything is written.


use sea_orm::DatabaseConnection;

use crate::{
    model::favorite::FavoriteDto,
    server::{
        data::{
            character::CharacterRepository, favorite::FavoriteRepository,
            planet::PlanetRepository, user::UserRepository, vehicle::VehicleRepository,
        },
        error::{catalog::CatalogError, Error},
        model::{
            catalog::{EntityKind, FavoriteTarget, TargetKind},
            db::FavoriteModel,
        },
    },
};

/// Service for adding, removing, and listing favorites.
///
/// Existence checks and the following insert or delete are separate statements; two
/// concurrent callers on the same user and target can both pass the checks.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a favorite for the user.
    ///
    /// The target is checked before the user, so when both are missing the target is
    /// reported. Adding the same favorite twice stores two rows.
    ///
    /// # Arguments
    /// - `target` - The character, planet, or vehicle being favorited
    /// - `user_id` - ID of the user the favorite belongs to
    ///
    /// # Returns
    /// - `Ok(FavoriteModel)` - The newly stored favorite
    /// - `Err(Error::CatalogError)` - Target or user does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_favorite(
        &self,
        target: FavoriteTarget,
        user_id: i32,
    ) -> Result<FavoriteModel, Error> {
        self.ensure_target_exists(target).await?;
        self.ensure_user_exists(user_id).await?;

        let favorite = FavoriteRepository::new(self.db)
            .create(user_id, target)
            .await?;

        tracing::debug!(
            favorite_id = %favorite.id,
            user_id = %user_id,
            target_id = %target.id,
            kind = %target.kind,
            "Added favorite"
        );

        Ok(favorite)
    }

    /// Removes the user's favorite for the target.
    ///
    /// Character and planet removals check the target and user first. Vehicle removals
    /// skip those checks and only look for the favorite row (see
    /// [`TargetKind::verifies_references_on_remove`]). When the user has duplicate
    /// favorites for the target, only the oldest is removed.
    ///
    /// # Returns
    /// - `Ok(())` - Favorite removed
    /// - `Err(Error::CatalogError)` - Target, user, or favorite does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove_favorite(&self, target: FavoriteTarget, user_id: i32) -> Result<(), Error> {
        if target.kind.verifies_references_on_remove() {
            self.ensure_target_exists(target).await?;
            self.ensure_user_exists(user_id).await?;
        }

        let favorite_repo = FavoriteRepository::new(self.db);

        let favorite = favorite_repo
            .find_by_user_and_target(user_id, target)
            .await?
            .ok_or(CatalogError::NotFound(EntityKind::Favorite))?;

        let result = favorite_repo.delete(favorite.id).await?;

        // Row was deleted by another request between lookup and delete
        if result.rows_affected == 0 {
            return Err(CatalogError::NotFound(EntityKind::Favorite).into());
        }

        tracing::debug!(
            favorite_id = %favorite.id,
            user_id = %user_id,
            target_id = %target.id,
            kind = %target.kind,
            "Removed favorite"
        );

        Ok(())
    }

    /// Lists every favorite as `{id, user_id}`.
    pub async fn get_all_favorites(&self) -> Result<Vec<FavoriteDto>, Error> {
        let favorites = FavoriteRepository::new(self.db).get_all().await?;

        Ok(favorites
            .into_iter()
            .map(|f| FavoriteDto {
                id: f.id,
                user_id: f.user_id,
            })
            .collect())
    }

    async fn ensure_target_exists(&self, target: FavoriteTarget) -> Result<(), Error> {
        let exists = match target.kind {
            TargetKind::Character => CharacterRepository::new(self.db)
                .get_by_id(target.id)
                .await?
                .is_some(),
            TargetKind::Planet => PlanetRepository::new(self.db)
                .get_by_id(target.id)
                .await?
                .is_some(),
            TargetKind::Vehicle => VehicleRepository::new(self.db)
                .get_by_id(target.id)
                .await?
                .is_some(),
        };

        if !exists {
            return Err(CatalogError::NotFound(target.kind.into()).into());
        }

        Ok(())
    }

    async fn ensure_user_exists(&self, user_id: i32) -> Result<(), Error> {
        if UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(CatalogError::NotFound(EntityKind::User).into());
        }

        Ok(())
    }
}
