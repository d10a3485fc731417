//! Catalog database insertion utilities.
//!
//! Inserting an entity that already exists returns the existing record, and inserting a
//! character creates its homeworld first when missing.

use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    fixtures::catalog::{factory, CatalogFixtures},
    model::{CharacterModel, FavoriteModel, PlanetModel, UserModel, VehicleModel},
};

impl<'a> CatalogFixtures<'a> {
    /// Insert a mock planet into the database.
    ///
    /// # Returns
    /// - `Ok(PlanetModel)` - The created or existing planet record
    /// - `Err(TestError::DbErr)` - Database query or insert operation failed
    pub async fn insert_mock_planet(&self, planet_id: i32) -> Result<PlanetModel, TestError> {
        if let Some(existing_planet) = entity::prelude::Planets::find_by_id(planet_id)
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing_planet);
        }

        let planet = factory::mock_planet_model(planet_id);

        Ok(
            entity::prelude::Planets::insert(entity::planets::ActiveModel {
                id: ActiveValue::Set(planet.id),
                name: ActiveValue::Set(planet.name),
                climate: ActiveValue::Set(planet.climate),
                gravity: ActiveValue::Set(planet.gravity),
                population: ActiveValue::Set(planet.population),
                orbital_period: ActiveValue::Set(planet.orbital_period),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a mock character into the database.
    ///
    /// The homeworld planet is created first if it does not exist.
    ///
    /// # Returns
    /// - `Ok(CharacterModel)` - The created or existing character record
    /// - `Err(TestError::DbErr)` - Database query or insert operation failed
    pub async fn insert_mock_character(
        &self,
        character_id: i32,
        planet_id: i32,
    ) -> Result<CharacterModel, TestError> {
        if let Some(existing_character) = entity::prelude::Characters::find_by_id(character_id)
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing_character);
        }

        let planet = self.insert_mock_planet(planet_id).await?;
        let character = factory::mock_character_model(character_id, planet.id);

        Ok(
            entity::prelude::Characters::insert(entity::characters::ActiveModel {
                id: ActiveValue::Set(character.id),
                name: ActiveValue::Set(character.name),
                homeworld: ActiveValue::Set(character.homeworld),
                birth_year: ActiveValue::Set(character.birth_year),
                height: ActiveValue::Set(character.height),
                weight: ActiveValue::Set(character.weight),
                hair_color: ActiveValue::Set(character.hair_color),
                eye_color: ActiveValue::Set(character.eye_color),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a mock vehicle into the database.
    pub async fn insert_mock_vehicle(&self, vehicle_id: i32) -> Result<VehicleModel, TestError> {
        if let Some(existing_vehicle) = entity::prelude::Vehicles::find_by_id(vehicle_id)
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing_vehicle);
        }

        let vehicle = factory::mock_vehicle_model(vehicle_id);

        Ok(
            entity::prelude::Vehicles::insert(entity::vehicles::ActiveModel {
                id: ActiveValue::Set(vehicle.id),
                name: ActiveValue::Set(vehicle.name),
                max_passengers: ActiveValue::Set(vehicle.max_passengers),
                cost_in_credits: ActiveValue::Set(vehicle.cost_in_credits),
                max_speed: ActiveValue::Set(vehicle.max_speed),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a mock user into the database.
    pub async fn insert_mock_user(&self, user_id: i32) -> Result<UserModel, TestError> {
        if let Some(existing_user) = entity::prelude::User::find_by_id(user_id)
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing_user);
        }

        let user = factory::mock_user_model(user_id);

        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            id: ActiveValue::Set(user.id),
            username: ActiveValue::Set(user.username),
            email: ActiveValue::Set(user.email),
            password: ActiveValue::Set(user.password),
            is_active: ActiveValue::Set(user.is_active),
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a favorite row pointing at a character.
    pub async fn insert_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteModel, TestError> {
        self.insert_favorite(user_id, Some(character_id), None, None)
            .await
    }

    /// Insert a favorite row pointing at a planet.
    pub async fn insert_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoriteModel, TestError> {
        self.insert_favorite(user_id, None, Some(planet_id), None)
            .await
    }

    /// Insert a favorite row pointing at a vehicle.
    pub async fn insert_favorite_vehicle(
        &self,
        user_id: i32,
        vehicle_id: i32,
    ) -> Result<FavoriteModel, TestError> {
        self.insert_favorite(user_id, None, None, Some(vehicle_id))
            .await
    }

    async fn insert_favorite(
        &self,
        user_id: i32,
        character_id: Option<i32>,
        planet_id: Option<i32>,
        vehicle_id: Option<i32>,
    ) -> Result<FavoriteModel, TestError> {
        Ok(
            entity::prelude::Favorites::insert(entity::favorites::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                favorite_characters: ActiveValue::Set(character_id),
                favorite_planets: ActiveValue::Set(planet_id),
                favorite_vehicles: ActiveValue::Set(vehicle_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
