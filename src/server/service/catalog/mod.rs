//! Read access to catalog reference data.


use sea_orm::DatabaseConnection;

use crate::{
    model::catalog::{CharacterDto, PlanetDto, UserDto, VehicleDto},
    server::{
        data::{
            character::CharacterRepository, planet::PlanetRepository, user::UserRepository,
            vehicle::VehicleRepository,
        },
        error::{catalog::CatalogError, Error},
        model::{
            catalog::EntityKind,
            db::{CharacterModel, PlanetModel, UserModel, VehicleModel},
        },
    },
};

/// Service for listing and fetching users, characters, planets, and vehicles.
///
/// Accessors are stateless: every call is a single query and models are converted to
/// DTOs as-is, without expanding relationships.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of [`CatalogService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every user, without passwords.
    pub async fn list_users(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Lists every character, homeworld as a planet ID.
    pub async fn list_characters(&self) -> Result<Vec<CharacterDto>, Error> {
        let characters = CharacterRepository::new(self.db).get_all().await?;

        Ok(characters.into_iter().map(CharacterDto::from).collect())
    }

    /// Retrieves a single character.
    ///
    /// # Returns
    /// - `Ok(CharacterDto)` - Character found
    /// - `Err(Error::CatalogError)` - No character with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_character(&self, character_id: i32) -> Result<CharacterDto, Error> {
        CharacterRepository::new(self.db)
            .get_by_id(character_id)
            .await?
            .map(CharacterDto::from)
            .ok_or_else(|| CatalogError::NotFound(EntityKind::Character).into())
    }

    /// Lists every planet.
    pub async fn list_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planets = PlanetRepository::new(self.db).get_all().await?;

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }

    /// Retrieves a single planet, failing with `NotFound(Planet)` when absent.
    pub async fn get_planet(&self, planet_id: i32) -> Result<PlanetDto, Error> {
        PlanetRepository::new(self.db)
            .get_by_id(planet_id)
            .await?
            .map(PlanetDto::from)
            .ok_or_else(|| CatalogError::NotFound(EntityKind::Planet).into())
    }

    /// Lists every vehicle.
    pub async fn list_vehicles(&self) -> Result<Vec<VehicleDto>, Error> {
        let vehicles = VehicleRepository::new(self.db).get_all().await?;

        Ok(vehicles.into_iter().map(VehicleDto::from).collect())
    }

    /// Retrieves a single vehicle, failing with `NotFound(Vehicle)` when absent.
    pub async fn get_vehicle(&self, vehicle_id: i32) -> Result<VehicleDto, Error> {
        VehicleRepository::new(self.db)
            .get_by_id(vehicle_id)
            .await?
            .map(VehicleDto::from)
            .ok_or_else(|| CatalogError::NotFound(EntityKind::Vehicle).into())
    }
}

impl From<UserModel> for UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            is_active: user.is_active,
        }
    }
}

impl From<CharacterModel> for CharacterDto {
    fn from(character: CharacterModel) -> Self {
        Self {
            id: character.id,
            name: character.name,
            homeworld: character.homeworld,
            birth_year: character.birth_year,
            height: character.height,
            weight: character.weight,
            hair_color: character.hair_color,
            eye_color: character.eye_color,
        }
    }
}

impl From<PlanetModel> for PlanetDto {
    fn from(planet: PlanetModel) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            climate: planet.climate,
            gravity: planet.gravity,
            population: planet.population,
            orbital_period: planet.orbital_period,
        }
    }
}

impl From<VehicleModel> for VehicleDto {
    fn from(vehicle: VehicleModel) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            max_passengers: vehicle.max_passengers,
            cost_in_credits: vehicle.cost_in_credits,
            max_speed: vehicle.max_speed,
        }
    }
}
