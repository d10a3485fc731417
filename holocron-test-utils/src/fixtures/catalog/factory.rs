//! Factory functions for generating mock catalog database models.
//!
//! Provides pure functions for creating models with standard test values. These are
//! in-memory model instances that don't require database interaction.

use crate::model::{CharacterModel, PlanetModel, UserModel, VehicleModel};

/// Create a mock planet model.
pub fn mock_planet_model(planet_id: i32) -> PlanetModel {
    PlanetModel {
        id: planet_id,
        name: format!("Planet {}", planet_id),
        climate: "arid".to_string(),
        gravity: 1,
        population: 200_000,
        orbital_period: 304,
    }
}

/// Create a mock character model.
///
/// # Arguments
/// - `character_id` - Primary key of the character
/// - `planet_id` - Primary key of the character's homeworld
pub fn mock_character_model(character_id: i32, planet_id: i32) -> CharacterModel {
    CharacterModel {
        id: character_id,
        name: format!("Character {}", character_id),
        homeworld: planet_id,
        birth_year: 19,
        height: 172,
        weight: 77,
        hair_color: "blond".to_string(),
        eye_color: "blue".to_string(),
    }
}

/// Create a mock vehicle model.
pub fn mock_vehicle_model(vehicle_id: i32) -> VehicleModel {
    VehicleModel {
        id: vehicle_id,
        name: format!("Vehicle {}", vehicle_id),
        max_passengers: 30,
        cost_in_credits: 150_000,
        max_speed: Some(30),
    }
}

/// Create a mock user model.
///
/// Username and email are derived from the ID so multiple users satisfy the
/// unique constraints.
pub fn mock_user_model(user_id: i32) -> UserModel {
    UserModel {
        id: user_id,
        username: format!("user{}", user_id),
        email: format!("user{}@example.com", user_id),
        password: "hunter2".to_string(),
        is_active: true,
    }
}
