//! Database model type aliases.
//!
//! This module provides type aliases for SeaORM database entity models used throughout
//! the application, so signatures don't need to reach into the generated `entity` crate.

/// Type alias for user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `username` - Unique login name
/// - `email` - Unique email address
/// - `password` - Stored password, never serialized to API consumers
/// - `is_active` - Whether the account is active
pub type UserModel = entity::user::Model;

/// Type alias for character database model.
///
/// # Fields (from `entity::characters::Model`)
/// - `id` - Primary key
/// - `name` - Character name
/// - `homeworld` - Foreign key to the character's home planet
/// - `birth_year`, `height`, `weight`, `hair_color`, `eye_color` - Descriptive attributes
pub type CharacterModel = entity::characters::Model;

/// Type alias for planet database model.
pub type PlanetModel = entity::planets::Model;

/// Type alias for vehicle database model.
pub type VehicleModel = entity::vehicles::Model;

/// Type alias for favorite database model.
///
/// Represents the join between a user and one favorited character, planet, or vehicle.
/// The three target columns are nullable; rows written by the application populate
/// exactly one of them.
///
/// # Fields (from `entity::favorites::Model`)
/// - `id` - Primary key
/// - `user_id` - Foreign key to the owning user
/// - `favorite_characters` - Foreign key to a character (nullable)
/// - `favorite_planets` - Foreign key to a planet (nullable)
/// - `favorite_vehicles` - Foreign key to a vehicle (nullable)
pub type FavoriteModel = entity::favorites::Model;
