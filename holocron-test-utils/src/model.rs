//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main holocron crate so fixtures and tests
//! read the same way.

/// Type alias for user database model.
pub type UserModel = entity::user::Model;

/// Type alias for character database model.
pub type CharacterModel = entity::characters::Model;

/// Type alias for planet database model.
pub type PlanetModel = entity::planets::Model;

/// Type alias for vehicle database model.
pub type VehicleModel = entity::vehicles::Model;

/// Type alias for favorite database model.
pub type FavoriteModel = entity::favorites::Model;
