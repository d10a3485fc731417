use serde::{Deserialize, Serialize};

/// Public projection of a user, the password is never serialized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub is_active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    /// ID of the character's home planet
    pub homeworld: i32,
    pub birth_year: i32,
    pub height: i32,
    pub weight: i32,
    pub hair_color: String,
    pub eye_color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub climate: String,
    pub gravity: i32,
    pub population: i32,
    pub orbital_period: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VehicleDto {
    pub id: i32,
    pub name: String,
    pub max_passengers: i32,
    pub cost_in_credits: i32,
    pub max_speed: Option<i32>,
}
