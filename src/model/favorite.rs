use serde::{Deserialize, Serialize};

/// Public projection of a favorite.
///
/// Only the owning user is exposed, the favorited target is not part of the listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
}

/// Request body for adding or removing a favorite
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteRequestDto {
    /// ID of the user the favorite belongs to
    pub user_id: i32,
}
