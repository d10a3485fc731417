use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250301_000001_planets::Planets, m20250301_000002_characters::Characters,
    m20250301_000003_vehicles::Vehicles, m20250301_000004_user::User,
};

static IDX_FAVORITES_USER_ID: &str = "idx_favorites_user_id";
static FK_FAVORITES_USER_ID: &str = "fk_favorites_user_id";
static FK_FAVORITES_CHARACTERS: &str = "fk_favorites_favorite_characters";
static FK_FAVORITES_PLANETS: &str = "fk_favorites_favorite_planets";
static FK_FAVORITES_VEHICLES: &str = "fk_favorites_favorite_vehicles";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorites::Id))
                    .col(integer(Favorites::UserId))
                    .col(integer_null(Favorites::FavoriteCharacters))
                    .col(integer_null(Favorites::FavoritePlanets))
                    .col(integer_null(Favorites::FavoriteVehicles))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_USER_ID)
                            .from(Favorites::Table, Favorites::UserId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_CHARACTERS)
                            .from(Favorites::Table, Favorites::FavoriteCharacters)
                            .to(Characters::Table, Characters::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_PLANETS)
                            .from(Favorites::Table, Favorites::FavoritePlanets)
                            .to(Planets::Table, Planets::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_VEHICLES)
                            .from(Favorites::Table, Favorites::FavoriteVehicles)
                            .to(Vehicles::Table, Vehicles::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITES_USER_ID)
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITES_USER_ID)
                    .table(Favorites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Favorites {
    Table,
    Id,
    UserId,
    FavoriteCharacters,
    FavoritePlanets,
    FavoriteVehicles,
}
