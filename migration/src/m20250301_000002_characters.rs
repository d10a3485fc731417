use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000001_planets::Planets;

static FK_CHARACTERS_HOMEWORLD: &str = "fk_characters_homeworld";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline so the table can also be created on SQLite,
        // which does not support adding constraints with ALTER TABLE.
        manager
            .create_table(
                Table::create()
                    .table(Characters::Table)
                    .if_not_exists()
                    .col(pk_auto(Characters::Id))
                    .col(string_len(Characters::Name, 250))
                    .col(integer(Characters::Homeworld))
                    .col(integer(Characters::BirthYear))
                    .col(integer(Characters::Height))
                    .col(integer(Characters::Weight))
                    .col(string(Characters::HairColor))
                    .col(string(Characters::EyeColor))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CHARACTERS_HOMEWORLD)
                            .from(Characters::Table, Characters::Homeworld)
                            .to(Planets::Table, Planets::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Characters::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Characters {
    Table,
    Id,
    Name,
    Homeworld,
    BirthYear,
    Height,
    Weight,
    HairColor,
    EyeColor,
}
