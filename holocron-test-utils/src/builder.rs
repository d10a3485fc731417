//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// reference data fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_catalog_tables: bool,

    // Database fixtures to insert
    planets: Vec<i32>,
    characters: Vec<(i32, i32)>, // (character_id, planet_id)
    vehicles: Vec<i32>,
    users: Vec<i32>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_catalog_tables: false,
            planets: Vec::new(),
            characters: Vec::new(),
            vehicles: Vec::new(),
            users: Vec::new(),
        }
    }

    /// Add every catalog table to the test database.
    ///
    /// Creates Planets, Characters, Vehicles, User, and Favorites in foreign key order.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holocron_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holocron_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Planets)
    ///     .with_table(Characters)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert mock planet into database.
    pub fn with_mock_planet(mut self, planet_id: i32) -> Self {
        self.planets.push(planet_id);
        self
    }

    /// Insert mock character into database.
    ///
    /// The homeworld planet is created automatically if it does not already exist.
    ///
    /// # Arguments
    /// - `character_id` - Primary key of the character
    /// - `planet_id` - Primary key of the character's homeworld
    pub fn with_mock_character(mut self, character_id: i32, planet_id: i32) -> Self {
        self.characters.push((character_id, planet_id));
        self
    }

    /// Insert mock vehicle into database.
    pub fn with_mock_vehicle(mut self, vehicle_id: i32) -> Self {
        self.vehicles.push(vehicle_id);
        self
    }

    /// Insert mock user into database.
    pub fn with_mock_user(mut self, user_id: i32) -> Self {
        self.users.push(user_id);
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (catalog tables if specified, then custom tables)
    /// 2. Inserts database fixtures (planets, characters, vehicles, users)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_catalog_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Planets),
                schema.create_table_from_entity(entity::prelude::Characters),
                schema.create_table_from_entity(entity::prelude::Vehicles),
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Favorites),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for planet_id in self.planets {
            setup.catalog().insert_mock_planet(planet_id).await?;
        }

        for (character_id, planet_id) in self.characters {
            setup
                .catalog()
                .insert_mock_character(character_id, planet_id)
                .await?;
        }

        for vehicle_id in self.vehicles {
            setup.catalog().insert_mock_vehicle(vehicle_id).await?;
        }

        for user_id in self.users {
            setup.catalog().insert_mock_user(user_id).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
