use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Hospital};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Hospital)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements, executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements, executed after every table exists.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds a raw index statement to run after table creation.
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds the user, hospital and hospital admin tables.
    ///
    /// These are the tables every domain operation resolves actors and hospitals from.
    pub fn with_core_tables(self) -> Self {
        self.with_table(User)
            .with_table(Hospital)
            .with_table(HospitalAdmin)
    }

    /// Adds all tables required for blood request and matching operations.
    ///
    /// Includes the core tables plus BloodRequest, BloodRequestMatch and Notification.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_request_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_request_tables(self) -> Self {
        self.with_core_tables()
            .with_table(BloodRequest)
            .with_table(BloodRequestMatch)
            .with_table(Notification)
    }

    /// Adds all tables required for inventory operations.
    ///
    /// Includes the core tables, BloodInventory with its unique (hospital_id, blood_type)
    /// index, and Notification for low-stock alerts.
    pub fn with_inventory_tables(self) -> Self {
        self.with_core_tables()
            .with_table(BloodInventory)
            .with_table(Notification)
            .with_index(
                Index::create()
                    .name("idx_blood_inventory_hospital_blood_type")
                    .table(BloodInventory)
                    .col(entity::blood_inventory::Column::HospitalId)
                    .col(entity::blood_inventory::Column::BloodType)
                    .unique()
                    .to_owned(),
            )
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements followed by the CREATE INDEX statements.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
