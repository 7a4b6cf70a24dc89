use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables, then call `build()` to create the in-memory database with those
/// tables.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Sector, User};
///
/// let test = TestBuilder::new()
///     .with_table(Sector)
///     .with_table(User)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Run the real migrations instead of deriving tables from entities.
    migrations: bool,
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            migrations: false,
            tables: Vec::new(),
        }
    }

    /// Creates the schema by running every migration, seed included.
    ///
    /// Use this when a test depends on something only the migrations create, such as the
    /// partial unique indexes on pending requests. Tables added with `with_table` are created
    /// afterwards.
    pub fn with_migrations(mut self) -> Self {
        self.migrations = true;
        self
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the sector, user and role tables, including role permissions.
    pub fn with_user_tables(self) -> Self {
        self.with_table(Sector)
            .with_table(User)
            .with_table(UserType)
            .with_table(TypeUser)
            .with_table(UserTypePermission)
    }

    /// Adds every table in dependency order.
    ///
    /// Covers users and roles, initiatives with their history, comments and cancellation
    /// requests, and prioritizations with their change requests.
    pub fn with_initiative_tables(self) -> Self {
        self.with_user_tables()
            .with_table(Initiative)
            .with_table(InitiativeHistory)
            .with_table(CancellationRequest)
            .with_table(Comment)
            .with_table(Prioritization)
            .with_table(PrioritizationChangeRequest)
    }

    /// Builds the test context with the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect, migrate or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        if self.migrations {
            setup.with_migrations().await?;
        }
        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
