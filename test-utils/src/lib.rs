//! Initiatives Test Utils
//!
//! Shared testing utilities for the initiatives backend. Provides a builder for test contexts
//! backed by in-memory SQLite databases with the required table schemas, plus factories for
//! inserting rows with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Row factories for every table
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn lists_sectors() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_initiative_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
