pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_sector_table;
mod m20260105_000002_create_user_table;
mod m20260105_000003_create_user_type_tables;
mod m20260105_000004_create_initiative_table;
mod m20260105_000005_create_initiative_history_table;
mod m20260105_000006_create_cancellation_request_table;
mod m20260105_000007_create_prioritization_tables;
mod m20260105_000008_create_comment_table;
mod m20260105_000009_seed_user_types_and_permissions;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_sector_table::Migration),
            Box::new(m20260105_000002_create_user_table::Migration),
            Box::new(m20260105_000003_create_user_type_tables::Migration),
            Box::new(m20260105_000004_create_initiative_table::Migration),
            Box::new(m20260105_000005_create_initiative_history_table::Migration),
            Box::new(m20260105_000006_create_cancellation_request_table::Migration),
            Box::new(m20260105_000007_create_prioritization_tables::Migration),
            Box::new(m20260105_000008_create_comment_table::Migration),
            Box::new(m20260105_000009_seed_user_types_and_permissions::Migration),
        ]
    }
}
