pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_table_projects;
mod m20250101_000002_create_table_experiences;
mod m20250101_000003_create_table_educations;
mod m20250101_000004_create_table_about;
mod m20250101_000005_create_bucket_project_images;
mod m20250101_000006_add_row_level_security;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_table_projects::Migration),
            Box::new(m20250101_000002_create_table_experiences::Migration),
            Box::new(m20250101_000003_create_table_educations::Migration),
            Box::new(m20250101_000004_create_table_about::Migration),
            Box::new(m20250101_000005_create_bucket_project_images::Migration),
            Box::new(m20250101_000006_add_row_level_security::Migration),
        ]
    }
}
