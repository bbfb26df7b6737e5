use sea_orm_migration::prelude::*;

const TABLES: [&str; 4] = ["projects", "experiences", "educations", "about"];

/// Anyone may read the content tables; only signed-in users may change them.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for table in TABLES {
            db.execute_unprepared(&format!(
                r#"
                ALTER TABLE {table} ENABLE ROW LEVEL SECURITY;

                CREATE POLICY "{table}_public_read" ON {table}
                FOR SELECT USING (true);

                CREATE POLICY "{table}_authenticated_write" ON {table}
                FOR ALL TO authenticated USING (true) WITH CHECK (true);
                "#
            ))
            .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for table in TABLES {
            db.execute_unprepared(&format!(
                r#"
                DROP POLICY IF EXISTS "{table}_public_read" ON {table};
                DROP POLICY IF EXISTS "{table}_authenticated_write" ON {table};
                ALTER TABLE {table} DISABLE ROW LEVEL SECURITY;
                "#
            ))
            .await?;
        }

        Ok(())
    }
}
