use sea_orm_migration::prelude::*;

/// Public bucket for project cover images. Objects are readable by anyone
/// through the public URL; uploads and deletes need a signed-in user.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(
            r#"
            INSERT INTO storage.buckets (id, name, public)
            VALUES ('project-images', 'project-images', true)
            ON CONFLICT (id) DO NOTHING;
            "#,
        )
        .await?;

        db.execute_unprepared(
            r#"
            CREATE POLICY "project_images_public_read"
            ON storage.objects FOR SELECT
            USING (bucket_id = 'project-images');

            CREATE POLICY "project_images_authenticated_write"
            ON storage.objects FOR INSERT TO authenticated
            WITH CHECK (bucket_id = 'project-images');

            CREATE POLICY "project_images_authenticated_delete"
            ON storage.objects FOR DELETE TO authenticated
            USING (bucket_id = 'project-images');
            "#,
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(
            r#"
            DROP POLICY IF EXISTS "project_images_public_read" ON storage.objects;
            DROP POLICY IF EXISTS "project_images_authenticated_write" ON storage.objects;
            DROP POLICY IF EXISTS "project_images_authenticated_delete" ON storage.objects;
            "#,
        )
        .await?;

        db.execute_unprepared("DELETE FROM storage.buckets WHERE id = 'project-images';")
            .await?;

        Ok(())
    }
}
