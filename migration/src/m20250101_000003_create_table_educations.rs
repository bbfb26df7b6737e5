use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Educations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Educations::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Educations::Degree).text().not_null())
                    .col(ColumnDef::new(Educations::Institution).text().not_null().default(""))
                    .col(ColumnDef::new(Educations::Location).text().not_null().default(""))
                    .col(ColumnDef::new(Educations::Period).text().not_null().default(""))
                    .col(
                        ColumnDef::new(Educations::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Educations::Courses)
                            .array(ColumnType::Text)
                            .not_null()
                            .default(Expr::cust("'{}'::text[]")),
                    )
                    .col(
                        ColumnDef::new(Educations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Educations::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Educations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Educations {
    Table,
    Id,
    Degree,
    Institution,
    Location,
    Period,
    Description,
    Courses,
    CreatedAt,
    UpdatedAt,
}
