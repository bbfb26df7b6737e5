use sea_orm_migration::prelude::*;

// One row is expected, but nothing enforces it: the service reads the
// newest row and updates it, or inserts when the table is empty.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(About::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(About::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(About::DescriptionFr).text().not_null().default(""))
                    .col(ColumnDef::new(About::DescriptionEn).text().not_null().default(""))
                    .col(count(About::ExperienceYears))
                    .col(count(About::ProjectsCount))
                    .col(count(About::ClientsCount))
                    .col(
                        ColumnDef::new(About::UpdatedAt)
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
            .drop_table(Table::drop().table(About::Table).to_owned())
            .await
    }
}

fn count(column: About) -> ColumnDef {
    ColumnDef::new(column.clone())
        .integer()
        .not_null()
        .default(0)
        .check(Expr::col(column).gte(0))
        .to_owned()
}

#[derive(DeriveIden, Clone)]
enum About {
    Table,
    Id,
    DescriptionFr,
    DescriptionEn,
    ExperienceYears,
    ProjectsCount,
    ClientsCount,
    UpdatedAt,
}
