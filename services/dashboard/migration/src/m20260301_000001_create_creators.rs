use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Creators::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Creators::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Creators::UserId).uuid().null().unique_key())
                    .col(ColumnDef::new(Creators::Name).string().not_null())
                    .col(ColumnDef::new(Creators::Email).string().not_null())
                    .col(
                        ColumnDef::new(Creators::Categories)
                            .array(ColumnType::Text)
                            .not_null()
                            .default(Expr::cust("'{}'")),
                    )
                    .col(ColumnDef::new(Creators::Bio).text().not_null().default(""))
                    .col(ColumnDef::new(Creators::PhotoUrl).string().not_null().default(""))
                    .col(ColumnDef::new(Creators::Rating).double().not_null().default(0.0))
                    .col(
                        ColumnDef::new(Creators::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // `category = ANY(categories)` lookups.
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE INDEX IF NOT EXISTS idx_creators_categories ON creators USING GIN (categories)",
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Creators::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Creators {
    Table,
    Id,
    UserId,
    Name,
    Email,
    Categories,
    Bio,
    PhotoUrl,
    Rating,
    CreatedAt,
}
