use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Missions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Missions::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Missions::Title).string().not_null())
                    .col(ColumnDef::new(Missions::Kind).string().not_null())
                    .col(ColumnDef::new(Missions::BrandId).uuid().not_null())
                    .col(ColumnDef::new(Missions::BrandName).string().not_null())
                    .col(
                        ColumnDef::new(Missions::AssignedCreatorIds)
                            .array(ColumnType::Uuid)
                            .not_null()
                            .default(Expr::cust("'{}'")),
                    )
                    .col(
                        ColumnDef::new(Missions::Deadline)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Missions::Budget).big_integer().not_null())
                    .col(
                        ColumnDef::new(Missions::Status)
                            .string_len(16)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Missions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Missions::Table)
                    .col(Missions::BrandId)
                    .col(Missions::CreatedAt)
                    .name("idx_missions_brand_id_created_at")
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                "CREATE INDEX IF NOT EXISTS idx_missions_assigned_creator_ids \
                 ON missions USING GIN (assigned_creator_ids)",
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Missions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Missions {
    Table,
    Id,
    Title,
    Kind,
    BrandId,
    BrandName,
    AssignedCreatorIds,
    Deadline,
    Budget,
    Status,
    CreatedAt,
}
