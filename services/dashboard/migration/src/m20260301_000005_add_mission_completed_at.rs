use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Missions::Table)
                    .add_column_if_not_exists(
                        ColumnDef::new(Missions::CompletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Missions::Table)
                    .drop_column(Missions::CompletedAt)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum Missions {
    Table,
    CompletedAt,
}
