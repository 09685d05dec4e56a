use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(collab_dashboard_migration::Migrator).await;
}
