use sea_orm_migration::prelude::*;

mod m20260301_000001_create_creators;
mod m20260301_000002_create_missions;
mod m20260301_000003_create_payments;
mod m20260301_000004_create_activities;
mod m20260301_000005_add_mission_completed_at;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_creators::Migration),
            Box::new(m20260301_000002_create_missions::Migration),
            Box::new(m20260301_000003_create_payments::Migration),
            Box::new(m20260301_000004_create_activities::Migration),
            Box::new(m20260301_000005_add_mission_completed_at::Migration),
        ]
    }
}
