pub use sea_orm_migration::prelude::*;

mod m20251017_000001_users;
mod m20251017_000002_events;
mod m20251017_000003_comments;


pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251017_000001_users::Migration),
            Box::new(m20251017_000002_events::Migration),
            Box::new(m20251017_000003_comments::Migration),
        ]
    }
}
