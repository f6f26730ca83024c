pub use sea_orm_migration::prelude::*;

mod m20250710_000001_create_core_tables;
mod m20250801_000001_create_banned_users;
mod m20250812_000001_add_status_to_offers;
mod m20250901_000001_create_ea_player_mappings;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250710_000001_create_core_tables::Migration),
            Box::new(m20250801_000001_create_banned_users::Migration),
            Box::new(m20250812_000001_add_status_to_offers::Migration),
            Box::new(m20250901_000001_create_ea_player_mappings::Migration),
        ]
    }
}
