pub use sea_orm_migration::prelude::*;

mod m20260701_000001_initial;
mod m20260715_000001_add_lookup_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260701_000001_initial::Migration),
            Box::new(m20260715_000001_add_lookup_indexes::Migration),
        ]
    }
}
