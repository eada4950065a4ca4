use sea_orm_migration::prelude::*;

mod m20250301_000001_create_contact_messages;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(
            m20250301_000001_create_contact_messages::Migration,
        )]
    }

    fn migration_table_name() -> DynIden {
        Alias::new("contact_seaql_migrations").into_iden()
    }
}
