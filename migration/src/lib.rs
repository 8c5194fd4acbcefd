pub use sea_orm_migration::prelude::*;

mod m20260722_000001_create_sales_persons;
mod m20260722_000002_create_customers;
mod m20260723_000001_create_profile_tables;
mod m20260723_000002_create_suppliers;
mod m20260724_000001_create_approval_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260722_000001_create_sales_persons::Migration),
            Box::new(m20260722_000002_create_customers::Migration),
            Box::new(m20260723_000001_create_profile_tables::Migration),
            Box::new(m20260723_000002_create_suppliers::Migration),
            Box::new(m20260724_000001_create_approval_tables::Migration),
        ]
    }
}
