use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Suppliers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Suppliers::SupplierId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Suppliers::CustomerId).integer().not_null())
                    .col(ColumnDef::new(Suppliers::CompanyName).string().not_null())
                    .col(ColumnDef::new(Suppliers::Address).text().not_null())
                    .col(ColumnDef::new(Suppliers::Phone).string_len(15).not_null())
                    .col(ColumnDef::new(Suppliers::ContactPerson).string().not_null())
                    .col(ColumnDef::new(Suppliers::PaymentTerms).string().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_suppliers_customer_id")
                    .from(Suppliers::Table, Suppliers::CustomerId)
                    .to(Customers::Table, Customers::CustomerId)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        // Conflict target for the insert-or-touch upsert
        manager
            .create_index(
                Index::create()
                    .name("idx_suppliers_customer_company_unique")
                    .table(Suppliers::Table)
                    .col(Suppliers::CustomerId)
                    .col(Suppliers::CompanyName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CustomerSuppliers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CustomerSuppliers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CustomerSuppliers::CustomerId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CustomerSuppliers::SupplierId)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_customer_suppliers_customer_id")
                    .from(CustomerSuppliers::Table, CustomerSuppliers::CustomerId)
                    .to(Customers::Table, Customers::CustomerId)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_customer_suppliers_supplier_id")
                    .from(CustomerSuppliers::Table, CustomerSuppliers::SupplierId)
                    .to(Suppliers::Table, Suppliers::SupplierId)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CustomerSuppliers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Suppliers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Suppliers {
    Table,
    SupplierId,
    CustomerId,
    CompanyName,
    Address,
    Phone,
    ContactPerson,
    PaymentTerms,
}

#[derive(DeriveIden)]
enum CustomerSuppliers {
    Table,
    Id,
    CustomerId,
    SupplierId,
}

#[derive(DeriveIden)]
enum Customers {
    Table,
    CustomerId,
}
