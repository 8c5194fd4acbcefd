use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Customers::CustomerId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Customers::EmpId).string_len(50).not_null())
                    .col(ColumnDef::new(Customers::CustomerName).string().not_null())
                    .col(ColumnDef::new(Customers::CompanyName).string().not_null())
                    .col(ColumnDef::new(Customers::CommercialName).string().null())
                    .col(ColumnDef::new(Customers::CustomerAddress).text().not_null())
                    .col(ColumnDef::new(Customers::CustomerType).string().not_null())
                    .col(ColumnDef::new(Customers::OtherCustomerType).string().null())
                    .col(ColumnDef::new(Customers::Category).string().not_null())
                    // Duplicate PAN submissions are rejected at the store level
                    .col(
                        ColumnDef::new(Customers::Pan)
                            .string_len(10)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Customers::Gst).string_len(15).not_null())
                    .col(
                        ColumnDef::new(Customers::YearIncorporation)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Customers::Area).string().not_null())
                    .col(ColumnDef::new(Customers::Range).string().not_null())
                    .col(
                        ColumnDef::new(Customers::AssociationHbl)
                            .string_len(10)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_customers_emp_id")
                    .from(Customers::Table, Customers::EmpId)
                    .to(SalesPersons::Table, SalesPersons::EmpId)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        // Index for querying submissions by sales person
        manager
            .create_index(
                Index::create()
                    .name("idx_customers_emp_id")
                    .table(Customers::Table)
                    .col(Customers::EmpId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Customers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Customers {
    Table,
    CustomerId,
    EmpId,
    CustomerName,
    CompanyName,
    CommercialName,
    CustomerAddress,
    CustomerType,
    OtherCustomerType,
    Category,
    Pan,
    Gst,
    YearIncorporation,
    Area,
    Range,
    AssociationHbl,
}

#[derive(DeriveIden)]
enum SalesPersons {
    Table,
    EmpId,
}
