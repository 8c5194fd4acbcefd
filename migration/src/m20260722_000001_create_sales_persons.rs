use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Sales persons are keyed by their employee id and inserted
        // idempotently, so the natural key is the primary key.
        manager
            .create_table(
                Table::create()
                    .table(SalesPersons::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SalesPersons::EmpId)
                            .string_len(50)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SalesPersons::SalesName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SalesPersons::SalesEmail)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SalesPersons::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SalesPersons {
    Table,
    EmpId,
    SalesName,
    SalesEmail,
}
