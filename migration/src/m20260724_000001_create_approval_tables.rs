//! Declaration, sales approval and accounts approval tables, one row of
//! each per submission.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Declarations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Declarations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Declarations::CustomerId).integer().not_null())
                    .col(ColumnDef::new(Declarations::EmpId).string_len(50).not_null())
                    .col(ColumnDef::new(Declarations::Designation).string().not_null())
                    // ISO date string, validated client side
                    .col(ColumnDef::new(Declarations::Date).string_len(10).not_null())
                    .col(ColumnDef::new(Declarations::Sign).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_declarations_customer_id")
                    .from(Declarations::Table, Declarations::CustomerId)
                    .to(Customers::Table, Customers::CustomerId)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SalesInfo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SalesInfo::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SalesInfo::CustomerId).integer().not_null())
                    .col(ColumnDef::new(SalesInfo::EmpId).string_len(50).not_null())
                    .col(
                        ColumnDef::new(SalesInfo::RequestingBranch)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SalesInfo::Division).string().not_null())
                    .col(ColumnDef::new(SalesInfo::CreditLimitReq).string().not_null())
                    .col(ColumnDef::new(SalesInfo::SalesHead).string().not_null())
                    .col(ColumnDef::new(SalesInfo::SalesHo).string().not_null())
                    .col(ColumnDef::new(SalesInfo::Estm).string().not_null())
                    .col(ColumnDef::new(SalesInfo::Requests).text().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_sales_info_customer_id")
                    .from(SalesInfo::Table, SalesInfo::CustomerId)
                    .to(Customers::Table, Customers::CustomerId)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AccountsInfo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AccountsInfo::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AccountsInfo::CustomerId).integer().not_null())
                    .col(ColumnDef::new(AccountsInfo::EmpId).string_len(50).not_null())
                    .col(ColumnDef::new(AccountsInfo::CodeNumber).string().not_null())
                    .col(ColumnDef::new(AccountsInfo::ExistingCode).string().null())
                    // Only populated when a credit limit was requested
                    .col(
                        ColumnDef::new(AccountsInfo::CreditLimitAmount)
                            .decimal_len(14, 2)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(AccountsInfo::CumulativeCreditLimit)
                            .decimal_len(14, 2)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(AccountsInfo::AccountRequest)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AccountsInfo::AccountRequestName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AccountsInfo::AccountAuthorized)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AccountsInfo::AccountAuthorizedName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AccountsInfo::AccountChecked)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AccountsInfo::AccountCheckedName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AccountsInfo::CreditApproved)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AccountsInfo::CreditLimit)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_accounts_info_customer_id")
                    .from(AccountsInfo::Table, AccountsInfo::CustomerId)
                    .to(Customers::Table, Customers::CustomerId)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AccountsInfo::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SalesInfo::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Declarations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Declarations {
    Table,
    Id,
    CustomerId,
    EmpId,
    Designation,
    Date,
    Sign,
}

#[derive(DeriveIden)]
enum SalesInfo {
    Table,
    Id,
    CustomerId,
    EmpId,
    RequestingBranch,
    Division,
    CreditLimitReq,
    SalesHead,
    SalesHo,
    Estm,
    Requests,
}

#[derive(DeriveIden)]
enum AccountsInfo {
    Table,
    Id,
    CustomerId,
    EmpId,
    CodeNumber,
    ExistingCode,
    CreditLimitAmount,
    CumulativeCreditLimit,
    AccountRequest,
    AccountRequestName,
    AccountAuthorized,
    AccountAuthorizedName,
    AccountChecked,
    AccountCheckedName,
    CreditApproved,
    CreditLimit,
}

#[derive(DeriveIden)]
enum Customers {
    Table,
    CustomerId,
}
