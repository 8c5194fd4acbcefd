//! Per-customer profile tables: company profile, addresses and bank details.
//! All three hang off customers.customer_id and are written in the same
//! transaction as the customer row.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CompanyProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CompanyProfiles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CompanyProfiles::CustomerId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CompanyProfiles::PartnerCompanyName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CompanyProfiles::Status).string().not_null())
                    .col(
                        ColumnDef::new(CompanyProfiles::Fy2021)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CompanyProfiles::Fy2122)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CompanyProfiles::Fy2223)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(CompanyProfiles::BranchesName).string().null())
                    .col(
                        ColumnDef::new(CompanyProfiles::SisterCompanyName)
                            .string()
                            .null(),
                    )
                    // Base64 payload, capped at 2 MiB decoded by the service
                    .col(ColumnDef::new(CompanyProfiles::Photo).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_company_profiles_customer_id")
                    .from(CompanyProfiles::Table, CompanyProfiles::CustomerId)
                    .to(Customers::Table, Customers::CustomerId)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AddressesInfo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AddressesInfo::AddressId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AddressesInfo::CustomerId)
                            .integer()
                            .not_null(),
                    )
                    // Either "Registered" or "Shipping"; the shipping row is
                    // omitted when both addresses are the same
                    .col(
                        ColumnDef::new(AddressesInfo::AddressType)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AddressesInfo::BusinessAddress)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AddressesInfo::Pin).string_len(10).not_null())
                    .col(ColumnDef::new(AddressesInfo::City).string().not_null())
                    .col(ColumnDef::new(AddressesInfo::State).string().not_null())
                    .col(ColumnDef::new(AddressesInfo::Country).string().not_null())
                    .col(
                        ColumnDef::new(AddressesInfo::ContactPerson)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AddressesInfo::Phone)
                            .string_len(15)
                            .not_null(),
                    )
                    .col(ColumnDef::new(AddressesInfo::Email).string().not_null())
                    .col(ColumnDef::new(AddressesInfo::Designation).string().not_null())
                    .col(ColumnDef::new(AddressesInfo::Mobile).string_len(15).null())
                    .col(ColumnDef::new(AddressesInfo::Fax).string_len(20).null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_addresses_info_customer_id")
                    .from(AddressesInfo::Table, AddressesInfo::CustomerId)
                    .to(Customers::Table, Customers::CustomerId)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BankDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BankDetails::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BankDetails::CustomerId).integer().not_null())
                    .col(ColumnDef::new(BankDetails::BankName).string().not_null())
                    .col(
                        ColumnDef::new(BankDetails::AccNumber)
                            .string_len(18)
                            .not_null(),
                    )
                    .col(ColumnDef::new(BankDetails::AccType).string().not_null())
                    .col(ColumnDef::new(BankDetails::BranchName).string().not_null())
                    .col(ColumnDef::new(BankDetails::Ifsc).string_len(11).not_null())
                    .col(ColumnDef::new(BankDetails::Limits).string().null())
                    .col(
                        ColumnDef::new(BankDetails::SecurityCheque)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(BankDetails::PdcCheque).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_bank_details_customer_id")
                    .from(BankDetails::Table, BankDetails::CustomerId)
                    .to(Customers::Table, Customers::CustomerId)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BankDetails::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AddressesInfo::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CompanyProfiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CompanyProfiles {
    Table,
    Id,
    CustomerId,
    PartnerCompanyName,
    Status,
    #[sea_orm(iden = "fy_20_21")]
    Fy2021,
    #[sea_orm(iden = "fy_21_22")]
    Fy2122,
    #[sea_orm(iden = "fy_22_23")]
    Fy2223,
    BranchesName,
    SisterCompanyName,
    Photo,
}

#[derive(DeriveIden)]
enum AddressesInfo {
    Table,
    AddressId,
    CustomerId,
    AddressType,
    BusinessAddress,
    Pin,
    City,
    State,
    Country,
    ContactPerson,
    Phone,
    Email,
    Designation,
    Mobile,
    Fax,
}

#[derive(DeriveIden)]
enum BankDetails {
    Table,
    Id,
    CustomerId,
    BankName,
    AccNumber,
    AccType,
    BranchName,
    Ifsc,
    Limits,
    SecurityCheque,
    PdcCheque,
}

#[derive(DeriveIden)]
enum Customers {
    Table,
    CustomerId,
}
