//! Re-exports of all entity types under their table names

pub use super::accounts_info::Entity as AccountsInfo;
pub use super::addresses_info::Entity as AddressesInfo;
pub use super::bank_details::Entity as BankDetails;
pub use super::company_profiles::Entity as CompanyProfiles;
pub use super::customer_suppliers::Entity as CustomerSuppliers;
pub use super::customers::Entity as Customers;
pub use super::declarations::Entity as Declarations;
pub use super::sales_info::Entity as SalesInfo;
pub use super::sales_persons::Entity as SalesPersons;
pub use super::suppliers::Entity as Suppliers;
