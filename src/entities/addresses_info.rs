//! SeaORM Entity for the addresses_info table
//!
//! Holds the registered address and, unless the submission flagged the
//! shipping address as identical, a second row for shipping.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "addresses_info")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub address_id: i32,
    pub customer_id: i32,
    /// "Registered" or "Shipping"
    pub address_type: String,
    #[sea_orm(column_type = "Text")]
    pub business_address: String,
    pub pin: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub designation: String,
    pub mobile: Option<String>,
    pub fax: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
