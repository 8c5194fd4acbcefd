//! SeaORM Entity for the suppliers table
//!
//! Deduplicated per customer by (customer_id, company_name); a repeated
//! name is upserted rather than duplicated.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "suppliers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub supplier_id: i32,
    pub customer_id: i32,
    pub company_name: String,
    #[sea_orm(column_type = "Text")]
    pub address: String,
    pub phone: String,
    pub contact_person: String,
    pub payment_terms: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
