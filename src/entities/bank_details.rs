//! SeaORM Entity for the bank_details table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "bank_details")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub customer_id: i32,
    pub bank_name: String,
    pub acc_number: String,
    pub acc_type: String,
    pub branch_name: String,
    pub ifsc: String,
    pub limits: Option<String>,
    pub security_cheque: String,
    pub pdc_cheque: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
