//! SeaORM Entity for the sales_persons table
//!
//! One row per sales employee, inserted on first sight and never updated.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "sales_persons")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub emp_id: String,
    pub sales_name: String,
    pub sales_email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
