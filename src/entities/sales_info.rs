//! SeaORM Entity for the sales_info table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "sales_info")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub customer_id: i32,
    pub emp_id: String,
    pub requesting_branch: String,
    pub division: String,
    pub credit_limit_req: String,
    pub sales_head: String,
    pub sales_ho: String,
    pub estm: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub requests: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
