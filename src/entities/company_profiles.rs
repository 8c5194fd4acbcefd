//! SeaORM Entity for the company_profiles table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "company_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub customer_id: i32,
    pub partner_company_name: String,
    pub status: String,
    /// Turnover for fiscal year 2020-21
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub fy_20_21: Decimal,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub fy_21_22: Decimal,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub fy_22_23: Decimal,
    pub branches_name: Option<String>,
    pub sister_company_name: Option<String>,
    /// Base64 encoded company photo, at most 2 MiB decoded
    #[sea_orm(column_type = "Text")]
    pub photo: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
