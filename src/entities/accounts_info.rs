//! SeaORM Entity for the accounts_info table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "accounts_info")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub customer_id: i32,
    pub emp_id: String,
    pub code_number: String,
    pub existing_code: Option<String>,
    /// Requested credit limit, only set when a limit was requested
    #[sea_orm(column_type = "Decimal(Some((14, 2)))", nullable)]
    pub credit_limit_amount: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))", nullable)]
    pub cumulative_credit_limit: Option<Decimal>,
    pub account_request: String,
    pub account_request_name: String,
    pub account_authorized: String,
    pub account_authorized_name: String,
    pub account_checked: String,
    pub account_checked_name: String,
    pub credit_approved: String,
    /// Approved credit limit
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub credit_limit: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
