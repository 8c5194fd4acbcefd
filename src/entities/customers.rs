//! SeaORM Entity for the customers table
//!
//! The anchor row of a submission; every other per-submission table keys
//! off customer_id.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub customer_id: i32,
    /// Sales person who filed the submission
    pub emp_id: String,
    pub customer_name: String,
    pub company_name: String,
    pub commercial_name: Option<String>,
    pub customer_address: String,
    pub customer_type: String,
    /// Free text, only set when customer_type is "Others"
    pub other_customer_type: Option<String>,
    pub category: String,
    /// Unique across all customers; a duplicate is a 409 at the API
    pub pan: String,
    /// 15 chars, embeds the PAN at positions 3-12
    pub gst: String,
    pub year_incorporation: i32,
    pub area: String,
    pub range: String,
    /// ISO date string of the HBL association
    pub association_hbl: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
