//! Submission persistence service
//!
//! Validates an onboarding payload and writes it across the intake tables
//! in one transaction. The write order is a fixed plan so the parent/child
//! dependencies and the rollback boundary stay explicit and testable.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use rust_decimal::Decimal;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr, TransactionTrait,
};

use crate::entities::{
    accounts_info, addresses_info, bank_details, company_profiles, customer_suppliers, customers,
    declarations, prelude::*, sales_info, sales_persons, suppliers,
};
use crate::models::submission::SubmissionPayload;

/// Decoded attachment cap, shared with the client side check.
pub const MAX_ATTACHMENT_BYTES: usize = 2 * 1024 * 1024;

pub const ADDRESS_TYPE_REGISTERED: &str = "Registered";
pub const ADDRESS_TYPE_SHIPPING: &str = "Shipping";

#[derive(Debug)]
pub enum SubmissionError {
    /// Payload failed validation or numeric parsing; the message is sent
    /// to the client verbatim
    Invalid(String),
    /// A customer with this PAN already exists
    DuplicatePan,
    /// Underlying store failure
    Db(DbErr),
}

impl std::fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionError::Invalid(msg) => write!(f, "{msg}"),
            SubmissionError::DuplicatePan => write!(f, "PAN number already exists"),
            SubmissionError::Db(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SubmissionError {}

impl From<DbErr> for SubmissionError {
    fn from(err: DbErr) -> Self {
        // The only unique constraint still reachable past the upserts is
        // the PAN index, so a violation here is a concurrent duplicate
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => SubmissionError::DuplicatePan,
            _ => SubmissionError::Db(err),
        }
    }
}

/// Numeric fields parsed out of the string payload before any write.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedNumbers {
    pub year_incorporation: i32,
    pub fy_20_21: Decimal,
    pub fy_21_22: Decimal,
    pub fy_22_23: Decimal,
    /// Set only when a credit limit was requested
    pub credit_limit_amount: Option<Decimal>,
    pub cumulative_credit_limit: Option<Decimal>,
    pub approved_credit_limit: Decimal,
}

/// One step of the write plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertStep {
    SalesPerson,
    Customer,
    CompanyProfile,
    RegisteredAddress,
    ShippingAddress,
    BankDetails,
    Suppliers,
    SupplierLinks,
    Declaration,
    SalesInfo,
    AccountsInfo,
}

/// Fixed write order of one submission. The customer row precedes every
/// child table and the supplier rows precede their link rows.
pub const INSERT_PLAN: &[InsertStep] = &[
    InsertStep::SalesPerson,
    InsertStep::Customer,
    InsertStep::CompanyProfile,
    InsertStep::RegisteredAddress,
    InsertStep::ShippingAddress,
    InsertStep::BankDetails,
    InsertStep::Suppliers,
    InsertStep::SupplierLinks,
    InsertStep::Declaration,
    InsertStep::SalesInfo,
    InsertStep::AccountsInfo,
];

/// Validate and persist one submission, returning the new customer id.
pub async fn submit(
    db: &DatabaseConnection,
    payload: &SubmissionPayload,
) -> Result<i32, SubmissionError> {
    validate_payload(payload)?;
    let numbers = parse_numbers(payload)?;

    let txn = db.begin().await?;
    match run_insert_plan(&txn, payload, &numbers).await {
        Ok(customer_id) => {
            txn.commit().await?;
            tracing::info!(customer_id, "onboarding submission stored");
            Ok(customer_id)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::warn!("rollback after failed submission also failed: {rollback_err}");
            }
            Err(err)
        }
    }
}

/// Server side validation. Checks run in a fixed order so the first
/// failure decides the message.
pub fn validate_payload(payload: &SubmissionPayload) -> Result<(), SubmissionError> {
    let required = [
        &payload.emp_id,
        &payload.customer_name,
        &payload.company_name,
        &payload.pan,
        &payload.gst,
        &payload.supplier1_name,
        &payload.supplier2_name,
    ];
    if required.iter().any(|field| field.is_empty()) {
        return Err(SubmissionError::Invalid("Missing required fields".into()));
    }

    if let Some(photo) = payload.photo.as_deref().filter(|photo| !photo.is_empty()) {
        // The stored value is the base64 text itself; decoding is only for
        // the size cap. Undecodable input is capped on its estimated size.
        let decoded_len = STANDARD
            .decode(photo)
            .map(|bytes| bytes.len())
            .unwrap_or_else(|_| base64::decoded_len_estimate(photo.len()));
        if decoded_len > MAX_ATTACHMENT_BYTES {
            return Err(SubmissionError::Invalid("Photo size exceeds 2MB".into()));
        }
    }

    if payload.supplier1_name == payload.supplier2_name {
        return Err(SubmissionError::Invalid(
            "Supplier names must be distinct".into(),
        ));
    }
    if payload.photo.as_deref().map_or(true, str::is_empty) {
        return Err(SubmissionError::Invalid("Photo is required".into()));
    }
    if payload.sign.as_deref().map_or(true, str::is_empty) {
        return Err(SubmissionError::Invalid("Sign is required".into()));
    }
    Ok(())
}

/// Parse every numeric field up front; nothing is written when any of
/// them fails.
pub fn parse_numbers(payload: &SubmissionPayload) -> Result<ParsedNumbers, SubmissionError> {
    let year_incorporation = payload
        .year_incorporation
        .trim()
        .parse::<i32>()
        .map_err(|_| SubmissionError::Invalid("Invalid year_incorporation".into()))?;

    let (fy_20_21, fy_21_22, fy_22_23) = match (
        payload.fy_20_21.trim().parse::<Decimal>(),
        payload.fy_21_22.trim().parse::<Decimal>(),
        payload.fy_22_23.trim().parse::<Decimal>(),
    ) {
        (Ok(first), Ok(second), Ok(third)) => (first, second, third),
        _ => {
            return Err(SubmissionError::Invalid(
                "Invalid fiscal year turnover".into(),
            ));
        }
    };

    // The credit pair is only meaningful when a limit was requested;
    // otherwise both columns stay NULL whatever the payload carries
    let requested_credit = payload.credit_limit_radio.as_deref() == Some("yes");
    let (credit_limit_amount, cumulative_credit_limit) = if requested_credit {
        match (
            payload.credit_limit_amount.trim().parse::<Decimal>(),
            payload.cumulative.trim().parse::<Decimal>(),
        ) {
            (Ok(amount), Ok(cumulative)) => (Some(amount), Some(cumulative)),
            _ => {
                return Err(SubmissionError::Invalid(
                    "Invalid credit limit amounts".into(),
                ));
            }
        }
    } else {
        (None, None)
    };

    let approved_credit_limit = payload
        .credit_limit
        .trim()
        .parse::<Decimal>()
        .map_err(|_| SubmissionError::Invalid("Invalid approved credit limit".into()))?;

    Ok(ParsedNumbers {
        year_incorporation,
        fy_20_21,
        fy_21_22,
        fy_22_23,
        credit_limit_amount,
        cumulative_credit_limit,
        approved_credit_limit,
    })
}

struct PlanOutput {
    customer_id: Option<i32>,
    supplier_ids: Option<(i32, i32)>,
}

impl PlanOutput {
    fn customer_id(&self) -> Result<i32, DbErr> {
        self.customer_id.ok_or_else(|| {
            DbErr::Custom("insert plan ran a child step before the customer row".into())
        })
    }
}

async fn run_insert_plan(
    txn: &DatabaseTransaction,
    payload: &SubmissionPayload,
    numbers: &ParsedNumbers,
) -> Result<i32, SubmissionError> {
    let mut out = PlanOutput {
        customer_id: None,
        supplier_ids: None,
    };

    for step in INSERT_PLAN {
        match step {
            InsertStep::SalesPerson => insert_sales_person(txn, payload).await?,
            InsertStep::Customer => {
                out.customer_id = Some(insert_customer(txn, payload, numbers).await?);
            }
            InsertStep::CompanyProfile => {
                insert_company_profile(txn, out.customer_id()?, payload, numbers).await?;
            }
            InsertStep::RegisteredAddress => {
                insert_address(txn, out.customer_id()?, registered_row(payload)).await?;
            }
            InsertStep::ShippingAddress => {
                // A mirrored shipping address stores no second row
                if !payload.different_shipping {
                    insert_address(txn, out.customer_id()?, shipping_row(payload)).await?;
                }
            }
            InsertStep::BankDetails => {
                insert_bank_details(txn, out.customer_id()?, payload).await?;
            }
            InsertStep::Suppliers => {
                out.supplier_ids = Some(insert_suppliers(txn, out.customer_id()?, payload).await?);
            }
            InsertStep::SupplierLinks => {
                let (first, second) = out.supplier_ids.ok_or_else(|| {
                    DbErr::Custom("insert plan linked suppliers before inserting them".into())
                })?;
                insert_supplier_link(txn, out.customer_id()?, first).await?;
                insert_supplier_link(txn, out.customer_id()?, second).await?;
            }
            InsertStep::Declaration => {
                insert_declaration(txn, out.customer_id()?, payload).await?;
            }
            InsertStep::SalesInfo => {
                insert_sales_info(txn, out.customer_id()?, payload).await?;
            }
            InsertStep::AccountsInfo => {
                insert_accounts_info(txn, out.customer_id()?, payload, numbers).await?;
            }
        }
    }

    Ok(out.customer_id()?)
}

async fn insert_sales_person(
    txn: &DatabaseTransaction,
    payload: &SubmissionPayload,
) -> Result<(), DbErr> {
    let model = sales_persons::ActiveModel {
        emp_id: Set(payload.emp_id.clone()),
        sales_name: Set(payload.sales_name.clone()),
        sales_email: Set(payload.sales_email.clone()),
    };
    // Repeat submissions by the same sales person keep the existing row
    SalesPersons::insert(model)
        .on_conflict(
            OnConflict::column(sales_persons::Column::EmpId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(txn)
        .await?;
    Ok(())
}

async fn insert_customer(
    txn: &DatabaseTransaction,
    payload: &SubmissionPayload,
    numbers: &ParsedNumbers,
) -> Result<i32, SubmissionError> {
    // Deterministic duplicate answer; the unique index still backs this
    // up against a concurrent submission of the same PAN
    let existing = Customers::find()
        .filter(customers::Column::Pan.eq(payload.pan.as_str()))
        .one(txn)
        .await?;
    if existing.is_some() {
        return Err(SubmissionError::DuplicatePan);
    }

    let model = customers::ActiveModel {
        emp_id: Set(payload.emp_id.clone()),
        customer_name: Set(payload.customer_name.clone()),
        company_name: Set(payload.company_name.clone()),
        commercial_name: Set(empty_to_none(&payload.commercial_name)),
        customer_address: Set(payload.customer_address.clone()),
        customer_type: Set(payload.customer_type.clone()),
        other_customer_type: Set(empty_to_none(&payload.other_customer_type)),
        category: Set(payload.category.clone()),
        pan: Set(payload.pan.clone()),
        gst: Set(payload.gst.clone()),
        year_incorporation: Set(numbers.year_incorporation),
        area: Set(payload.area.clone()),
        range: Set(payload.range.clone()),
        association_hbl: Set(payload.association_hbl.clone()),
        ..Default::default()
    };
    let result = Customers::insert(model).exec(txn).await?;
    Ok(result.last_insert_id)
}

async fn insert_company_profile(
    txn: &DatabaseTransaction,
    customer_id: i32,
    payload: &SubmissionPayload,
    numbers: &ParsedNumbers,
) -> Result<(), DbErr> {
    // validate_payload guarantees the photo is present by this point
    let model = company_profiles::ActiveModel {
        customer_id: Set(customer_id),
        partner_company_name: Set(payload.partner_company_name.clone()),
        status: Set(payload.status.clone()),
        fy_20_21: Set(numbers.fy_20_21),
        fy_21_22: Set(numbers.fy_21_22),
        fy_22_23: Set(numbers.fy_22_23),
        branches_name: Set(empty_to_none(&payload.branches_name)),
        sister_company_name: Set(empty_to_none(&payload.sister_company_name)),
        photo: Set(payload.photo.clone().unwrap_or_default()),
        ..Default::default()
    };
    CompanyProfiles::insert(model)
        .exec_without_returning(txn)
        .await?;
    Ok(())
}

struct AddressRow<'a> {
    address_type: &'a str,
    business_address: &'a str,
    pin: &'a str,
    city: &'a str,
    state: &'a str,
    country: &'a str,
    contact_person: &'a str,
    phone: &'a str,
    email: &'a str,
    designation: &'a str,
    mobile: &'a str,
    fax: &'a str,
}

fn registered_row(payload: &SubmissionPayload) -> AddressRow<'_> {
    let address = &payload.address1;
    AddressRow {
        address_type: ADDRESS_TYPE_REGISTERED,
        business_address: &address.business_address1,
        pin: &address.pin1,
        city: &address.city1,
        state: &address.state1,
        country: &address.country1,
        contact_person: &address.contact1,
        phone: &address.phone1,
        email: &address.email_id1,
        designation: &address.designation1,
        mobile: &address.mobile1,
        fax: &address.fax1,
    }
}

fn shipping_row(payload: &SubmissionPayload) -> AddressRow<'_> {
    let address = &payload.address2;
    AddressRow {
        address_type: ADDRESS_TYPE_SHIPPING,
        business_address: &address.business_address2,
        pin: &address.pin2,
        city: &address.city2,
        state: &address.state2,
        country: &address.country2,
        contact_person: &address.contact2,
        phone: &address.phone2,
        email: &address.email_id2,
        designation: &address.designation2,
        mobile: &address.mobile2,
        fax: &address.fax2,
    }
}

async fn insert_address(
    txn: &DatabaseTransaction,
    customer_id: i32,
    row: AddressRow<'_>,
) -> Result<(), DbErr> {
    let model = addresses_info::ActiveModel {
        customer_id: Set(customer_id),
        address_type: Set(row.address_type.to_owned()),
        business_address: Set(row.business_address.to_owned()),
        pin: Set(row.pin.to_owned()),
        city: Set(row.city.to_owned()),
        state: Set(row.state.to_owned()),
        country: Set(row.country.to_owned()),
        contact_person: Set(row.contact_person.to_owned()),
        phone: Set(row.phone.to_owned()),
        email: Set(row.email.to_owned()),
        designation: Set(row.designation.to_owned()),
        mobile: Set(empty_to_none(row.mobile)),
        fax: Set(empty_to_none(row.fax)),
        ..Default::default()
    };
    AddressesInfo::insert(model)
        .exec_without_returning(txn)
        .await?;
    Ok(())
}

async fn insert_bank_details(
    txn: &DatabaseTransaction,
    customer_id: i32,
    payload: &SubmissionPayload,
) -> Result<(), DbErr> {
    let model = bank_details::ActiveModel {
        customer_id: Set(customer_id),
        bank_name: Set(payload.bank_name.clone()),
        acc_number: Set(payload.acc_number.clone()),
        acc_type: Set(payload.acc_type.clone()),
        branch_name: Set(payload.branch_name.clone()),
        ifsc: Set(payload.ifsc.clone()),
        limits: Set(empty_to_none(&payload.limits)),
        security_cheque: Set(payload.security_cheque.clone()),
        pdc_cheque: Set(payload.pdc_cheque.clone()),
        ..Default::default()
    };
    BankDetails::insert(model)
        .exec_without_returning(txn)
        .await?;
    Ok(())
}

async fn insert_suppliers(
    txn: &DatabaseTransaction,
    customer_id: i32,
    payload: &SubmissionPayload,
) -> Result<(i32, i32), DbErr> {
    let first = insert_supplier(
        txn,
        customer_id,
        &payload.supplier1_name,
        &payload.supplier1_address,
        &payload.supplier1_phone,
        &payload.supplier1_contact,
        &payload.supplier1_payment,
    )
    .await?;
    let second = insert_supplier(
        txn,
        customer_id,
        &payload.supplier2_name,
        &payload.supplier2_address,
        &payload.supplier2_phone,
        &payload.supplier2_contact,
        &payload.supplier2_payment,
    )
    .await?;
    Ok((first, second))
}

async fn insert_supplier(
    txn: &DatabaseTransaction,
    customer_id: i32,
    name: &str,
    address: &str,
    phone: &str,
    contact: &str,
    payment: &str,
) -> Result<i32, DbErr> {
    let model = suppliers::ActiveModel {
        customer_id: Set(customer_id),
        company_name: Set(name.to_owned()),
        address: Set(address.to_owned()),
        phone: Set(phone.to_owned()),
        contact_person: Set(contact.to_owned()),
        payment_terms: Set(empty_to_none(payment)),
        ..Default::default()
    };
    // Insert-or-touch so a supplier already on file yields its row id
    let row = Suppliers::insert(model)
        .on_conflict(
            OnConflict::columns([suppliers::Column::CustomerId, suppliers::Column::CompanyName])
                .update_column(suppliers::Column::CompanyName)
                .to_owned(),
        )
        .exec_with_returning(txn)
        .await?;
    Ok(row.supplier_id)
}

async fn insert_supplier_link(
    txn: &DatabaseTransaction,
    customer_id: i32,
    supplier_id: i32,
) -> Result<(), DbErr> {
    let model = customer_suppliers::ActiveModel {
        customer_id: Set(customer_id),
        supplier_id: Set(supplier_id),
        ..Default::default()
    };
    CustomerSuppliers::insert(model)
        .exec_without_returning(txn)
        .await?;
    Ok(())
}

async fn insert_declaration(
    txn: &DatabaseTransaction,
    customer_id: i32,
    payload: &SubmissionPayload,
) -> Result<(), DbErr> {
    let model = declarations::ActiveModel {
        customer_id: Set(customer_id),
        emp_id: Set(payload.emp_id.clone()),
        designation: Set(payload.designation.clone()),
        date: Set(payload.date.clone()),
        sign: Set(payload.sign.clone().unwrap_or_default()),
        ..Default::default()
    };
    Declarations::insert(model)
        .exec_without_returning(txn)
        .await?;
    Ok(())
}

async fn insert_sales_info(
    txn: &DatabaseTransaction,
    customer_id: i32,
    payload: &SubmissionPayload,
) -> Result<(), DbErr> {
    let model = sales_info::ActiveModel {
        customer_id: Set(customer_id),
        emp_id: Set(payload.emp_id.clone()),
        requesting_branch: Set(payload.requesting_branch.clone()),
        division: Set(payload.division.clone()),
        credit_limit_req: Set(payload.credit_limit_req.clone()),
        sales_head: Set(payload.sales_head.clone()),
        sales_ho: Set(payload.sales_ho.clone()),
        estm: Set(payload.estm.clone()),
        requests: Set(empty_to_none(&payload.requests)),
        ..Default::default()
    };
    SalesInfo::insert(model).exec_without_returning(txn).await?;
    Ok(())
}

async fn insert_accounts_info(
    txn: &DatabaseTransaction,
    customer_id: i32,
    payload: &SubmissionPayload,
    numbers: &ParsedNumbers,
) -> Result<(), DbErr> {
    let model = accounts_info::ActiveModel {
        customer_id: Set(customer_id),
        emp_id: Set(payload.emp_id.clone()),
        code_number: Set(payload.code_number.clone()),
        existing_code: Set(empty_to_none(&payload.existing_code)),
        credit_limit_amount: Set(numbers.credit_limit_amount),
        cumulative_credit_limit: Set(numbers.cumulative_credit_limit),
        account_request: Set(payload.account_request.clone()),
        account_request_name: Set(payload.account_request_name.clone()),
        account_authorized: Set(payload.account_authorized.clone()),
        account_authorized_name: Set(payload.account_authorized_name.clone()),
        account_checked: Set(payload.account_checked.clone()),
        account_checked_name: Set(payload.account_checked_name.clone()),
        credit_approved: Set(payload.credit_approved.clone()),
        credit_limit: Set(numbers.approved_credit_limit),
        ..Default::default()
    };
    AccountsInfo::insert(model)
        .exec_without_returning(txn)
        .await?;
    Ok(())
}

fn empty_to_none(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}
