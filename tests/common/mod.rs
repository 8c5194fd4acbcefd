use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase, MockExecResult};
use serde_json::Value;
use tower::ServiceExt;

use onboarding_backend::entities::{customers, suppliers};
use onboarding_backend::models::submission::{
    RegisteredAddress, ShippingAddress, SubmissionPayload,
};
use onboarding_backend::{router, AppState};

/// Router over a mock database, the same stack `main` serves. The caller
/// keeps its own `Arc` handle when it wants the transaction log back.
pub fn test_router(db: Arc<DatabaseConnection>) -> Router {
    router(AppState { db })
}

/// Debug render of every statement the mock saw. The mock connection is
/// not `Clone`, so the log is recovered from the caller's handle once the
/// router built on it is gone.
#[allow(dead_code)]
pub fn transaction_log(db: Arc<DatabaseConnection>) -> String {
    match Arc::try_unwrap(db) {
        Ok(db) => format!("{:?}", db.into_transaction_log()),
        Err(_) => panic!("the router still holds the mock connection"),
    }
}

pub fn exec_ok() -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected: 1,
    }
}

/// Mock for a submission that goes through: no PAN on file, the customer
/// insert hands back id 7, the two supplier upserts hand back their rows.
/// `with_shipping_row` matches whether the payload carries a distinct
/// shipping address and so writes a second address row.
pub fn submission_success_db(with_shipping_row: bool) -> DatabaseConnection {
    let child_inserts = if with_shipping_row { 10 } else { 9 };
    MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<customers::Model>::new()])
        .append_query_results([[stored_customer()]])
        .append_query_results([
            [stored_supplier(11, "Chennai Yarns")],
            [stored_supplier(12, "Salem Fabrics")],
        ])
        .append_exec_results(vec![exec_ok(); child_inserts])
        .into_connection()
}

/// Mock where the PAN pre-check finds an existing customer.
pub fn duplicate_pan_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([exec_ok()])
        .append_query_results([[stored_customer()]])
        .into_connection()
}

/// Mock whose first write fails, as a dropped connection would.
pub fn broken_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_errors([DbErr::Custom("connection lost".to_owned())])
        .into_connection()
}

/// Mock that carries the plan through both address rows and then fails
/// on the bank details insert.
#[allow(dead_code)]
pub fn failing_midplan_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<customers::Model>::new()])
        .append_query_results([[stored_customer()]])
        .append_exec_results(vec![exec_ok(); 4])
        .append_exec_errors([DbErr::Custom("connection lost".to_owned())])
        .into_connection()
}

#[allow(dead_code)]
pub fn empty_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

pub fn stored_customer() -> customers::Model {
    customers::Model {
        customer_id: 7,
        emp_id: "EMP42".to_owned(),
        customer_name: "Ravi Kumar".to_owned(),
        company_name: "Madurai Mills".to_owned(),
        commercial_name: None,
        customer_address: "12 Mount Road Chennai".to_owned(),
        customer_type: "Trader".to_owned(),
        other_customer_type: None,
        category: "Retail".to_owned(),
        pan: "ABCDE1234F".to_owned(),
        gst: "33ABCDE1234F1Z5".to_owned(),
        year_incorporation: 2005,
        area: "Madurai".to_owned(),
        range: "South Zone".to_owned(),
        association_hbl: "2010-01-01".to_owned(),
    }
}

pub fn stored_supplier(supplier_id: i32, company_name: &str) -> suppliers::Model {
    suppliers::Model {
        supplier_id,
        customer_id: 7,
        company_name: company_name.to_owned(),
        address: "5 North Street".to_owned(),
        phone: "9876543210".to_owned(),
        contact_person: "Raman".to_owned(),
        payment_terms: None,
    }
}

/// A complete submission with a distinct shipping address, as the wizard
/// posts it.
#[allow(dead_code)]
pub fn sample_payload() -> SubmissionPayload {
    SubmissionPayload {
        sales_name: "Asha Rao".to_owned(),
        emp_id: "EMP42".to_owned(),
        sales_email: "asha@rao.in".to_owned(),

        customer_name: "Ravi Kumar".to_owned(),
        company_name: "Madurai Mills".to_owned(),
        commercial_name: String::new(),
        customer_address: "12 Mount Road Chennai".to_owned(),
        customer_type: "Trader".to_owned(),
        other_customer_type: String::new(),
        category: "Retail".to_owned(),
        pan: "ABCDE1234F".to_owned(),
        gst: "33ABCDE1234F1Z5".to_owned(),
        year_incorporation: "2005".to_owned(),
        area: "Madurai".to_owned(),
        range: "South Zone".to_owned(),
        association_hbl: "2010-01-01".to_owned(),

        partner_company_name: "Madurai Mills".to_owned(),
        status: "Private Limited".to_owned(),
        fy_20_21: "123456.78".to_owned(),
        fy_21_22: "234567.89".to_owned(),
        fy_22_23: "345678.90".to_owned(),
        branches_name: String::new(),
        sister_company_name: String::new(),
        photo: Some(STANDARD.encode(b"photo-bytes")),

        address1: RegisteredAddress {
            business_address1: "12 Mount Road".to_owned(),
            pin1: "600002".to_owned(),
            city1: "Chennai".to_owned(),
            state1: "Tamil Nadu".to_owned(),
            country1: "India".to_owned(),
            contact1: "Asha Rao".to_owned(),
            phone1: "9840012345".to_owned(),
            fax1: String::new(),
            email_id1: "asha@rao.in".to_owned(),
            designation1: "Director".to_owned(),
            mobile1: String::new(),
        },
        address2: ShippingAddress {
            business_address2: "48 Avinashi Road".to_owned(),
            pin2: "641001".to_owned(),
            city2: "Coimbatore".to_owned(),
            state2: "Tamil Nadu".to_owned(),
            country2: "India".to_owned(),
            contact2: "Ravi Kumar".to_owned(),
            phone2: "9845098450".to_owned(),
            fax2: String::new(),
            email_id2: "ravi@maduraimills.in".to_owned(),
            designation2: "Manager".to_owned(),
            mobile2: String::new(),
        },
        different_shipping: false,

        bank_name: "State Bank of India".to_owned(),
        acc_number: "12345678901".to_owned(),
        acc_type: "Current".to_owned(),
        branch_name: "Anna Nagar".to_owned(),
        ifsc: "SBIN0001234".to_owned(),
        limits: String::new(),
        security_cheque: "123456".to_owned(),
        pdc_cheque: "654321".to_owned(),

        supplier1_name: "Chennai Yarns".to_owned(),
        supplier1_address: "5 North Street Chennai".to_owned(),
        supplier1_phone: "9876543210".to_owned(),
        supplier1_contact: "Raman".to_owned(),
        supplier1_payment: String::new(),
        supplier2_name: "Salem Fabrics".to_owned(),
        supplier2_address: "8 West Street Salem".to_owned(),
        supplier2_phone: "9123456780".to_owned(),
        supplier2_contact: "Lakshmi".to_owned(),
        supplier2_payment: String::new(),

        designation: "Director".to_owned(),
        date: "2026-08-24".to_owned(),
        sign: Some(STANDARD.encode(b"sign-bytes")),

        requesting_branch: "Chennai".to_owned(),
        division: "Textiles".to_owned(),
        credit_limit_req: "500000".to_owned(),
        sales_head: "Kumar".to_owned(),
        sales_ho: "Anand".to_owned(),
        estm: "750000".to_owned(),
        requests: String::new(),

        code_number: "HBL1024".to_owned(),
        existing_code: String::new(),
        credit_limit_radio: Some("no".to_owned()),
        credit_limit_amount: String::new(),
        cumulative: String::new(),
        credit_limit: "300000".to_owned(),
        account_request: "Suresh".to_owned(),
        account_request_name: "Suresh Babu".to_owned(),
        account_authorized: "Meena".to_owned(),
        account_authorized_name: "Meena Devi".to_owned(),
        account_checked: "Vijay".to_owned(),
        account_checked_name: "Vijay Anand".to_owned(),
        credit_approved: "Approved".to_owned(),
    }
}

/// POST the payload to /submit-form and decode the JSON reply.
#[allow(dead_code)]
pub async fn post_submission(app: Router, payload: &SubmissionPayload) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/submit-form")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}
