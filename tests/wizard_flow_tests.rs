mod common;

use std::sync::Arc;

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use onboarding_backend::wizard::client::{self, ServerReply};
use onboarding_backend::wizard::controller::{SubmitOutcome, WizardController};
use onboarding_backend::wizard::form::FileUpload;
use onboarding_backend::wizard::nav::{AddressSub, SectionPart, SupplierSub};

use crate::common::{broken_db, duplicate_pan_db, submission_success_db, test_router};

async fn spawn_server(db: DatabaseConnection) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = test_router(Arc::new(db));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 24).unwrap()
}

/// Walks the wizard front to back the way a user would, mirroring the
/// shipping address off the registered one, and checks the navigation
/// gates open as each section is completed.
fn walk_wizard(ctrl: &mut WizardController) {
    ctrl.input("sales_name", "Asha Rao");
    ctrl.input("emp_id", "EMP42");
    ctrl.input("sales_email", "asha@rao.in");
    ctrl.next();
    assert_eq!(ctrl.state.step, 1);

    ctrl.input("customer_name", "Ravi Kumar");
    ctrl.input("company_name", "Madurai Mills");
    ctrl.input("customer_address", "12 Mount Road Chennai");
    ctrl.select("customerType", "Trader");
    ctrl.select("Category", "Retail");
    ctrl.input("pan", "ABCDE1234F");
    ctrl.input("gst", "33ABCDE1234F1Z5");
    ctrl.input("year_incorporation", "2005");
    ctrl.input("area", "Madurai");
    ctrl.input("range", "South Zone");
    ctrl.input("Association_HBL", "2010-01-01");
    ctrl.next();
    assert_eq!(ctrl.state.step, 2);

    ctrl.input("partner_company_name", "Madurai Mills");
    ctrl.select("Status", "Private Limited");
    ctrl.input("fy_20_21", "123456.78");
    ctrl.input("fy_21_22", "234567.89");
    ctrl.input("fy_22_23", "345678.90");
    ctrl.attach_file(
        "photo",
        FileUpload::from_bytes("photo.png", "image/png", vec![137, 80, 78, 71]),
    );
    ctrl.next();
    assert_eq!(ctrl.state.step, 3);

    ctrl.input("business_address1", "12 Mount Road");
    ctrl.input("pin1", "600002");
    ctrl.input("city1", "Chennai");
    ctrl.input("state1", "Tamil Nadu");
    ctrl.input("country1", "India");
    ctrl.input("contact1", "Asha Rao");
    ctrl.input("phone1", "9840012345");
    ctrl.input("email_id1", "asha@rao.in");
    ctrl.input("designation1", "Director");
    ctrl.set_checkbox("differentShipping", true);
    ctrl.next();
    assert_eq!(ctrl.state.address_sub, AddressSub::Shipping);
    ctrl.next();
    assert_eq!(ctrl.state.step, 4);

    ctrl.input("bank_name", "State Bank of India");
    ctrl.input("acc_number", "12345678901");
    ctrl.select("acc_type", "Current");
    ctrl.input("branch_name", "Anna Nagar");
    ctrl.input("ifsc", "SBIN0001234");
    ctrl.input("security_cheque", "123456");
    ctrl.input("pdc_cheque", "654321");
    ctrl.input("supplier1_name", "Chennai Yarns");
    ctrl.input("supplier1_address", "5 North Street Chennai");
    ctrl.input("supplier1_phone", "9876543210");
    ctrl.input("supplier1_contact", "Raman");
    ctrl.next();
    assert_eq!(ctrl.state.step, 4);
    assert_eq!(ctrl.state.supplier_sub, SupplierSub::Second);

    ctrl.input("supplier2_name", "Salem Fabrics");
    ctrl.input("supplier2_address", "8 West Street Salem");
    ctrl.input("supplier2_phone", "9123456780");
    ctrl.input("supplier2_contact", "Lakshmi");
    ctrl.next();
    assert_eq!(ctrl.state.step, 5);

    // The declaration date is pre-seeded with today
    ctrl.input("designation", "Director");
    ctrl.set_checkbox("declaration", true);
    ctrl.attach_file(
        "sign",
        FileUpload::from_bytes("sign.png", "image/png", vec![1, 2, 3, 4]),
    );
    ctrl.next();
    assert_eq!(ctrl.state.step, 6);

    ctrl.input("requesting_branch", "Chennai");
    ctrl.input("division", "Textiles");
    ctrl.input("credit_limit_req", "500000");
    ctrl.input("sales_head", "Kumar");
    ctrl.input("sales_ho", "Anand");
    ctrl.input("estm", "750000");
    ctrl.next();
    assert_eq!(ctrl.state.step, 7);

    ctrl.input("code_number", "HBL1024");
    ctrl.choose("credit_limit_radio", "no");
    ctrl.input("credit_limit", "300000");
    ctrl.input("account_request", "Suresh");
    ctrl.input("account_request_name", "Suresh Babu");
    ctrl.input("account_authorized", "Meena");
    ctrl.input("account_authorized_name", "Meena Devi");
    ctrl.input("account_checked", "Vijay");
    ctrl.input("account_checked_name", "Vijay Anand");
    ctrl.input("credit_approved", "Approved");
}

/// The whole path: wizard walk, payload post, confirmation, reset.
#[tokio::test]
async fn full_wizard_run_round_trips_against_the_server() {
    let base_url = spawn_server(submission_success_db(false)).await;
    let mut ctrl = WizardController::new(today());
    walk_wizard(&mut ctrl);

    let SubmitOutcome::Ready(payload) = ctrl.submit() else {
        panic!("wizard should be ready to post");
    };
    assert!(payload.different_shipping);
    // The mirrored copy travels with the payload even though the server
    // stores no second address row for it
    assert_eq!(payload.address2.pin2, "600002");
    assert!(ctrl.is_submitting());

    let http = reqwest::Client::new();
    let reply = client::submit_form(&http, &base_url, &payload).await.unwrap();
    assert_eq!(
        reply,
        ServerReply::Success {
            message: "Form submitted successfully".to_owned()
        }
    );

    let message = ctrl.handle_reply(&reply);
    assert_eq!(message, "Form submitted successfully!");
    assert_eq!(ctrl.state.step, 0);
    assert_eq!(ctrl.form.text("customer_name"), "");
    assert!(!ctrl.is_submitting());
}

/// A 409 from the server lands the user back on the PAN field with the
/// form intact.
#[tokio::test]
async fn duplicate_pan_sends_the_wizard_back_to_the_pan_field() {
    let base_url = spawn_server(duplicate_pan_db()).await;
    let mut ctrl = WizardController::new(today());
    walk_wizard(&mut ctrl);

    let SubmitOutcome::Ready(payload) = ctrl.submit() else {
        panic!("wizard should be ready to post");
    };

    let http = reqwest::Client::new();
    let reply = client::submit_form(&http, &base_url, &payload).await.unwrap();
    assert_eq!(
        reply,
        ServerReply::Conflict {
            error: "PAN number already exists".to_owned()
        }
    );

    let message = ctrl.handle_reply(&reply);
    assert!(message.contains("PAN number already exists"));
    assert_eq!(ctrl.state.step, 1);
    let report = ctrl.report(SectionPart::CustomerInfo).unwrap();
    assert_eq!(report.message_for("pan"), Some("PAN number already exists."));
    assert_eq!(ctrl.form.text("pan"), "ABCDE1234F");
    assert!(!ctrl.is_submitting());
}

/// Any other server failure surfaces its message and keeps the form for
/// another attempt.
#[tokio::test]
async fn server_failure_surfaces_and_keeps_the_form() {
    let base_url = spawn_server(broken_db()).await;
    let mut ctrl = WizardController::new(today());
    walk_wizard(&mut ctrl);

    let SubmitOutcome::Ready(payload) = ctrl.submit() else {
        panic!("wizard should be ready to post");
    };

    let http = reqwest::Client::new();
    let reply = client::submit_form(&http, &base_url, &payload).await.unwrap();
    let ServerReply::Failure { error } = &reply else {
        panic!("expected a failure reply");
    };
    assert!(error.starts_with("Failed to submit form"), "{error}");

    let message = ctrl.handle_reply(&reply);
    assert!(message.starts_with("Error: Failed to submit form"), "{message}");
    assert_eq!(ctrl.form.text("company_name"), "Madurai Mills");
    assert!(!ctrl.is_submitting());
}
