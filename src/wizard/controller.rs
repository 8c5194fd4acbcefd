//! Wizard controller
//!
//! Drives the form model through the eight steps: field edits with their
//! as-you-type checks, navigation, the submit walk that validates every
//! section, payload assembly, and the handling of the server's reply.
//! Embedders render `form`, `state` and the per section reports and feed
//! user events back in.

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::NaiveDate;

use crate::models::submission::{RegisteredAddress, ShippingAddress, SubmissionPayload};
use crate::wizard::client::ServerReply;
use crate::wizard::form::{FileUpload, FormModel};
use crate::wizard::nav::{
    self, AddressSub, NavEvent, Section, SectionPart, SupplierSub, WizardState, ALL_PARTS,
};
use crate::wizard::validate::{self, FieldError, SectionReport, ValidationCtx};

const PHOTO_READ_ERROR: &str = "Error reading photo file.";
const SIGN_READ_ERROR: &str = "Error reading sign file.";
const MSG_PAN_EXISTS: &str = "PAN number already exists.";

/// Names the server insists on before it writes anything.
const FINAL_REQUIRED: &[&str] = &[
    "sales_name",
    "customer_name",
    "company_name",
    "supplier1_name",
    "supplier2_name",
];

#[derive(Debug, PartialEq)]
pub enum SubmitOutcome {
    /// A submission is already on the wire
    InFlight,
    /// At least one section failed; the wizard has jumped to the first
    ValidationFailed { failed: Vec<SectionPart> },
    /// The final backstop caught an empty critical name
    MissingRequired { fields: Vec<&'static str> },
    /// The payload is ready to post
    Ready(Box<SubmissionPayload>),
}

pub struct WizardController {
    pub form: FormModel,
    pub state: WizardState,
    pub ctx: ValidationCtx,
    reports: HashMap<SectionPart, SectionReport>,
    submitting: bool,
}

impl WizardController {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            form: FormModel::new(today),
            state: WizardState::new(),
            ctx: ValidationCtx { today },
            reports: HashMap::new(),
            submitting: false,
        }
    }

    /// Latest validation report for a section, if it has been validated.
    pub fn report(&self, part: SectionPart) -> Option<&SectionReport> {
        self.reports.get(&part)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn next(&mut self) {
        self.apply(NavEvent::Next);
    }

    pub fn prev(&mut self) {
        self.apply(NavEvent::Prev);
    }

    pub fn goto_step(&mut self, step: usize) {
        self.apply(NavEvent::Goto(step));
    }

    pub fn address_tab(&mut self, sub: AddressSub) {
        self.apply(NavEvent::AddressTab(sub));
    }

    pub fn supplier_tab(&mut self, sub: SupplierSub) {
        self.apply(NavEvent::SupplierTab(sub));
    }

    fn apply(&mut self, event: NavEvent) {
        let outcome = nav::reduce(self.state, event, &self.form, &self.ctx);
        if outcome.copy_shipping {
            self.copy_shipping();
        }
        for (part, report) in outcome.reports {
            self.reports.insert(part, report);
        }
        self.state = outcome.state;
    }

    fn copy_shipping(&mut self) {
        self.form.copy_registered_to_shipping();
        let report = validate::validate_fields(
            &self.form,
            SectionPart::ShippingAddress.fields(),
            &self.ctx,
        );
        self.reports.insert(SectionPart::ShippingAddress, report);
    }

    /// Text edit. Turnover fields are shaped as typed; every edit
    /// revalidates the field and replaces its section's report.
    pub fn input(&mut self, field: &'static str, value: &str) {
        let shaped;
        let value = if matches!(field, "fy_20_21" | "fy_21_22" | "fy_22_23") {
            shaped = shape_turnover(value);
            shaped.as_str()
        } else {
            value
        };
        self.form.set_text(field, value);
        self.revalidate_field(field);
    }

    /// Dropdown change. Picking "Others" as the customer type requires the
    /// free text detail; any other pick clears and releases it.
    pub fn select(&mut self, field: &'static str, value: &str) {
        self.form.set_text(field, value);
        if field == "customerType" {
            if value == "Others" {
                self.form.set_required("otherCustomerType", true);
            } else {
                self.form.set_required("otherCustomerType", false);
                self.form.set_text("otherCustomerType", "");
            }
            self.revalidate_field("otherCustomerType");
            return;
        }
        self.revalidate_field(field);
    }

    /// Checkbox toggle. The shipping mirror copies the registered address
    /// and drops the shipping required flags; toggled while the shipping
    /// half is on screen it moves straight on to the next step.
    pub fn set_checkbox(&mut self, field: &'static str, checked: bool) {
        self.form.set_checked(field, checked);
        if field == "differentShipping" {
            if checked {
                self.copy_shipping();
                self.form.relax_shipping_required();
                if self.state.section() == Section::Address
                    && self.state.address_sub == AddressSub::Shipping
                {
                    self.state.step += 1;
                    self.state.supplier_sub = SupplierSub::First;
                }
            } else {
                self.form.restore_shipping_required();
                self.reports.remove(&SectionPart::ShippingAddress);
            }
            return;
        }
        self.revalidate_field(field);
    }

    /// Radio pick. Requesting a credit limit makes the amount pair
    /// mandatory.
    pub fn choose(&mut self, group: &'static str, value: &str) {
        self.form.choose(group, value);
        if group == "credit_limit_radio" {
            let requested = value == "yes";
            self.form.set_required("credit_limit_amount", requested);
            self.form.set_required("Cummulative", requested);
        }
        self.revalidate_field(group);
    }

    pub fn attach_file(&mut self, field: &'static str, upload: FileUpload) {
        self.form.attach(field, upload);
        self.revalidate_field(field);
    }

    fn revalidate_field(&mut self, field: &'static str) {
        if let Some(part) = nav::part_of(field) {
            let report = validate::validate_field(&self.form, field, &self.ctx);
            self.reports.insert(part, report);
        }
    }

    /// Validate everything and assemble the wire payload. Walks the
    /// sections in order, skipping the shipping address when it mirrors
    /// the registered one, and jumps to the first failing section. An
    /// attachment whose content could not be read posts as null with the
    /// error pinned on its section; the server rejects the payload.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.submitting {
            return SubmitOutcome::InFlight;
        }

        let mirrored = self.form.checked("differentShipping");
        let mut failed = Vec::new();
        for &part in ALL_PARTS {
            if part == SectionPart::ShippingAddress && mirrored {
                continue;
            }
            let report = validate::validate_fields(&self.form, part.fields(), &self.ctx);
            if !report.is_valid() {
                failed.push(part);
            }
            self.reports.insert(part, report);
        }
        if let Some(&first) = failed.first() {
            self.jump_to(first);
            return SubmitOutcome::ValidationFailed { failed };
        }

        let missing: Vec<&'static str> = FINAL_REQUIRED
            .iter()
            .copied()
            .filter(|field| self.form.text(field).trim().is_empty())
            .collect();
        if !missing.is_empty() {
            return SubmitOutcome::MissingRequired { fields: missing };
        }

        let photo = self.encode_attachment("photo", SectionPart::CompanyProfile, PHOTO_READ_ERROR);
        let sign = self.encode_attachment("sign", SectionPart::Declaration, SIGN_READ_ERROR);

        self.submitting = true;
        SubmitOutcome::Ready(Box::new(self.assemble_payload(photo, sign)))
    }

    fn encode_attachment(
        &mut self,
        field: &'static str,
        part: SectionPart,
        message: &'static str,
    ) -> Option<String> {
        let upload = self.form.file(field)?;
        if let Some(bytes) = &upload.content {
            return Some(STANDARD.encode(bytes));
        }
        self.reports.insert(
            part,
            SectionReport {
                errors: vec![FieldError { field, message }],
            },
        );
        None
    }

    fn jump_to(&mut self, part: SectionPart) {
        self.state.step = part.step();
        match part {
            SectionPart::RegisteredAddress => self.state.address_sub = AddressSub::Registered,
            SectionPart::ShippingAddress => self.state.address_sub = AddressSub::Shipping,
            SectionPart::BankDetails | SectionPart::SupplierOne => {
                self.state.supplier_sub = SupplierSub::First;
            }
            SectionPart::SupplierTwo => self.state.supplier_sub = SupplierSub::Second,
            _ => {}
        }
    }

    fn owned(&self, field: &str) -> String {
        self.form.text(field).to_owned()
    }

    fn assemble_payload(&self, photo: Option<String>, sign: Option<String>) -> SubmissionPayload {
        SubmissionPayload {
            sales_name: self.owned("sales_name"),
            emp_id: self.owned("emp_id"),
            sales_email: self.owned("sales_email"),

            customer_name: self.owned("customer_name"),
            company_name: self.owned("company_name"),
            commercial_name: self.owned("commercial_name"),
            customer_address: self.owned("customer_address"),
            customer_type: self.owned("customerType"),
            other_customer_type: self.owned("otherCustomerType"),
            category: self.owned("Category"),
            pan: self.owned("pan"),
            gst: self.owned("gst"),
            year_incorporation: self.owned("year_incorporation"),
            area: self.owned("area"),
            range: self.owned("range"),
            association_hbl: self.owned("Association_HBL"),

            partner_company_name: self.owned("partner_company_name"),
            status: self.owned("Status"),
            fy_20_21: self.owned("fy_20_21"),
            fy_21_22: self.owned("fy_21_22"),
            fy_22_23: self.owned("fy_22_23"),
            branches_name: self.owned("branches_name"),
            sister_company_name: self.owned("sister_Company_name"),
            photo,

            address1: RegisteredAddress {
                business_address1: self.owned("business_address1"),
                pin1: self.owned("pin1"),
                city1: self.owned("city1"),
                state1: self.owned("state1"),
                country1: self.owned("country1"),
                contact1: self.owned("contact1"),
                phone1: self.owned("phone1"),
                fax1: self.owned("fax1"),
                email_id1: self.owned("email_id1"),
                designation1: self.owned("designation1"),
                mobile1: self.owned("mobile1"),
            },
            address2: ShippingAddress {
                business_address2: self.owned("business_address2"),
                pin2: self.owned("pin2"),
                city2: self.owned("city2"),
                state2: self.owned("state2"),
                country2: self.owned("country2"),
                contact2: self.owned("contact2"),
                phone2: self.owned("phone2"),
                fax2: self.owned("fax2"),
                email_id2: self.owned("email_id2"),
                designation2: self.owned("designation2"),
                mobile2: self.owned("mobile2"),
            },
            different_shipping: self.form.checked("differentShipping"),

            bank_name: self.owned("bank_name"),
            acc_number: self.owned("acc_number"),
            acc_type: self.owned("acc_type"),
            branch_name: self.owned("branch_name"),
            ifsc: self.owned("ifsc"),
            limits: self.owned("limits"),
            security_cheque: self.owned("security_cheque"),
            pdc_cheque: self.owned("pdc_cheque"),

            supplier1_name: self.owned("supplier1_name"),
            supplier1_address: self.owned("supplier1_address"),
            supplier1_phone: self.owned("supplier1_phone"),
            supplier1_contact: self.owned("supplier1_contact"),
            supplier1_payment: self.owned("supplier1_payment"),
            supplier2_name: self.owned("supplier2_name"),
            supplier2_address: self.owned("supplier2_address"),
            supplier2_phone: self.owned("supplier2_phone"),
            supplier2_contact: self.owned("supplier2_contact"),
            supplier2_payment: self.owned("supplier2_payment"),

            designation: self.owned("designation"),
            date: self.owned("date"),
            sign,

            requesting_branch: self.owned("requesting_branch"),
            division: self.owned("division"),
            credit_limit_req: self.owned("credit_limit_req"),
            sales_head: self.owned("sales_head"),
            sales_ho: self.owned("sales_ho"),
            estm: self.owned("estm"),
            requests: self.owned("Requests"),

            code_number: self.owned("code_number"),
            existing_code: self.owned("existing_code"),
            credit_limit_radio: self.form.choice("credit_limit_radio").map(str::to_owned),
            credit_limit_amount: self.owned("credit_limit_amount"),
            cumulative: self.owned("Cummulative"),
            credit_limit: self.owned("credit_limit"),
            account_request: self.owned("account_request"),
            account_request_name: self.owned("account_request_name"),
            account_authorized: self.owned("account_authorized"),
            account_authorized_name: self.owned("account_authorized_name"),
            account_checked: self.owned("account_checked"),
            account_checked_name: self.owned("account_checked_name"),
            credit_approved: self.owned("credit_approved"),
        }
    }

    /// Fold the server's reply back into the wizard and return the message
    /// to show. Success resets the whole form; a duplicate PAN jumps back
    /// to the customer section with the error pinned on the PAN field.
    pub fn handle_reply(&mut self, reply: &ServerReply) -> String {
        self.submitting = false;
        match reply {
            ServerReply::Success { .. } => {
                self.reset();
                "Form submitted successfully!".to_string()
            }
            ServerReply::Conflict { error } if error.contains("PAN number already exists") => {
                self.jump_to(SectionPart::CustomerInfo);
                self.reports.insert(
                    SectionPart::CustomerInfo,
                    SectionReport {
                        errors: vec![FieldError {
                            field: "pan",
                            message: MSG_PAN_EXISTS,
                        }],
                    },
                );
                "Error: A customer with this PAN number already exists. \
                 Please use a different PAN or contact support."
                    .to_string()
            }
            ServerReply::Conflict { error } | ServerReply::Failure { error } => {
                if error.is_empty() {
                    "Error: Unknown error".to_string()
                } else {
                    format!("Error: {error}")
                }
            }
        }
    }

    /// The request never reached the server.
    pub fn handle_transport_error(&mut self, error: &str) -> String {
        self.submitting = false;
        format!("Error submitting form: {error}")
    }

    pub fn reset(&mut self) {
        self.form.reset(self.ctx.today);
        self.state = WizardState::new();
        self.reports.clear();
        self.submitting = false;
    }
}

/// Turnover inputs are capped as typed: two decimal places, eight digits.
fn shape_turnover(raw: &str) -> String {
    let mut parts = raw.split('.');
    let int_part = parts.next().unwrap_or_default();
    let mut value = match parts.next() {
        Some(frac) if frac.chars().count() > 2 => {
            let frac: String = frac.chars().take(2).collect();
            format!("{int_part}.{frac}")
        }
        _ => raw.to_owned(),
    };
    let digits = value.chars().filter(|c| *c != '.').count();
    if digits > 8 {
        let keep = 8 + usize::from(value.contains('.'));
        value = value.chars().take(keep).collect();
    }
    value
}
