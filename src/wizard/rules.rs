//! Field level validation rules
//!
//! One table maps field ids to the checks that run against a trimmed,
//! non empty value. Messages are the exact strings shown in the error
//! list, one per rule.

use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;

pub const MSG_REQUIRED: &str = "This field is required.";
pub const MSG_RADIO_REQUIRED: &str = "Please select an option.";
pub const MSG_NAME_TEXT: &str = "Only letters and spaces allowed.";
pub const MSG_FREE_TEXT: &str = "Only letters, numbers, and spaces allowed.";
pub const MSG_ALPHANUMERIC: &str = "Employee ID must be alphanumeric.";
pub const MSG_EMAIL: &str = "Invalid email format (e.g., abc@example.com) - should be in lowercase";
pub const MSG_PAN: &str = "Invalid PAN format (e.g., ABCDE1234F) - should be in caps";
pub const MSG_GST: &str = "Invalid GST format (e.g., 22AAAAA0000A1Z5) - should be in caps";
pub const MSG_GST_PAN: &str = "GST must contain the same PAN.";
pub const MSG_YEAR: &str = "Enter a valid year";
pub const MSG_TURNOVER: &str = "Enter a valid positive number (up to 2 decimal places).";
pub const MSG_POSITIVE_AMOUNT: &str = "Enter a valid positive amount.";
pub const MSG_CREDIT_REQUIRED: &str = "Required when requesting credit.";
pub const MSG_PIN: &str = "PIN code must be exactly 6 digits.";
pub const MSG_PHONE: &str = "Phone number must be 10 digits starting with 6–9.";
pub const MSG_FAX: &str = "Enter a valid fax number (e.g., +1234567890)";
pub const MSG_ACC_NUMBER: &str = "A/C number must be 10–18 digits.";
pub const MSG_IFSC: &str = "Invalid IFSC Code (e.g., SBIN0123456) - should be in uppercase";
pub const MSG_CHEQUE: &str = "Cheque number must be at least 6 digits.";
pub const MSG_PAST_DATE: &str = "Date cannot be in the future.";
pub const MSG_DISTINCT_SUPPLIER: &str = "Supplier names must be distinct.";
pub const MSG_IMAGE_TYPE: &str = "Please upload an image file.";
pub const MSG_IMAGE_SIZE: &str = "File size must be less than 2MB.";
pub const MSG_DECLARATION: &str = "You must agree to the declaration.";
pub const MSG_PHOTO_REQUIRED: &str = "Please upload a photo.";
pub const MSG_SIGN_REQUIRED: &str = "Please upload a sign and seal image.";
pub const MSG_OTHER_TYPE_REQUIRED: &str = "Please specify the customer type.";

lazy_static! {
    static ref NAME_TEXT_RE: Regex = Regex::new(r"^[A-Za-z\s]+$").unwrap();
    static ref FREE_TEXT_RE: Regex = Regex::new(r"^[A-Za-z0-9\s]+$").unwrap();
    static ref ALPHANUMERIC_RE: Regex = Regex::new(r"^[A-Za-z0-9]+$").unwrap();
    static ref EMAIL_RE: Regex = Regex::new(r"^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$").unwrap();
    static ref PAN_RE: Regex = Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").unwrap();
    static ref GST_RE: Regex =
        Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$").unwrap();
    static ref TURNOVER_RE: Regex = Regex::new(r"^\d+(\.\d{1,2})?$").unwrap();
    static ref PIN_RE: Regex = Regex::new(r"^\d{6}$").unwrap();
    // Ten digit Indian mobile numbers
    static ref PHONE_RE: Regex = Regex::new(r"^[6-9]\d{9}$").unwrap();
    static ref FAX_RE: Regex = Regex::new(r"^\+?[0-9]{7,}$").unwrap();
    static ref ACC_NUMBER_RE: Regex = Regex::new(r"^\d{10,18}$").unwrap();
    static ref IFSC_RE: Regex = Regex::new(r"^[A-Z]{4}0[0-9A-Z]{6}$").unwrap();
    static ref CHEQUE_RE: Regex = Regex::new(r"^\d{6,}$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    NameText,
    FreeText,
    Alphanumeric,
    Email,
    Pan,
    Gst,
    YearRange,
    Turnover,
    PositiveAmount,
    /// Credit pair: required once a limit is requested, positive whenever
    /// a value is present
    CreditAmount,
    Pin,
    Phone,
    Fax,
    AccountNumber,
    Ifsc,
    Cheque,
    PastDate,
    DistinctSupplier,
    ImageFile,
    MustAccept,
}

pub struct FieldRule {
    pub field: &'static str,
    pub rule: Rule,
}

const fn rule(field: &'static str, rule: Rule) -> FieldRule {
    FieldRule { field, rule }
}

/// Rules in evaluation order; a field with several entries stops at the
/// first failure.
pub const RULES: &[FieldRule] = &[
    rule("sales_name", Rule::NameText),
    rule("emp_id", Rule::Alphanumeric),
    rule("sales_email", Rule::Email),
    rule("customer_name", Rule::NameText),
    rule("company_name", Rule::NameText),
    rule("pan", Rule::Pan),
    rule("gst", Rule::Gst),
    rule("year_incorporation", Rule::YearRange),
    rule("area", Rule::FreeText),
    rule("range", Rule::FreeText),
    rule("Association_HBL", Rule::PastDate),
    rule("partner_company_name", Rule::NameText),
    rule("fy_20_21", Rule::Turnover),
    rule("fy_21_22", Rule::Turnover),
    rule("fy_22_23", Rule::Turnover),
    rule("photo", Rule::ImageFile),
    rule("pin1", Rule::Pin),
    rule("city1", Rule::NameText),
    rule("state1", Rule::NameText),
    rule("country1", Rule::NameText),
    rule("contact1", Rule::NameText),
    rule("phone1", Rule::Phone),
    rule("fax1", Rule::Fax),
    rule("email_id1", Rule::Email),
    rule("designation1", Rule::NameText),
    rule("mobile1", Rule::Phone),
    rule("pin2", Rule::Pin),
    rule("city2", Rule::NameText),
    rule("state2", Rule::NameText),
    rule("country2", Rule::NameText),
    rule("contact2", Rule::NameText),
    rule("phone2", Rule::Phone),
    rule("fax2", Rule::Fax),
    rule("email_id2", Rule::Email),
    rule("designation2", Rule::NameText),
    rule("mobile2", Rule::Phone),
    rule("bank_name", Rule::NameText),
    rule("acc_number", Rule::AccountNumber),
    rule("acc_type", Rule::NameText),
    rule("branch_name", Rule::NameText),
    rule("ifsc", Rule::Ifsc),
    rule("security_cheque", Rule::Cheque),
    rule("pdc_cheque", Rule::Cheque),
    rule("supplier1_name", Rule::NameText),
    rule("supplier1_phone", Rule::Phone),
    rule("supplier1_contact", Rule::NameText),
    rule("supplier1_payment", Rule::FreeText),
    rule("supplier2_name", Rule::NameText),
    rule("supplier2_name", Rule::DistinctSupplier),
    rule("supplier2_phone", Rule::Phone),
    rule("supplier2_contact", Rule::NameText),
    rule("supplier2_payment", Rule::FreeText),
    rule("designation", Rule::NameText),
    rule("date", Rule::PastDate),
    rule("declaration", Rule::MustAccept),
    rule("sign", Rule::ImageFile),
    rule("requesting_branch", Rule::FreeText),
    rule("division", Rule::FreeText),
    rule("credit_limit_req", Rule::PositiveAmount),
    rule("sales_head", Rule::NameText),
    rule("sales_ho", Rule::NameText),
    rule("estm", Rule::PositiveAmount),
    rule("code_number", Rule::FreeText),
    rule("existing_code", Rule::FreeText),
    rule("credit_limit_amount", Rule::CreditAmount),
    rule("Cummulative", Rule::CreditAmount),
    rule("credit_limit", Rule::PositiveAmount),
    rule("account_request", Rule::NameText),
    rule("account_request_name", Rule::NameText),
    rule("account_authorized", Rule::NameText),
    rule("account_authorized_name", Rule::NameText),
    rule("account_checked", Rule::NameText),
    rule("account_checked_name", Rule::NameText),
];

pub fn rules_for(field: &str) -> impl Iterator<Item = Rule> + '_ {
    RULES
        .iter()
        .filter(move |entry| entry.field == field)
        .map(|entry| entry.rule)
}

/// Cross field inputs a rule may need.
pub struct RuleContext<'a> {
    pub today: NaiveDate,
    /// Trimmed PAN value, for the GST cross check
    pub pan: &'a str,
    /// Trimmed first supplier name, for the distinctness check
    pub supplier1_name: &'a str,
    /// Whether the credit limit radio is on "yes"
    pub credit_requested: bool,
}

/// Run one rule against a trimmed value. Except for `CreditAmount`, which
/// owns its empty handling, callers only pass non empty values.
pub fn check(rule: Rule, value: &str, ctx: &RuleContext<'_>) -> Result<(), &'static str> {
    match rule {
        Rule::NameText => matches_or(&NAME_TEXT_RE, value, MSG_NAME_TEXT),
        Rule::FreeText => matches_or(&FREE_TEXT_RE, value, MSG_FREE_TEXT),
        Rule::Alphanumeric => matches_or(&ALPHANUMERIC_RE, value, MSG_ALPHANUMERIC),
        Rule::Email => matches_or(&EMAIL_RE, value, MSG_EMAIL),
        Rule::Pan => matches_or(&PAN_RE, value, MSG_PAN),
        Rule::Gst => {
            if !GST_RE.is_match(value) {
                return Err(MSG_GST);
            }
            // Characters 3 to 12 of a GST number are the holder's PAN; the
            // check waits until a PAN has been entered
            if !ctx.pan.is_empty() && value[2..12] != ctx.pan.to_uppercase() {
                return Err(MSG_GST_PAN);
            }
            Ok(())
        }
        Rule::YearRange => match value.parse::<i32>() {
            Ok(year) if (1000..=ctx.today.year()).contains(&year) => Ok(()),
            _ => Err(MSG_YEAR),
        },
        Rule::Turnover => matches_or(&TURNOVER_RE, value, MSG_TURNOVER),
        Rule::PositiveAmount => {
            if is_positive_amount(value) {
                Ok(())
            } else {
                Err(MSG_POSITIVE_AMOUNT)
            }
        }
        Rule::CreditAmount => {
            if ctx.credit_requested && value.is_empty() {
                Err(MSG_CREDIT_REQUIRED)
            } else if !value.is_empty() && !is_positive_amount(value) {
                Err(MSG_POSITIVE_AMOUNT)
            } else {
                Ok(())
            }
        }
        Rule::Pin => matches_or(&PIN_RE, value, MSG_PIN),
        Rule::Phone => matches_or(&PHONE_RE, value, MSG_PHONE),
        Rule::Fax => matches_or(&FAX_RE, value, MSG_FAX),
        Rule::AccountNumber => matches_or(&ACC_NUMBER_RE, value, MSG_ACC_NUMBER),
        Rule::Ifsc => matches_or(&IFSC_RE, value, MSG_IFSC),
        Rule::Cheque => matches_or(&CHEQUE_RE, value, MSG_CHEQUE),
        Rule::PastDate => match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            Ok(date) if date <= ctx.today => Ok(()),
            _ => Err(MSG_PAST_DATE),
        },
        Rule::DistinctSupplier => {
            if value == ctx.supplier1_name {
                Err(MSG_DISTINCT_SUPPLIER)
            } else {
                Ok(())
            }
        }
        // File and checkbox rules are dispatched on the field kind
        Rule::ImageFile | Rule::MustAccept => Ok(()),
    }
}

fn matches_or(pattern: &Regex, value: &str, message: &'static str) -> Result<(), &'static str> {
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(message)
    }
}

fn is_positive_amount(value: &str) -> bool {
    value
        .parse::<Decimal>()
        .is_ok_and(|amount| amount > Decimal::ZERO)
}
