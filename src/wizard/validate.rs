//! Section validation
//!
//! Runs the rule table over a list of fields and produces the report the
//! wizard shows next to that section. A report always replaces the
//! previous one for the same section.

use chrono::NaiveDate;

use crate::services::submission::MAX_ATTACHMENT_BYTES;
use crate::wizard::form::{FieldValue, FormModel};
use crate::wizard::rules::{self, Rule, RuleContext};

pub struct ValidationCtx {
    pub today: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    /// Error list entry, `field: message`.
    pub fn line(&self) -> String {
        format!("{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionReport {
    pub errors: Vec<FieldError>,
}

impl SectionReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn lines(&self) -> Vec<String> {
        self.errors.iter().map(FieldError::line).collect()
    }

    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }
}

/// Validate the given fields in order. Each field contributes at most one
/// error, the first rule that fails.
pub fn validate_fields(
    form: &FormModel,
    fields: &[&'static str],
    ctx: &ValidationCtx,
) -> SectionReport {
    let pan = form.text("pan").trim().to_owned();
    let supplier1_name = form.text("supplier1_name").trim().to_owned();
    let rule_ctx = RuleContext {
        today: ctx.today,
        pan: &pan,
        supplier1_name: &supplier1_name,
        credit_requested: form.choice("credit_limit_radio") == Some("yes"),
    };

    let mut errors = Vec::new();
    for &field in fields {
        let Some(value) = form.value(field) else {
            continue;
        };
        match value {
            FieldValue::Text(raw) => {
                let value = raw.trim();
                if rules::rules_for(field).any(|rule| rule == Rule::CreditAmount) {
                    // Carries its own required handling, empty included
                    if let Err(message) = rules::check(Rule::CreditAmount, value, &rule_ctx) {
                        errors.push(FieldError { field, message });
                    }
                    continue;
                }
                if value.is_empty() {
                    if form.is_required(field) {
                        errors.push(FieldError {
                            field,
                            message: required_message(field),
                        });
                    }
                    continue;
                }
                for rule in rules::rules_for(field) {
                    if let Err(message) = rules::check(rule, value, &rule_ctx) {
                        errors.push(FieldError { field, message });
                        break;
                    }
                }
            }
            FieldValue::Choice(choice) => {
                if form.is_required(field) && choice.is_none() {
                    errors.push(FieldError {
                        field,
                        message: rules::MSG_RADIO_REQUIRED,
                    });
                }
            }
            FieldValue::Checked(checked) => {
                if !checked && rules::rules_for(field).any(|rule| rule == Rule::MustAccept) {
                    errors.push(FieldError {
                        field,
                        message: rules::MSG_DECLARATION,
                    });
                }
            }
            FieldValue::File(upload) => match upload {
                None => {
                    if form.is_required(field) {
                        errors.push(FieldError {
                            field,
                            message: required_message(field),
                        });
                    }
                }
                Some(file) => {
                    if !file.mime_type.starts_with("image/") {
                        errors.push(FieldError {
                            field,
                            message: rules::MSG_IMAGE_TYPE,
                        });
                    } else if file.size > MAX_ATTACHMENT_BYTES {
                        errors.push(FieldError {
                            field,
                            message: rules::MSG_IMAGE_SIZE,
                        });
                    }
                }
            },
        }
    }
    SectionReport { errors }
}

/// Single field run, used by the as-you-type checks.
pub fn validate_field(form: &FormModel, field: &'static str, ctx: &ValidationCtx) -> SectionReport {
    validate_fields(form, &[field], ctx)
}

fn required_message(field: &str) -> &'static str {
    match field {
        "photo" => rules::MSG_PHOTO_REQUIRED,
        "sign" => rules::MSG_SIGN_REQUIRED,
        "otherCustomerType" => rules::MSG_OTHER_TYPE_REQUIRED,
        _ => rules::MSG_REQUIRED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::form::{FileUpload, SALES_PERSON_FIELDS};

    fn ctx() -> ValidationCtx {
        ValidationCtx {
            today: NaiveDate::from_ymd_opt(2026, 8, 24).unwrap(),
        }
    }

    fn form() -> FormModel {
        FormModel::new(ctx().today)
    }

    #[test]
    fn empty_required_fields_use_the_generic_message() {
        let report = validate_fields(&form(), SALES_PERSON_FIELDS, &ctx());
        assert_eq!(report.errors.len(), 3);
        assert_eq!(report.message_for("sales_name"), Some(rules::MSG_REQUIRED));
        assert_eq!(
            report.lines()[0],
            "sales_name: This field is required."
        );
    }

    #[test]
    fn empty_optional_fields_are_skipped() {
        let mut form = form();
        form.set_text("sales_name", "Asha Rao");
        form.set_text("emp_id", "EMP42");
        form.set_text("sales_email", "asha@rao.in");
        let report = validate_fields(&form, SALES_PERSON_FIELDS, &ctx());
        assert!(report.is_valid());

        let report = validate_fields(&form, &["commercial_name", "fax1"], &ctx());
        assert!(report.is_valid());
    }

    #[test]
    fn values_are_trimmed_before_the_rules_run() {
        let mut form = form();
        form.set_text("sales_name", "  Asha Rao  ");
        let report = validate_field(&form, "sales_name", &ctx());
        assert!(report.is_valid());

        form.set_text("pan", "   ");
        let report = validate_field(&form, "pan", &ctx());
        assert_eq!(report.message_for("pan"), Some(rules::MSG_REQUIRED));
    }

    #[test]
    fn first_failing_rule_wins() {
        let mut form = form();
        form.set_text("supplier1_name", "Madurai Mills");
        form.set_text("supplier2_name", "Madurai Mill5");
        // Shape fails before distinctness is even considered
        let report = validate_field(&form, "supplier2_name", &ctx());
        assert_eq!(
            report.message_for("supplier2_name"),
            Some(rules::MSG_NAME_TEXT)
        );

        form.set_text("supplier2_name", "Madurai Mills");
        let report = validate_field(&form, "supplier2_name", &ctx());
        assert_eq!(
            report.message_for("supplier2_name"),
            Some(rules::MSG_DISTINCT_SUPPLIER)
        );
    }

    #[test]
    fn radio_group_requires_a_pick() {
        let mut form = form();
        let report = validate_field(&form, "credit_limit_radio", &ctx());
        assert_eq!(
            report.message_for("credit_limit_radio"),
            Some(rules::MSG_RADIO_REQUIRED)
        );

        form.choose("credit_limit_radio", "no");
        let report = validate_field(&form, "credit_limit_radio", &ctx());
        assert!(report.is_valid());
    }

    #[test]
    fn credit_pair_required_once_requested() {
        let mut form = form();
        form.choose("credit_limit_radio", "yes");
        let report = validate_fields(&form, &["credit_limit_amount", "Cummulative"], &ctx());
        assert_eq!(
            report.message_for("credit_limit_amount"),
            Some(rules::MSG_CREDIT_REQUIRED)
        );
        assert_eq!(
            report.message_for("Cummulative"),
            Some(rules::MSG_CREDIT_REQUIRED)
        );

        form.set_text("credit_limit_amount", "0");
        let report = validate_field(&form, "credit_limit_amount", &ctx());
        assert_eq!(
            report.message_for("credit_limit_amount"),
            Some(rules::MSG_POSITIVE_AMOUNT)
        );
    }

    #[test]
    fn declaration_must_be_accepted() {
        let mut form = form();
        let report = validate_field(&form, "declaration", &ctx());
        assert_eq!(
            report.message_for("declaration"),
            Some(rules::MSG_DECLARATION)
        );

        form.set_checked("declaration", true);
        assert!(validate_field(&form, "declaration", &ctx()).is_valid());

        // The mirror checkbox has no acceptance rule
        assert!(validate_field(&form, "differentShipping", &ctx()).is_valid());
    }

    #[test]
    fn attachments_use_their_own_required_messages() {
        let report = validate_fields(&form(), &["photo", "sign"], &ctx());
        assert_eq!(report.message_for("photo"), Some(rules::MSG_PHOTO_REQUIRED));
        assert_eq!(report.message_for("sign"), Some(rules::MSG_SIGN_REQUIRED));
    }

    #[test]
    fn attachments_must_be_reasonably_sized_images() {
        let mut form = form();
        form.attach(
            "photo",
            FileUpload::from_bytes("notes.pdf", "application/pdf", vec![0; 10]),
        );
        let report = validate_field(&form, "photo", &ctx());
        assert_eq!(report.message_for("photo"), Some(rules::MSG_IMAGE_TYPE));

        form.attach(
            "photo",
            FileUpload {
                file_name: "huge.png".into(),
                mime_type: "image/png".into(),
                size: MAX_ATTACHMENT_BYTES + 1,
                content: None,
            },
        );
        let report = validate_field(&form, "photo", &ctx());
        assert_eq!(report.message_for("photo"), Some(rules::MSG_IMAGE_SIZE));

        form.attach(
            "photo",
            FileUpload::from_bytes("ok.png", "image/png", vec![0; 64]),
        );
        assert!(validate_field(&form, "photo", &ctx()).is_valid());
    }

    #[test]
    fn other_customer_type_message_depends_on_the_flag() {
        let mut form = form();
        let report = validate_field(&form, "otherCustomerType", &ctx());
        assert!(report.is_valid());

        form.set_required("otherCustomerType", true);
        let report = validate_field(&form, "otherCustomerType", &ctx());
        assert_eq!(
            report.message_for("otherCustomerType"),
            Some(rules::MSG_OTHER_TYPE_REQUIRED)
        );
    }

    #[test]
    fn gst_is_checked_against_the_pan_field() {
        let mut form = form();
        form.set_text("pan", "ABCDE1234F");
        form.set_text("gst", "22AAAAA0000A1Z5");
        let report = validate_field(&form, "gst", &ctx());
        assert_eq!(report.message_for("gst"), Some(rules::MSG_GST_PAN));

        form.set_text("gst", "22ABCDE1234F1Z5");
        assert!(validate_field(&form, "gst", &ctx()).is_valid());
    }
}
