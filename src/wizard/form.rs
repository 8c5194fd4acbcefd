//! Headless model of the onboarding form
//!
//! Holds every field of the eight step intake wizard together with its
//! current value and required flag. Field ids match the submission payload
//! keys so the controller can assemble the request straight from the model.

use std::collections::HashMap;

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    File,
    Checkbox,
    Radio,
}

/// An attachment staged on a file field. `content` is `None` when the
/// client could not read the file; the size still comes from the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub mime_type: String,
    pub size: usize,
    pub content: Option<Vec<u8>>,
}

impl FileUpload {
    pub fn from_bytes(file_name: &str, mime_type: &str, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.to_owned(),
            mime_type: mime_type.to_owned(),
            size: content.len(),
            content: Some(content),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    File(Option<FileUpload>),
    Checked(bool),
    Choice(Option<String>),
}

pub struct FieldDef {
    pub id: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

const fn req(id: &'static str) -> FieldDef {
    FieldDef {
        id,
        kind: FieldKind::Text,
        required: true,
    }
}

const fn opt(id: &'static str) -> FieldDef {
    FieldDef {
        id,
        kind: FieldKind::Text,
        required: false,
    }
}

/// Every field of the form in document order. Ids are the payload keys,
/// casing included.
pub const FIELDS: &[FieldDef] = &[
    // Sales person
    req("sales_name"),
    req("emp_id"),
    req("sales_email"),
    // Customer information
    req("customer_name"),
    req("company_name"),
    opt("commercial_name"),
    req("customer_address"),
    req("customerType"),
    opt("otherCustomerType"),
    req("Category"),
    req("pan"),
    req("gst"),
    req("year_incorporation"),
    req("area"),
    req("range"),
    req("Association_HBL"),
    // Company profile
    req("partner_company_name"),
    req("Status"),
    req("fy_20_21"),
    req("fy_21_22"),
    req("fy_22_23"),
    opt("branches_name"),
    opt("sister_Company_name"),
    FieldDef {
        id: "photo",
        kind: FieldKind::File,
        required: true,
    },
    // Registered address
    req("business_address1"),
    req("pin1"),
    req("city1"),
    req("state1"),
    req("country1"),
    req("contact1"),
    req("phone1"),
    opt("fax1"),
    req("email_id1"),
    req("designation1"),
    opt("mobile1"),
    // Shipping address; the checkbox mirrors the registered address when set
    FieldDef {
        id: "differentShipping",
        kind: FieldKind::Checkbox,
        required: false,
    },
    req("business_address2"),
    req("pin2"),
    req("city2"),
    req("state2"),
    req("country2"),
    req("contact2"),
    req("phone2"),
    opt("fax2"),
    req("email_id2"),
    req("designation2"),
    opt("mobile2"),
    // Bank details
    req("bank_name"),
    req("acc_number"),
    req("acc_type"),
    req("branch_name"),
    req("ifsc"),
    opt("limits"),
    req("security_cheque"),
    req("pdc_cheque"),
    // Suppliers
    req("supplier1_name"),
    req("supplier1_address"),
    req("supplier1_phone"),
    req("supplier1_contact"),
    opt("supplier1_payment"),
    req("supplier2_name"),
    req("supplier2_address"),
    req("supplier2_phone"),
    req("supplier2_contact"),
    opt("supplier2_payment"),
    // Declaration
    req("designation"),
    req("date"),
    FieldDef {
        id: "declaration",
        kind: FieldKind::Checkbox,
        required: false,
    },
    FieldDef {
        id: "sign",
        kind: FieldKind::File,
        required: true,
    },
    // Sales approval
    req("requesting_branch"),
    req("division"),
    req("credit_limit_req"),
    req("sales_head"),
    req("sales_ho"),
    req("estm"),
    opt("Requests"),
    // Accounts approval
    req("code_number"),
    opt("existing_code"),
    FieldDef {
        id: "credit_limit_radio",
        kind: FieldKind::Radio,
        required: true,
    },
    opt("credit_limit_amount"),
    opt("Cummulative"),
    req("credit_limit"),
    req("account_request"),
    req("account_request_name"),
    req("account_authorized"),
    req("account_authorized_name"),
    req("account_checked"),
    req("account_checked_name"),
    req("credit_approved"),
];

pub const SALES_PERSON_FIELDS: &[&str] = &["sales_name", "emp_id", "sales_email"];

pub const CUSTOMER_INFO_FIELDS: &[&str] = &[
    "customer_name",
    "company_name",
    "commercial_name",
    "customer_address",
    "customerType",
    "otherCustomerType",
    "Category",
    "pan",
    "gst",
    "year_incorporation",
    "area",
    "range",
    "Association_HBL",
];

pub const COMPANY_PROFILE_FIELDS: &[&str] = &[
    "partner_company_name",
    "Status",
    "fy_20_21",
    "fy_21_22",
    "fy_22_23",
    "branches_name",
    "sister_Company_name",
    "photo",
];

pub const REGISTERED_ADDRESS_FIELDS: &[&str] = &[
    "business_address1",
    "pin1",
    "city1",
    "state1",
    "country1",
    "contact1",
    "phone1",
    "fax1",
    "email_id1",
    "designation1",
    "mobile1",
];

pub const SHIPPING_ADDRESS_FIELDS: &[&str] = &[
    "business_address2",
    "pin2",
    "city2",
    "state2",
    "country2",
    "contact2",
    "phone2",
    "fax2",
    "email_id2",
    "designation2",
    "mobile2",
];

pub const BANK_DETAILS_FIELDS: &[&str] = &[
    "bank_name",
    "acc_number",
    "acc_type",
    "branch_name",
    "ifsc",
    "limits",
    "security_cheque",
    "pdc_cheque",
];

pub const SUPPLIER_ONE_FIELDS: &[&str] = &[
    "supplier1_name",
    "supplier1_address",
    "supplier1_phone",
    "supplier1_contact",
    "supplier1_payment",
];

pub const SUPPLIER_TWO_FIELDS: &[&str] = &[
    "supplier2_name",
    "supplier2_address",
    "supplier2_phone",
    "supplier2_contact",
    "supplier2_payment",
];

pub const DECLARATION_FIELDS: &[&str] = &["designation", "date", "declaration", "sign"];

pub const SALES_APPROVAL_FIELDS: &[&str] = &[
    "requesting_branch",
    "division",
    "credit_limit_req",
    "sales_head",
    "sales_ho",
    "estm",
    "Requests",
];

pub const ACCOUNTS_APPROVAL_FIELDS: &[&str] = &[
    "code_number",
    "existing_code",
    "credit_limit_radio",
    "credit_limit_amount",
    "Cummulative",
    "credit_limit",
    "account_request",
    "account_request_name",
    "account_authorized",
    "account_authorized_name",
    "account_checked",
    "account_checked_name",
    "credit_approved",
];

/// Registered to shipping field pairs copied when the addresses mirror.
pub const ADDRESS_COPY_PAIRS: &[(&str, &str)] = &[
    ("business_address1", "business_address2"),
    ("pin1", "pin2"),
    ("city1", "city2"),
    ("state1", "state2"),
    ("country1", "country2"),
    ("contact1", "contact2"),
    ("phone1", "phone2"),
    ("fax1", "fax2"),
    ("email_id1", "email_id2"),
    ("designation1", "designation2"),
    ("mobile1", "mobile2"),
];

struct Field {
    value: FieldValue,
    required: bool,
}

pub struct FormModel {
    fields: HashMap<&'static str, Field>,
}

impl FormModel {
    /// Fresh form with default values and required flags. The declaration
    /// date starts out at today, like the rendered form does.
    pub fn new(today: NaiveDate) -> Self {
        let mut model = Self {
            fields: HashMap::new(),
        };
        model.reset(today);
        model
    }

    pub fn reset(&mut self, today: NaiveDate) {
        self.fields.clear();
        for def in FIELDS {
            let value = match def.kind {
                FieldKind::Text => FieldValue::Text(String::new()),
                FieldKind::File => FieldValue::File(None),
                FieldKind::Checkbox => FieldValue::Checked(false),
                FieldKind::Radio => FieldValue::Choice(None),
            };
            self.fields.insert(
                def.id,
                Field {
                    value,
                    required: def.required,
                },
            );
        }
        self.set_text("date", &today.to_string());
    }

    pub fn value(&self, id: &str) -> Option<&FieldValue> {
        self.fields.get(id).map(|field| &field.value)
    }

    /// Raw text of a field; empty for non text fields and unknown ids.
    pub fn text(&self, id: &str) -> &str {
        match self.value(id) {
            Some(FieldValue::Text(value)) => value,
            _ => "",
        }
    }

    pub fn checked(&self, id: &str) -> bool {
        matches!(self.value(id), Some(FieldValue::Checked(true)))
    }

    pub fn choice(&self, id: &str) -> Option<&str> {
        match self.value(id) {
            Some(FieldValue::Choice(choice)) => choice.as_deref(),
            _ => None,
        }
    }

    pub fn file(&self, id: &str) -> Option<&FileUpload> {
        match self.value(id) {
            Some(FieldValue::File(upload)) => upload.as_ref(),
            _ => None,
        }
    }

    pub fn set_text(&mut self, id: &str, value: &str) {
        if let Some(Field {
            value: FieldValue::Text(current),
            ..
        }) = self.fields.get_mut(id)
        {
            *current = value.to_owned();
        }
    }

    pub fn set_checked(&mut self, id: &str, checked: bool) {
        if let Some(Field {
            value: FieldValue::Checked(current),
            ..
        }) = self.fields.get_mut(id)
        {
            *current = checked;
        }
    }

    pub fn choose(&mut self, id: &str, value: &str) {
        if let Some(Field {
            value: FieldValue::Choice(current),
            ..
        }) = self.fields.get_mut(id)
        {
            *current = Some(value.to_owned());
        }
    }

    pub fn attach(&mut self, id: &str, upload: FileUpload) {
        if let Some(Field {
            value: FieldValue::File(current),
            ..
        }) = self.fields.get_mut(id)
        {
            *current = Some(upload);
        }
    }

    pub fn is_required(&self, id: &str) -> bool {
        self.fields.get(id).is_some_and(|field| field.required)
    }

    pub fn set_required(&mut self, id: &str, required: bool) {
        if let Some(field) = self.fields.get_mut(id) {
            field.required = required;
        }
    }

    fn default_required(id: &str) -> bool {
        FIELDS
            .iter()
            .find(|def| def.id == id)
            .is_some_and(|def| def.required)
    }

    /// Copy every registered address value onto its shipping counterpart.
    pub fn copy_registered_to_shipping(&mut self) {
        for (from, to) in ADDRESS_COPY_PAIRS {
            let value = self.text(from).to_owned();
            self.set_text(to, &value);
        }
    }

    /// Mirrored addresses drop the required flags on the shipping side.
    pub fn relax_shipping_required(&mut self) {
        for (_, to) in ADDRESS_COPY_PAIRS {
            self.set_required(to, false);
        }
    }

    /// Unchecking the mirror restores the registry defaults, so fields
    /// that start out optional stay optional.
    pub fn restore_shipping_required(&mut self) {
        for (_, to) in ADDRESS_COPY_PAIRS {
            self.set_required(to, Self::default_required(to));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 24).unwrap()
    }

    #[test]
    fn new_form_seeds_defaults() {
        let form = FormModel::new(today());
        assert_eq!(form.text("customer_name"), "");
        assert_eq!(form.text("date"), "2026-08-24");
        assert!(!form.checked("differentShipping"));
        assert_eq!(form.choice("credit_limit_radio"), None);
        assert!(form.file("photo").is_none());
        assert!(form.is_required("pan"));
        assert!(!form.is_required("commercial_name"));
        assert!(!form.is_required("mobile2"));
        assert!(form.is_required("credit_limit_radio"));
    }

    #[test]
    fn setters_ignore_mismatched_kinds() {
        let mut form = FormModel::new(today());
        form.set_text("photo", "not a file");
        assert!(form.file("photo").is_none());
        form.set_checked("pan", true);
        assert_eq!(form.text("pan"), "");
    }

    #[test]
    fn copies_every_address_pair() {
        let mut form = FormModel::new(today());
        form.set_text("business_address1", "12 Mount Road ");
        form.set_text("pin1", "600002");
        form.set_text("city1", "Chennai");
        form.set_text("state1", "Tamil Nadu");
        form.set_text("country1", "India");
        form.set_text("contact1", "Asha Rao");
        form.set_text("phone1", "9840012345");
        form.set_text("fax1", "+4412345678");
        form.set_text("email_id1", "asha@rao.in");
        form.set_text("designation1", "Director");
        form.set_text("mobile1", "9840012346");

        form.copy_registered_to_shipping();

        for (from, to) in ADDRESS_COPY_PAIRS {
            assert_eq!(form.text(to), form.text(from), "{from} -> {to}");
        }
        // Values land verbatim, whitespace included
        assert_eq!(form.text("business_address2"), "12 Mount Road ");
    }

    #[test]
    fn restore_keeps_optional_fields_optional() {
        let mut form = FormModel::new(today());
        form.relax_shipping_required();
        assert!(!form.is_required("pin2"));

        form.restore_shipping_required();
        assert!(form.is_required("pin2"));
        assert!(form.is_required("phone2"));
        assert!(!form.is_required("mobile2"));
        assert!(!form.is_required("fax2"));
    }

    #[test]
    fn reset_clears_values_and_flags() {
        let mut form = FormModel::new(today());
        form.set_text("customer_name", "Asha Rao");
        form.set_required("otherCustomerType", true);
        form.choose("credit_limit_radio", "yes");
        form.attach("photo", FileUpload::from_bytes("p.png", "image/png", vec![1, 2, 3]));

        form.reset(today());

        assert_eq!(form.text("customer_name"), "");
        assert!(!form.is_required("otherCustomerType"));
        assert_eq!(form.choice("credit_limit_radio"), None);
        assert!(form.file("photo").is_none());
        assert_eq!(form.text("date"), "2026-08-24");
    }

    #[test]
    fn section_lists_cover_the_registry() {
        let mut listed: Vec<&str> = [
            SALES_PERSON_FIELDS,
            CUSTOMER_INFO_FIELDS,
            COMPANY_PROFILE_FIELDS,
            REGISTERED_ADDRESS_FIELDS,
            SHIPPING_ADDRESS_FIELDS,
            BANK_DETAILS_FIELDS,
            SUPPLIER_ONE_FIELDS,
            SUPPLIER_TWO_FIELDS,
            DECLARATION_FIELDS,
            SALES_APPROVAL_FIELDS,
            ACCOUNTS_APPROVAL_FIELDS,
        ]
        .concat();
        // The mirror checkbox is a control, not part of any validated list
        listed.push("differentShipping");

        assert_eq!(listed.len(), FIELDS.len());
        for def in FIELDS {
            assert!(listed.contains(&def.id), "{} missing from sections", def.id);
        }
    }
}
