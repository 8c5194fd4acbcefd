use serde::{Deserialize, Serialize};

/// Registered address block, nested under `address1` on the wire.
/// Field names carry the `1` suffix of the intake form ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisteredAddress {
    pub business_address1: String,
    pub pin1: String,
    pub city1: String,
    pub state1: String,
    pub country1: String,
    pub contact1: String,
    pub phone1: String,
    pub fax1: String,
    pub email_id1: String,
    pub designation1: String,
    pub mobile1: String,
}

/// Shipping address block, nested under `address2` on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingAddress {
    pub business_address2: String,
    pub pin2: String,
    pub city2: String,
    pub state2: String,
    pub country2: String,
    pub contact2: String,
    pub phone2: String,
    pub fax2: String,
    pub email_id2: String,
    pub designation2: String,
    pub mobile2: String,
}

/// The full submission as posted by the wizard. Wire keys are the intake
/// form field ids verbatim, casing quirks included, so renames cover the
/// handful that are not snake_case. Missing keys deserialize to empty
/// values and fail the same validation as empty inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionPayload {
    pub sales_name: String,
    pub emp_id: String,
    pub sales_email: String,

    pub customer_name: String,
    pub company_name: String,
    pub commercial_name: String,
    pub customer_address: String,
    #[serde(rename = "customerType")]
    pub customer_type: String,
    #[serde(rename = "otherCustomerType")]
    pub other_customer_type: String,
    #[serde(rename = "Category")]
    pub category: String,
    pub pan: String,
    pub gst: String,
    pub year_incorporation: String,
    pub area: String,
    pub range: String,
    #[serde(rename = "Association_HBL")]
    pub association_hbl: String,

    pub partner_company_name: String,
    #[serde(rename = "Status")]
    pub status: String,
    pub fy_20_21: String,
    pub fy_21_22: String,
    pub fy_22_23: String,
    pub branches_name: String,
    #[serde(rename = "sister_Company_name")]
    pub sister_company_name: String,
    /// Base64 image; None when the client could not read the file
    pub photo: Option<String>,

    pub address1: RegisteredAddress,
    pub address2: ShippingAddress,
    /// True when shipping mirrors the registered address; the server then
    /// writes no shipping row
    #[serde(rename = "differentShipping")]
    pub different_shipping: bool,

    pub bank_name: String,
    pub acc_number: String,
    pub acc_type: String,
    pub branch_name: String,
    pub ifsc: String,
    pub limits: String,
    pub security_cheque: String,
    pub pdc_cheque: String,

    pub supplier1_name: String,
    pub supplier1_address: String,
    pub supplier1_phone: String,
    pub supplier1_contact: String,
    pub supplier1_payment: String,
    pub supplier2_name: String,
    pub supplier2_address: String,
    pub supplier2_phone: String,
    pub supplier2_contact: String,
    pub supplier2_payment: String,

    pub designation: String,
    pub date: String,
    /// Base64 sign and seal image; None when the client could not read it
    pub sign: Option<String>,

    pub requesting_branch: String,
    pub division: String,
    pub credit_limit_req: String,
    pub sales_head: String,
    pub sales_ho: String,
    pub estm: String,
    #[serde(rename = "Requests")]
    pub requests: String,

    pub code_number: String,
    pub existing_code: String,
    pub credit_limit_radio: Option<String>,
    pub credit_limit_amount: String,
    #[serde(rename = "Cummulative")]
    pub cumulative: String,
    pub credit_limit: String,
    pub account_request: String,
    pub account_request_name: String,
    pub account_authorized: String,
    pub account_authorized_name: String,
    pub account_checked: String,
    pub account_checked_name: String,
    pub credit_approved: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
