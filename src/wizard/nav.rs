//! Wizard navigation
//!
//! The eight step sequence with the two stage address and supplier steps
//! folded in. `reduce` is a pure transition: it never mutates the form,
//! it reports which sections it validated and whether the shipping
//! address must be copied, and the controller applies both.

use crate::wizard::form::{
    ACCOUNTS_APPROVAL_FIELDS, BANK_DETAILS_FIELDS, COMPANY_PROFILE_FIELDS, CUSTOMER_INFO_FIELDS,
    DECLARATION_FIELDS, FormModel, REGISTERED_ADDRESS_FIELDS, SALES_APPROVAL_FIELDS,
    SALES_PERSON_FIELDS, SHIPPING_ADDRESS_FIELDS, SUPPLIER_ONE_FIELDS, SUPPLIER_TWO_FIELDS,
};
use crate::wizard::validate::{self, SectionReport, ValidationCtx};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    SalesPerson,
    CustomerInfo,
    CompanyProfile,
    Address,
    Suppliers,
    Declaration,
    SalesApproval,
    AccountsApproval,
}

/// Step order of the wizard.
pub const STEPS: &[Section] = &[
    Section::SalesPerson,
    Section::CustomerInfo,
    Section::CompanyProfile,
    Section::Address,
    Section::Suppliers,
    Section::Declaration,
    Section::SalesApproval,
    Section::AccountsApproval,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressSub {
    Registered,
    Shipping,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupplierSub {
    First,
    Second,
}

/// The parts a step breaks into for validation and error reporting. The
/// address and supplier steps have one part per sub section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionPart {
    SalesPerson,
    CustomerInfo,
    CompanyProfile,
    RegisteredAddress,
    ShippingAddress,
    BankDetails,
    SupplierOne,
    SupplierTwo,
    Declaration,
    SalesApproval,
    AccountsApproval,
}

pub const ALL_PARTS: &[SectionPart] = &[
    SectionPart::SalesPerson,
    SectionPart::CustomerInfo,
    SectionPart::CompanyProfile,
    SectionPart::RegisteredAddress,
    SectionPart::ShippingAddress,
    SectionPart::BankDetails,
    SectionPart::SupplierOne,
    SectionPart::SupplierTwo,
    SectionPart::Declaration,
    SectionPart::SalesApproval,
    SectionPart::AccountsApproval,
];

impl SectionPart {
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            SectionPart::SalesPerson => SALES_PERSON_FIELDS,
            SectionPart::CustomerInfo => CUSTOMER_INFO_FIELDS,
            SectionPart::CompanyProfile => COMPANY_PROFILE_FIELDS,
            SectionPart::RegisteredAddress => REGISTERED_ADDRESS_FIELDS,
            SectionPart::ShippingAddress => SHIPPING_ADDRESS_FIELDS,
            SectionPart::BankDetails => BANK_DETAILS_FIELDS,
            SectionPart::SupplierOne => SUPPLIER_ONE_FIELDS,
            SectionPart::SupplierTwo => SUPPLIER_TWO_FIELDS,
            SectionPart::Declaration => DECLARATION_FIELDS,
            SectionPart::SalesApproval => SALES_APPROVAL_FIELDS,
            SectionPart::AccountsApproval => ACCOUNTS_APPROVAL_FIELDS,
        }
    }

    /// Index of the step this part is shown on.
    pub fn step(&self) -> usize {
        match self {
            SectionPart::SalesPerson => 0,
            SectionPart::CustomerInfo => 1,
            SectionPart::CompanyProfile => 2,
            SectionPart::RegisteredAddress | SectionPart::ShippingAddress => 3,
            SectionPart::BankDetails | SectionPart::SupplierOne | SectionPart::SupplierTwo => 4,
            SectionPart::Declaration => 5,
            SectionPart::SalesApproval => 6,
            SectionPart::AccountsApproval => 7,
        }
    }
}

/// The part a field belongs to.
pub fn part_of(field: &str) -> Option<SectionPart> {
    ALL_PARTS
        .iter()
        .copied()
        .find(|part| part.fields().contains(&field))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardState {
    pub step: usize,
    pub address_sub: AddressSub,
    pub supplier_sub: SupplierSub,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            step: 0,
            address_sub: AddressSub::Registered,
            supplier_sub: SupplierSub::First,
        }
    }

    pub fn section(&self) -> Section {
        STEPS[self.step]
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    Next,
    Prev,
    /// Pagination jump to a step index
    Goto(usize),
    /// Breadcrumb jump inside the address step
    AddressTab(AddressSub),
    /// Breadcrumb jump inside the supplier step
    SupplierTab(SupplierSub),
}

pub struct NavOutcome {
    pub state: WizardState,
    /// The registered address must be copied onto the shipping side
    pub copy_shipping: bool,
    /// Every section validated during this transition, pass or fail
    pub reports: Vec<(SectionPart, SectionReport)>,
}

fn run(
    form: &FormModel,
    ctx: &ValidationCtx,
    part: SectionPart,
    reports: &mut Vec<(SectionPart, SectionReport)>,
) -> bool {
    let report = validate::validate_fields(form, part.fields(), ctx);
    let ok = report.is_valid();
    reports.push((part, report));
    ok
}

/// A step entered from outside always starts on its first sub section;
/// only `Prev` walks back onto a later one.
fn enter(state: &mut WizardState, step: usize) {
    state.step = step;
    state.address_sub = AddressSub::Registered;
    state.supplier_sub = SupplierSub::First;
}

/// Apply one navigation event.
///
/// Moving forward validates the visible sub section first and stays put
/// on failure. Moving backward never validates. A forward pagination jump
/// gates on the current sub section only; when an inner machine still has
/// a sub section to go, the jump advances that machine instead. Any step
/// entered from outside starts on its first sub section; only `Prev`
/// resumes on the sub section the user would have left from.
pub fn reduce(
    state: WizardState,
    event: NavEvent,
    form: &FormModel,
    ctx: &ValidationCtx,
) -> NavOutcome {
    let mirrored = form.checked("differentShipping");
    let mut out = NavOutcome {
        state,
        copy_shipping: false,
        reports: Vec::new(),
    };

    match event {
        NavEvent::Next => match state.section() {
            Section::Address => match state.address_sub {
                AddressSub::Registered => {
                    if run(form, ctx, SectionPart::RegisteredAddress, &mut out.reports) {
                        out.state.address_sub = AddressSub::Shipping;
                        if mirrored {
                            out.copy_shipping = true;
                        }
                    }
                }
                AddressSub::Shipping => {
                    if mirrored {
                        out.copy_shipping = true;
                        enter(&mut out.state, state.step + 1);
                    } else if run(form, ctx, SectionPart::ShippingAddress, &mut out.reports) {
                        enter(&mut out.state, state.step + 1);
                    }
                }
            },
            Section::Suppliers => match state.supplier_sub {
                SupplierSub::First => {
                    // Bank details sit above the supplier tabs and gate them
                    if run(form, ctx, SectionPart::BankDetails, &mut out.reports)
                        && run(form, ctx, SectionPart::SupplierOne, &mut out.reports)
                    {
                        out.state.supplier_sub = SupplierSub::Second;
                    }
                }
                SupplierSub::Second => {
                    if run(form, ctx, SectionPart::SupplierTwo, &mut out.reports) {
                        enter(&mut out.state, state.step + 1);
                    }
                }
            },
            section => {
                if state.step + 1 < STEPS.len() {
                    if let Some(part) = simple_part(section) {
                        if run(form, ctx, part, &mut out.reports) {
                            enter(&mut out.state, state.step + 1);
                        }
                    }
                }
            }
        },
        NavEvent::Prev => match state.section() {
            Section::Address if state.address_sub == AddressSub::Shipping => {
                out.state.address_sub = AddressSub::Registered;
            }
            Section::Suppliers if state.supplier_sub == SupplierSub::Second => {
                out.state.supplier_sub = SupplierSub::First;
            }
            Section::Suppliers => {
                out.state.step -= 1;
                // Land on the sub section the user would have left from
                out.state.address_sub = if mirrored {
                    AddressSub::Registered
                } else {
                    AddressSub::Shipping
                };
            }
            _ => {
                if state.step > 0 {
                    out.state.step -= 1;
                    if out.state.section() == Section::Suppliers {
                        // The screen before the declaration is the second
                        // supplier, however the user got to the declaration
                        out.state.supplier_sub = SupplierSub::Second;
                    }
                }
            }
        },
        NavEvent::Goto(target) => {
            if target >= STEPS.len() || target == state.step {
                return out;
            }
            if target < state.step {
                enter(&mut out.state, target);
                return out;
            }
            match state.section() {
                Section::Address => match state.address_sub {
                    AddressSub::Registered => {
                        if run(form, ctx, SectionPart::RegisteredAddress, &mut out.reports) {
                            out.state.address_sub = AddressSub::Shipping;
                            if mirrored {
                                out.copy_shipping = true;
                            }
                        }
                    }
                    AddressSub::Shipping => {
                        if mirrored {
                            out.copy_shipping = true;
                            enter(&mut out.state, target);
                        } else if run(form, ctx, SectionPart::ShippingAddress, &mut out.reports) {
                            enter(&mut out.state, target);
                        }
                    }
                },
                Section::Suppliers => match state.supplier_sub {
                    SupplierSub::First => {
                        if run(form, ctx, SectionPart::BankDetails, &mut out.reports)
                            && run(form, ctx, SectionPart::SupplierOne, &mut out.reports)
                        {
                            out.state.supplier_sub = SupplierSub::Second;
                        }
                    }
                    SupplierSub::Second => {
                        if run(form, ctx, SectionPart::SupplierTwo, &mut out.reports) {
                            enter(&mut out.state, target);
                        }
                    }
                },
                section => {
                    if let Some(part) = simple_part(section) {
                        if run(form, ctx, part, &mut out.reports) {
                            enter(&mut out.state, target);
                        }
                    }
                }
            }
        }
        NavEvent::AddressTab(target_sub) => {
            if state.section() == Section::Address {
                match target_sub {
                    AddressSub::Shipping => {
                        if run(form, ctx, SectionPart::RegisteredAddress, &mut out.reports) {
                            out.state.address_sub = AddressSub::Shipping;
                            if mirrored {
                                out.copy_shipping = true;
                            }
                        }
                    }
                    AddressSub::Registered => {
                        out.state.address_sub = AddressSub::Registered;
                    }
                }
            }
        }
        NavEvent::SupplierTab(target_sub) => {
            if state.section() == Section::Suppliers {
                match target_sub {
                    SupplierSub::Second => {
                        if run(form, ctx, SectionPart::BankDetails, &mut out.reports)
                            && run(form, ctx, SectionPart::SupplierOne, &mut out.reports)
                        {
                            out.state.supplier_sub = SupplierSub::Second;
                        }
                    }
                    SupplierSub::First => {
                        out.state.supplier_sub = SupplierSub::First;
                    }
                }
            }
        }
    }

    out
}

fn simple_part(section: Section) -> Option<SectionPart> {
    match section {
        Section::SalesPerson => Some(SectionPart::SalesPerson),
        Section::CustomerInfo => Some(SectionPart::CustomerInfo),
        Section::CompanyProfile => Some(SectionPart::CompanyProfile),
        Section::Declaration => Some(SectionPart::Declaration),
        Section::SalesApproval => Some(SectionPart::SalesApproval),
        Section::AccountsApproval => Some(SectionPart::AccountsApproval),
        Section::Address | Section::Suppliers => None,
    }
}
