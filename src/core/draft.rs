use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use super::error::BeejakError;
use super::fiscal_year::FinancialYear;
use super::profile::SellerProfile;
use super::snapshot::InvoiceSnapshot;
use super::totals::compute_totals;
use super::types::*;

/// A single-field change to a line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineItemEdit {
    Description(String),
    SacCode(String),
    Amount(Decimal),
}

/// The editable working copy of an invoice.
///
/// Created with the seller profile's defaults, mutated field by field as the
/// user types, and frozen into an [`InvoiceSnapshot`] by [`generate`].
///
/// ```
/// use beejak::core::*;
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
///
/// let mut draft = InvoiceDraft::new(&SellerProfile::default(), NaiveDate::from_ymd_opt(2025, 4, 2).unwrap());
/// draft.set_tax_type(TaxType::Igst);
/// draft.update_line_item(0, LineItemEdit::Amount(dec!(10000))).unwrap();
/// assert_eq!(draft.totals().grand_total, dec!(11800));
/// ```
///
/// [`generate`]: InvoiceDraft::generate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDraft {
    details: InvoiceDetails,
    profile: SellerProfile,
}

impl InvoiceDraft {
    /// New draft dated `date`, prefilled from `profile`.
    pub fn new(profile: &SellerProfile, date: NaiveDate) -> Self {
        Self {
            details: InvoiceDetails {
                from_company: profile.company.clone(),
                from_gst: profile.gstin.clone(),
                bill_number: String::new(),
                year: FinancialYear::containing(date).label(),
                date,
                to_company: String::new(),
                to_address: String::new(),
                to_gstin: String::new(),
                project: String::new(),
                line_items: profile.seed_items.clone(),
                tax_type: profile.tax_type,
                tax_rate: profile.tax_rate,
            },
            profile: profile.clone(),
        }
    }

    /// New draft dated today (local time).
    pub fn for_today(profile: &SellerProfile) -> Self {
        Self::new(profile, chrono::Local::now().date_naive())
    }

    /// Resume editing from previously saved details.
    pub fn from_details(details: InvoiceDetails, profile: &SellerProfile) -> Result<Self, BeejakError> {
        check_line_count(details.line_items.len())?;
        check_tax_rate(details.tax_rate)?;
        for item in &details.line_items {
            check_sac_code(&item.sac_code)?;
            check_line_amount(item.amount)?;
        }
        debug!(
            lines = details.line_items.len(),
            bill_number = %details.bill_number,
            "restored invoice draft"
        );
        Ok(Self {
            details,
            profile: profile.clone(),
        })
    }

    pub fn details(&self) -> &InvoiceDetails {
        &self.details
    }

    pub fn profile(&self) -> &SellerProfile {
        &self.profile
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.details.line_items
    }

    pub fn set_from_company(&mut self, name: impl Into<String>) {
        self.details.from_company = name.into();
    }

    pub fn set_from_gst(&mut self, gstin: impl Into<String>) {
        self.details.from_gst = gstin.into();
    }

    pub fn set_bill_number(&mut self, number: impl Into<String>) {
        self.details.bill_number = number.into();
    }

    pub fn set_year(&mut self, year: impl Into<String>) {
        self.details.year = year.into();
    }

    /// Change the invoice date. The year label is left as the user set it.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.details.date = date;
    }

    pub fn set_to_company(&mut self, name: impl Into<String>) {
        self.details.to_company = name.into();
    }

    pub fn set_to_address(&mut self, address: impl Into<String>) {
        self.details.to_address = address.into();
    }

    pub fn set_to_gstin(&mut self, gstin: impl Into<String>) {
        self.details.to_gstin = gstin.into();
    }

    pub fn set_project(&mut self, project: impl Into<String>) {
        self.details.project = project.into();
    }

    pub fn set_tax_type(&mut self, tax_type: TaxType) {
        self.details.tax_type = tax_type;
    }

    /// Set the GST rate percentage; must lie within `0..=MAX_TAX_RATE`.
    pub fn set_tax_rate(&mut self, rate: Decimal) -> Result<(), BeejakError> {
        check_tax_rate(rate)?;
        self.details.tax_rate = rate;
        Ok(())
    }

    /// Append an empty line item and return its index.
    pub fn add_line_item(&mut self) -> Result<usize, BeejakError> {
        self.push_line_item(LineItem::blank())
    }

    /// Append a filled line item and return its index.
    pub fn push_line_item(&mut self, item: LineItem) -> Result<usize, BeejakError> {
        check_line_count(self.details.line_items.len() + 1)?;
        check_sac_code(&item.sac_code)?;
        check_line_amount(item.amount)?;
        self.details.line_items.push(item);
        Ok(self.details.line_items.len() - 1)
    }

    /// Remove and return the line item at `index`.
    pub fn remove_line_item(&mut self, index: usize) -> Result<LineItem, BeejakError> {
        self.check_index(index)?;
        Ok(self.details.line_items.remove(index))
    }

    /// Apply a single-field edit to the line item at `index`.
    pub fn update_line_item(&mut self, index: usize, edit: LineItemEdit) -> Result<(), BeejakError> {
        self.check_index(index)?;
        match &edit {
            LineItemEdit::SacCode(code) => check_sac_code(code)?,
            LineItemEdit::Amount(amount) => check_line_amount(*amount)?,
            LineItemEdit::Description(_) => {}
        }
        let item = &mut self.details.line_items[index];
        match edit {
            LineItemEdit::Description(text) => item.description = text,
            LineItemEdit::SacCode(code) => item.sac_code = code,
            LineItemEdit::Amount(amount) => item.amount = amount,
        }
        Ok(())
    }

    /// Live totals for the current state of the draft.
    pub fn totals(&self) -> Totals {
        compute_totals(&self.details.line_items, self.details.tax_rate)
    }

    /// Freeze the draft into an invoice snapshot.
    ///
    /// A blank seller name or GSTIN falls back to the profile's value.
    /// Totals are computed once here and never again for this snapshot.
    pub fn generate(&self) -> InvoiceSnapshot {
        let mut details = self.details.clone();
        if details.from_company.trim().is_empty() {
            details.from_company = self.profile.company.clone();
        }
        if details.from_gst.trim().is_empty() {
            details.from_gst = self.profile.gstin.clone();
        }

        let totals = compute_totals(&details.line_items, details.tax_rate);
        debug!(
            lines = details.line_items.len(),
            subtotal = %totals.subtotal,
            grand_total = %totals.grand_total,
            tax_type = %details.tax_type,
            "generated invoice snapshot"
        );
        InvoiceSnapshot::new(details, totals)
    }

    fn check_index(&self, index: usize) -> Result<(), BeejakError> {
        let len = self.details.line_items.len();
        if index >= len {
            return Err(BeejakError::Draft(format!(
                "line item index {index} out of range ({len} items)"
            )));
        }
        Ok(())
    }
}

fn check_line_count(count: usize) -> Result<(), BeejakError> {
    if count > MAX_LINE_ITEMS {
        return Err(BeejakError::Draft(format!(
            "invoice cannot have more than {MAX_LINE_ITEMS} line items"
        )));
    }
    Ok(())
}

pub(super) fn check_line_amount(amount: Decimal) -> Result<(), BeejakError> {
    if amount.abs() > MAX_LINE_AMOUNT {
        return Err(BeejakError::InvalidAmount(format!(
            "line amount {amount} exceeds {MAX_LINE_AMOUNT}"
        )));
    }
    Ok(())
}

pub(super) fn check_tax_rate(rate: Decimal) -> Result<(), BeejakError> {
    if rate < Decimal::ZERO || rate > MAX_TAX_RATE {
        return Err(BeejakError::InvalidAmount(format!(
            "tax rate {rate}% is outside 0 to {MAX_TAX_RATE}"
        )));
    }
    Ok(())
}

fn check_sac_code(code: &str) -> Result<(), BeejakError> {
    if code.chars().count() > MAX_SAC_CODE_LEN {
        return Err(BeejakError::Draft(format!(
            "SAC code '{code}' exceeds {MAX_SAC_CODE_LEN} characters"
        )));
    }
    Ok(())
}
