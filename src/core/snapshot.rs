use serde::Serialize;

use super::types::{InvoiceDetails, TaxComponent, Totals};

/// A finalized invoice: the details as they were at generation time plus
/// the totals computed from them.
///
/// Snapshots are read-only. The only way to obtain one is
/// [`InvoiceDraft::generate`](super::InvoiceDraft::generate), so the totals
/// always match the line items and rate they were computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSnapshot {
    #[serde(flatten)]
    details: InvoiceDetails,
    #[serde(flatten)]
    totals: Totals,
}

impl InvoiceSnapshot {
    pub(crate) fn new(details: InvoiceDetails, totals: Totals) -> Self {
        Self { details, totals }
    }

    pub fn details(&self) -> &InvoiceDetails {
        &self.details
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    /// Tax lines to print: one IGST line, or CGST and SGST halves.
    pub fn tax_components(&self) -> Vec<TaxComponent> {
        self.details
            .tax_type
            .components(self.totals.tax_amount, self.details.tax_rate)
    }

    /// Bill number as printed: "101/25-26", "101" without a year, or just
    /// the year when no bill number was entered.
    pub fn bill_number_display(&self) -> String {
        let InvoiceDetails {
            bill_number, year, ..
        } = &self.details;
        match (bill_number.is_empty(), year.is_empty()) {
            (false, false) => format!("{bill_number}/{year}"),
            (false, true) => bill_number.clone(),
            (true, _) => year.clone(),
        }
    }

    /// The editable details without computed totals, for resuming editing.
    pub fn to_details(&self) -> InvoiceDetails {
        self.details.clone()
    }
}
