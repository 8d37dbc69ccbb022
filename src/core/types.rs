use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Maximum length of a SAC (Services Accounting Code).
pub const MAX_SAC_CODE_LEN: usize = 10;

/// Maximum number of line items on one invoice.
pub const MAX_LINE_ITEMS: usize = 10_000;

/// Largest magnitude accepted for one line amount (one crore crore rupees
/// times ten). Keeps every total well inside `Decimal`'s range.
pub const MAX_LINE_AMOUNT: Decimal = dec!(1000000000000000);

/// Highest accepted GST rate percentage.
pub const MAX_TAX_RATE: Decimal = dec!(100);

/// The user-editable content of a tax invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDetails {
    /// Seller company name.
    pub from_company: String,
    /// Seller GSTIN.
    #[serde(rename = "fromGST")]
    pub from_gst: String,
    /// Bill number, without the financial-year suffix.
    pub bill_number: String,
    /// Financial year label, e.g. "25-26". Free text.
    pub year: String,
    /// Invoice date.
    pub date: NaiveDate,
    /// Buyer company name.
    pub to_company: String,
    /// Buyer postal address, may span several lines.
    pub to_address: String,
    /// Buyer GSTIN.
    #[serde(rename = "toGSTIN")]
    pub to_gstin: String,
    /// Project or site the work was done for.
    pub project: String,
    /// Billed lines, in display order.
    pub line_items: Vec<LineItem>,
    /// How tax is presented.
    pub tax_type: TaxType,
    /// GST rate percentage.
    pub tax_rate: Decimal,
}

/// A single billed service line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Free-text description of the work billed.
    #[serde(default)]
    pub description: String,
    /// SAC code (up to 10 characters, e.g. "995473").
    #[serde(default)]
    pub sac_code: String,
    /// Line amount in rupees. Absent amounts count as zero.
    #[serde(default)]
    pub amount: Decimal,
}

impl LineItem {
    pub fn new(description: impl Into<String>, sac_code: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            sac_code: sac_code.into(),
            amount,
        }
    }

    /// An empty row, as appended by the "add line" action.
    pub fn blank() -> Self {
        Self::new("", "", Decimal::ZERO)
    }
}

/// How the single computed GST amount is presented on the invoice.
///
/// The tax type never changes the amount of tax; it only decides whether
/// the amount is shown as one inter-state IGST line or split into two
/// equal intra-state CGST and SGST lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxType {
    /// Integrated GST (inter-state supply).
    #[serde(rename = "IGST")]
    Igst,
    /// Central + State GST (intra-state supply), halved on display.
    #[default]
    #[serde(rename = "CGST+SGST")]
    CgstSgst,
}

impl TaxType {
    /// Label used on the form and in serialized data.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Igst => "IGST",
            Self::CgstSgst => "CGST+SGST",
        }
    }

    /// Parse from the label ("IGST" or "CGST+SGST").
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "IGST" => Some(Self::Igst),
            "CGST+SGST" => Some(Self::CgstSgst),
            _ => None,
        }
    }

    /// Split `tax_amount` charged at `rate` percent into display components.
    ///
    /// Amounts are not rounded here; the renderer rounds for display.
    pub fn components(&self, tax_amount: Decimal, rate: Decimal) -> Vec<TaxComponent> {
        match self {
            Self::Igst => vec![TaxComponent {
                label: "IGST",
                rate,
                amount: tax_amount,
            }],
            Self::CgstSgst => {
                let half_rate = rate / dec!(2);
                let half_amount = tax_amount / dec!(2);
                vec![
                    TaxComponent {
                        label: "CGST",
                        rate: half_rate,
                        amount: half_amount,
                    },
                    TaxComponent {
                        label: "SGST",
                        rate: half_rate,
                        amount: half_amount,
                    },
                ]
            }
        }
    }
}

impl std::fmt::Display for TaxType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One displayed tax line (e.g. "CGST 9%").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxComponent {
    /// "IGST", "CGST" or "SGST".
    pub label: &'static str,
    /// Rate percentage for this component.
    pub rate: Decimal,
    /// Unrounded tax amount for this component.
    pub amount: Decimal,
}

/// Derived invoice totals.
///
/// Invariant: `grand_total == subtotal + tax_amount` and
/// `tax_amount == subtotal * rate / 100`, exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Sum of all line amounts.
    pub subtotal: Decimal,
    /// Total GST on the subtotal.
    pub tax_amount: Decimal,
    /// Subtotal plus tax.
    pub grand_total: Decimal,
}
