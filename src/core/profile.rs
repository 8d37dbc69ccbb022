use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::types::{LineItem, TaxType};

/// Seller identity and form defaults.
///
/// The seller of a single-firm invoice book is fixed, so its name and GSTIN
/// are preset on every new draft and used as fallbacks when the user blanks
/// them out before generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SellerProfile {
    /// Seller company name printed on the invoice.
    pub company: String,
    /// Seller GSTIN.
    pub gstin: String,
    /// Tax type preselected on new drafts.
    pub tax_type: TaxType,
    /// GST rate percentage preselected on new drafts.
    pub tax_rate: Decimal,
    /// Line items a new draft starts with.
    pub seed_items: Vec<LineItem>,
}

impl Default for SellerProfile {
    fn default() -> Self {
        Self {
            company: "Vedant Enterprises".to_string(),
            gstin: "29BMXPK4818G2ZD".to_string(),
            tax_type: TaxType::CgstSgst,
            tax_rate: dec!(18),
            seed_items: vec![LineItem::new(
                "RA 01 Bill for Painting work as per the attached Annexure",
                "995473",
                Decimal::ZERO,
            )],
        }
    }
}

impl SellerProfile {
    pub fn new(company: impl Into<String>, gstin: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            gstin: gstin.into(),
            ..Self::default()
        }
    }

    pub fn tax(mut self, tax_type: TaxType, rate: Decimal) -> Self {
        self.tax_type = tax_type;
        self.tax_rate = rate;
        self
    }

    pub fn seed_items(mut self, items: Vec<LineItem>) -> Self {
        self.seed_items = items;
        self
    }
}
