//! JSON boundary for form data.
//!
//! Form hosts send whatever the user has typed so far: every field is
//! optional, and amounts may arrive as numbers, numeric strings, or not at
//! all. Missing fields take the seller profile's defaults and unreadable
//! amounts count as zero.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use super::draft::{InvoiceDraft, check_line_amount, check_tax_rate};
use super::error::BeejakError;
use super::fiscal_year::FinancialYear;
use super::profile::SellerProfile;
use super::snapshot::InvoiceSnapshot;
use super::types::{InvoiceDetails, LineItem, TaxType};

/// Form data with every field optional, as posted by a form host.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialDraft {
    pub from_company: Option<String>,
    #[serde(rename = "fromGST")]
    pub from_gst: Option<String>,
    pub bill_number: Option<String>,
    pub year: Option<String>,
    pub date: Option<String>,
    pub to_company: Option<String>,
    pub to_address: Option<String>,
    #[serde(rename = "toGSTIN")]
    pub to_gstin: Option<String>,
    pub project: Option<String>,
    pub line_items: Option<Vec<PartialLineItem>>,
    pub tax_type: Option<String>,
    pub tax_rate: Option<Value>,
}

/// A line item as posted by a form host.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialLineItem {
    pub description: Option<String>,
    pub sac_code: Option<String>,
    pub amount: Option<Value>,
}

impl PartialLineItem {
    fn into_line_item(self) -> Result<LineItem, BeejakError> {
        Ok(LineItem {
            description: self.description.unwrap_or_default(),
            sac_code: self.sac_code.unwrap_or_default(),
            amount: lenient_decimal(self.amount.as_ref(), "amount")?.unwrap_or(Decimal::ZERO),
        })
    }
}

impl InvoiceDraft {
    /// Merge posted form data over the profile's defaults.
    ///
    /// `today` is used when no date (or an unreadable one) was posted.
    pub fn from_partial(
        partial: PartialDraft,
        profile: &SellerProfile,
        today: NaiveDate,
    ) -> Result<Self, BeejakError> {
        let defaults = InvoiceDraft::new(profile, today).details().clone();

        let date = match partial.date.as_deref().map(str::trim) {
            None | Some("") => defaults.date,
            Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap_or_else(|_| {
                warn!(date = text, "unreadable invoice date, using today");
                defaults.date
            }),
        };

        let tax_type = match partial.tax_type.as_deref() {
            None => defaults.tax_type,
            Some(label) => TaxType::from_label(label).unwrap_or_else(|| {
                warn!(tax_type = label, "unknown tax type, using profile default");
                defaults.tax_type
            }),
        };

        let tax_rate = lenient_decimal(partial.tax_rate.as_ref(), "taxRate")?.unwrap_or(defaults.tax_rate);

        let details = InvoiceDetails {
            from_company: partial.from_company.unwrap_or(defaults.from_company),
            from_gst: partial.from_gst.unwrap_or(defaults.from_gst),
            bill_number: partial.bill_number.unwrap_or_default(),
            year: partial
                .year
                .unwrap_or_else(|| FinancialYear::containing(date).label()),
            date,
            to_company: partial.to_company.unwrap_or_default(),
            to_address: partial.to_address.unwrap_or_default(),
            to_gstin: partial.to_gstin.unwrap_or_default(),
            project: partial.project.unwrap_or_default(),
            line_items: match partial.line_items {
                Some(items) => items
                    .into_iter()
                    .map(PartialLineItem::into_line_item)
                    .collect::<Result<_, _>>()?,
                None => defaults.line_items,
            },
            tax_type,
            tax_rate,
        };

        InvoiceDraft::from_details(details, profile)
    }

    /// Parse posted form JSON and merge it over the profile's defaults.
    pub fn from_json(json: &str, profile: &SellerProfile, today: NaiveDate) -> Result<Self, BeejakError> {
        let partial: PartialDraft =
            serde_json::from_str(json).map_err(|e| BeejakError::Json(e.to_string()))?;
        Self::from_partial(partial, profile, today)
    }

    /// Serialize the draft's details (camelCase field names).
    pub fn to_json(&self) -> Result<String, BeejakError> {
        serde_json::to_string_pretty(self.details()).map_err(|e| BeejakError::Json(e.to_string()))
    }
}

impl SellerProfile {
    /// Load a profile; absent fields keep the built-in defaults.
    pub fn from_json(json: &str) -> Result<Self, BeejakError> {
        let profile: SellerProfile =
            serde_json::from_str(json).map_err(|e| BeejakError::Json(e.to_string()))?;
        check_tax_rate(profile.tax_rate)?;
        for item in &profile.seed_items {
            check_line_amount(item.amount)?;
        }
        Ok(profile)
    }
}

impl InvoiceSnapshot {
    /// Serialize details and totals together.
    pub fn to_json(&self) -> Result<String, BeejakError> {
        serde_json::to_string_pretty(self).map_err(|e| BeejakError::Json(e.to_string()))
    }
}

/// Read a decimal from a JSON number or numeric string.
///
/// Returns `Ok(None)` for null or absent values, and for anything that is
/// not a number at all (logged at warn level). A well-formed number that
/// does not fit a `Decimal` is an [`BeejakError::InvalidAmount`].
fn lenient_decimal(value: Option<&Value>, field: &str) -> Result<Option<Decimal>, BeejakError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let text = match value {
        Value::Null => return Ok(None),
        Value::Number(n) => n.to_string(),
        Value::String(s) if s.trim().is_empty() => return Ok(None),
        Value::String(s) => s.trim().to_string(),
        _ => {
            warn!(field, value = %value, "unreadable number, treating as absent");
            return Ok(None);
        }
    };
    match parse_decimal(&text) {
        Some(parsed) => Ok(Some(parsed)),
        None if looks_numeric(&text) => Err(BeejakError::InvalidAmount(format!(
            "{field} {text} is out of range"
        ))),
        None => {
            warn!(field, value = %value, "unreadable number, treating as absent");
            Ok(None)
        }
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// `[+-]digits[.digits][e[+-]digits]`, with at least one mantissa digit.
fn looks_numeric(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((m, e)) => (m, Some(e)),
        None => (unsigned, None),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
    let mantissa_ok = !(whole.is_empty() && fraction.is_empty())
        && all_digits(whole)
        && all_digits(fraction);
    let exponent_ok = exponent.is_none_or(|e| {
        let digits = e.strip_prefix(['+', '-']).unwrap_or(e);
        !digits.is_empty() && all_digits(digits)
    });
    mantissa_ok && exponent_ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 10).unwrap()
    }

    fn load(json: &str) -> InvoiceDraft {
        InvoiceDraft::from_json(json, &SellerProfile::default(), today()).unwrap()
    }

    #[test]
    fn empty_object_yields_defaults() {
        let d = load("{}");
        let details = d.details();
        assert_eq!(details.from_company, "Vedant Enterprises");
        assert_eq!(details.date, today());
        assert_eq!(details.year, "25-26");
        assert_eq!(details.tax_rate, dec!(18));
        assert_eq!(details.line_items.len(), 1);
    }

    #[test]
    fn posted_fields_override_defaults() {
        let d = load(
            r#"{
                "billNumber": "44",
                "date": "2025-05-01",
                "toCompany": "Shree Constructions",
                "toGSTIN": "29ABCDE1234F1Z5",
                "lineItems": [
                    {"description": "Painting", "sacCode": "995473", "amount": 1000},
                    {"description": "Primer", "amount": "2500.50"}
                ],
                "taxType": "IGST",
                "taxRate": 12
            }"#,
        );
        let details = d.details();
        assert_eq!(details.bill_number, "44");
        assert_eq!(details.year, "25-26");
        assert_eq!(details.to_gstin, "29ABCDE1234F1Z5");
        assert_eq!(details.tax_type, TaxType::Igst);
        assert_eq!(details.tax_rate, dec!(12));
        assert_eq!(details.line_items[1].amount, dec!(2500.50));
        assert_eq!(details.line_items[1].sac_code, "");
        assert_eq!(d.totals().subtotal, dec!(3500.50));
    }

    #[test]
    fn unreadable_values_are_coerced() {
        let d = load(
            r#"{
                "date": "15/06/2025",
                "lineItems": [{"amount": "abc"}, {"amount": null}, {}],
                "taxType": "VAT",
                "taxRate": "eighteen"
            }"#,
        );
        let details = d.details();
        assert_eq!(details.date, today());
        assert_eq!(details.tax_type, TaxType::CgstSgst);
        assert_eq!(details.tax_rate, dec!(18));
        assert!(details.line_items.iter().all(|i| i.amount.is_zero()));
    }

    #[test]
    fn profile_rate_is_range_checked() {
        let err = SellerProfile::from_json(r#"{"taxRate": 250}"#).unwrap_err();
        assert!(matches!(err, BeejakError::InvalidAmount(_)));
    }

    #[test]
    fn huge_posted_amount_is_rejected() {
        let json = r#"{"lineItems": [{"amount": "1e27"}]}"#;
        let err = InvoiceDraft::from_json(json, &SellerProfile::default(), today()).unwrap_err();
        assert!(matches!(err, BeejakError::InvalidAmount(_)));
    }

    #[test]
    fn numbers_beyond_decimal_range_are_rejected() {
        for json in [
            r#"{"lineItems": [{"amount": "9.9e28"}]}"#,
            r#"{"lineItems": [{"amount": "1e400"}]}"#,
            r#"{"lineItems": [{"amount": 123456789012345678901234567890}]}"#,
            r#"{"taxRate": "-1e300"}"#,
        ] {
            let err = InvoiceDraft::from_json(json, &SellerProfile::default(), today()).unwrap_err();
            assert!(matches!(err, BeejakError::InvalidAmount(_)), "{json}");
        }
    }

    #[test]
    fn numeric_shape() {
        for text in ["1", "-2.5", "+.5", "7.", "1e400", "9.9E+28", "3e-2"] {
            assert!(looks_numeric(text), "{text}");
        }
        for text in ["abc", "", ".", "e5", "1e", "12a", "1.2.3", "--1", "NaN"] {
            assert!(!looks_numeric(text), "{text}");
        }
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = InvoiceDraft::from_json("{", &SellerProfile::default(), today()).unwrap_err();
        assert!(matches!(err, BeejakError::Json(_)));
    }

    #[test]
    fn draft_json_roundtrip() {
        let mut d = load(r#"{"billNumber": "7"}"#);
        d.set_to_address("12 MG Road\nBengaluru");
        let json = d.to_json().unwrap();
        assert!(json.contains("\"fromGST\""));
        let back = InvoiceDraft::from_json(&json, &SellerProfile::default(), today()).unwrap();
        assert_eq!(back.details(), d.details());
    }

    #[test]
    fn snapshot_json_has_totals() {
        let mut d = load(r#"{"lineItems": [{"amount": 100}]}"#);
        d.set_tax_rate(dec!(5)).unwrap();
        let json = d.generate().to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["grandTotal"], "105");
        assert_eq!(value["taxType"], "CGST+SGST");
    }
}
