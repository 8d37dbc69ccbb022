//! # beejak
//!
//! Indian GST tax invoice library: line items and tax rate in, subtotal,
//! CGST/SGST or IGST, grand total and the "amount in words" line out,
//! plus a print-ready preview.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Amounts in words follow the Indian numbering system (crore, lakh, thousand).
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use beejak::core::*;
//! use rust_decimal_macros::dec;
//!
//! let mut draft = InvoiceDraft::new(
//!     &SellerProfile::default(),
//!     NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
//! );
//! draft.set_bill_number("101");
//! draft.set_to_company("Shree Constructions");
//! draft.update_line_item(0, LineItemEdit::Amount(dec!(1000))).unwrap();
//! draft.push_line_item(LineItem::new("Primer coat", "995473", dec!(2500.50))).unwrap();
//!
//! let invoice = draft.generate();
//! assert_eq!(invoice.totals().grand_total, dec!(4130.59));
//! assert_eq!(invoice.bill_number_display(), "101/25-26");
//! assert_eq!(
//!     amount_to_words(invoice.totals().grand_total).unwrap(),
//!     "Four Thousand One Hundred Thirty Rupees and Fifty Nine Paise",
//! );
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Types, totals, amount in words, draft, snapshot, session |
//! | `preview` | INR/date formatting, text and printable HTML preview |
//! | `json` | JSON import/export of drafts and seller profiles |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "preview")]
pub mod preview;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
