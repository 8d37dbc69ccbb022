//! Preview rendering: formatting a frozen invoice for the screen and for
//! the host's print facility.
//!
//! # Example
//!
//! ```
//! use beejak::core::*;
//! use beejak::preview::*;
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let mut draft = InvoiceDraft::new(&SellerProfile::default(), NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
//! draft.update_line_item(0, LineItemEdit::Amount(dec!(100000))).unwrap();
//! let doc = PreviewDocument::from_snapshot(&draft.generate()).unwrap();
//! assert_eq!(doc.grand_total, "₹1,18,000.00");
//! assert_eq!(doc.amount_in_words, "One Lakh Eighteen Thousand Rupees");
//! let html = render_html(&doc).unwrap();
//! assert!(html.contains("TAX INVOICE"));
//! ```

mod document;
mod format;
mod html;

pub use document::{PreviewDocument, PreviewRow, SummaryLine, TITLE};
pub use format::{RUPEE_SIGN, format_amount, format_date, format_rate, format_rupees};
pub use html::{HtmlResult, HtmlWriter, render_html};

use tracing::debug;

use crate::core::{BeejakError, InvoiceSnapshot};

/// The host's native print facility.
///
/// Printing is fire-and-forget: the target receives a job title and the
/// printable HTML and reports nothing back.
pub trait PrintTarget {
    fn print(&mut self, title: &str, html: &str);
}

impl<F: FnMut(&str, &str)> PrintTarget for F {
    fn print(&mut self, title: &str, html: &str) {
        self(title, html)
    }
}

/// Render `snapshot` and hand it to `target` for printing.
pub fn print<P: PrintTarget + ?Sized>(snapshot: &InvoiceSnapshot, target: &mut P) -> Result<(), BeejakError> {
    let doc = PreviewDocument::from_snapshot(snapshot)?;
    let html = render_html(&doc)?;
    let title = format!("Tax Invoice {}", doc.bill_number);
    debug!(title = %title, bytes = html.len(), "sending invoice to print target");
    target.print(&title, &html);
    Ok(())
}
