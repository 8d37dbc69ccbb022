#![no_main]

use beejak::core::{InvoiceDraft, SellerProfile};
use beejak::preview::{PreviewDocument, render_html};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let today = fixed_date();
    // Posted form -> draft -> invoice -> HTML must not panic at any step
    if let Ok(draft) = InvoiceDraft::from_json(s, &SellerProfile::default(), today) {
        let invoice = draft.generate();
        if let Ok(doc) = PreviewDocument::from_snapshot(&invoice) {
            let _ = render_html(&doc);
        }
    }
});

fn fixed_date() -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(2025, 6, 15).unwrap_or_default()
}
