use beejak::core::*;
use beejak::preview::PreviewDocument;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn main() -> Result<(), BeejakError> {
    let profile = SellerProfile::default();
    let mut session = InvoiceSession::new(InvoiceDraft::new(
        &profile,
        NaiveDate::from_ymd_opt(2025, 11, 3).unwrap(),
    ));

    let draft = session.draft_mut();
    draft.set_bill_number("57");
    draft.set_to_company("Rao & Sons Builders");
    draft.set_to_address("Plot 4, KIADB Industrial Area\nHubballi 580030");
    draft.set_to_gstin("29AAFCR5678K1Z2");
    draft.update_line_item(0, LineItemEdit::Amount(dec!(84000)))?;
    draft.push_line_item(LineItem::new("Waterproofing, terrace", "995473", dec!(36500)))?;

    let snapshot = session.generate();
    println!("{}", PreviewDocument::from_snapshot(snapshot)?.to_text());

    session.print(&mut |title: &str, html: &str| {
        println!();
        println!("[print] {title}: {} bytes of HTML", html.len());
    })?;

    // Back to editing with the generated details
    session.close_preview()?;
    session.draft_mut().set_tax_type(TaxType::Igst);
    let igst = session.generate();
    println!("IGST grand total: {}", igst.totals().grand_total);

    Ok(())
}
