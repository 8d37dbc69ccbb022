use beejak::core::*;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn main() -> Result<(), BeejakError> {
    let profile = SellerProfile::default();
    let mut draft = InvoiceDraft::new(&profile, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
    draft.set_bill_number("101");
    draft.set_to_company("Shree Constructions");
    draft.set_to_address("12 MG Road\nBengaluru 560001");
    draft.set_to_gstin("29ABCDE1234F1Z5");
    draft.set_project("Lake View Apartments");

    // The seeded painting line only needs its amount
    draft.update_line_item(0, LineItemEdit::Amount(dec!(1000)))?;
    draft.push_line_item(LineItem::new("Primer coat", "995473", dec!(2500.50)))?;

    let live = draft.totals();
    println!("Running total: {}", live.grand_total);

    let invoice = draft.generate();
    let details = invoice.details();
    let totals = invoice.totals();

    println!("Bill No.: {}", invoice.bill_number_display());
    println!("From:     {} ({})", details.from_company, details.from_gst);
    println!("To:       {} ({})", details.to_company, details.to_gstin);
    println!("---");
    for (i, item) in details.line_items.iter().enumerate() {
        println!("  {:>2}. {:<60} {} {:>10}", i + 1, item.description, item.sac_code, item.amount);
    }
    println!("---");
    println!("Total:       {}", totals.subtotal);
    for component in invoice.tax_components() {
        println!("{:<5} {:>4}%: {}", component.label, component.rate, component.amount.round_dp(2));
    }
    println!("Grand Total: {}", totals.grand_total);
    println!("In words:    {}", amount_to_words(totals.grand_total)?);

    Ok(())
}
