use beejak::core::*;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Draft for a typical intra-state painting contract.
fn painting_draft() -> InvoiceDraft {
    let mut draft = InvoiceDraft::new(&SellerProfile::default(), date(2025, 6, 15));
    draft.set_bill_number("101");
    draft.set_to_company("Shree Constructions");
    draft.set_to_address("12 MG Road\nBengaluru 560001");
    draft.set_to_gstin("29ABCDE1234F1Z5");
    draft.set_project("Lake View Apartments");
    draft
        .update_line_item(0, LineItemEdit::Amount(dec!(1000)))
        .unwrap();
    draft
        .push_line_item(LineItem::new("Primer coat", "995473", dec!(2500.50)))
        .unwrap();
    draft
}

// --- Totals ---

#[test]
fn cgst_sgst_scenario() {
    let invoice = painting_draft().generate();
    let totals = invoice.totals();

    assert_eq!(totals.subtotal, dec!(3500.50));
    // 3500.50 * 18 / 100 = 630.09
    assert_eq!(totals.tax_amount, dec!(630.09));
    assert_eq!(totals.grand_total, dec!(4130.59));

    let parts = invoice.tax_components();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].label, "CGST");
    assert_eq!(parts[0].rate, dec!(9));
    // displayed as 315.05 after rounding
    assert_eq!(parts[0].amount, dec!(315.045));
    assert_eq!(parts[1].label, "SGST");
    assert_eq!(parts[0].amount + parts[1].amount, totals.tax_amount);
}

#[test]
fn igst_does_not_change_tax() {
    let mut draft = painting_draft();
    let intra = draft.generate();
    draft.set_tax_type(TaxType::Igst);
    let inter = draft.generate();

    assert_eq!(intra.totals(), inter.totals());
    let parts = inter.tax_components();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].rate, dec!(18));
    assert_eq!(parts[0].amount, dec!(630.09));
}

#[test]
fn compute_totals_over_plain_items() {
    let items = vec![
        LineItem::new("Scaffolding", "998596", dec!(12000)),
        LineItem::new("Labour", "995473", dec!(8000)),
        LineItem::new("Credit for unused paint", "", dec!(-500)),
    ];
    let totals = compute_totals(&items, dec!(12));
    assert_eq!(totals.subtotal, dec!(19500));
    assert_eq!(totals.tax_amount, dec!(2340));
    assert_eq!(totals.grand_total, dec!(21840));
}

#[test]
fn live_totals_follow_edits() {
    let mut draft = painting_draft();
    assert_eq!(draft.totals().grand_total, dec!(4130.59));
    draft.remove_line_item(1).unwrap();
    assert_eq!(draft.totals().grand_total, dec!(1180));
    draft.set_tax_rate(dec!(5)).unwrap();
    assert_eq!(draft.totals().grand_total, dec!(1050));
    draft.set_tax_rate(Decimal::ZERO).unwrap();
    assert_eq!(draft.totals().grand_total, dec!(1000));
}

// --- Draft defaults ---

#[test]
fn new_draft_from_custom_profile() {
    let profile = SellerProfile::new("Asha Traders", "27AAAAA0000A1Z5")
        .tax(TaxType::Igst, dec!(12))
        .seed_items(Vec::new());
    let draft = InvoiceDraft::new(&profile, date(2026, 3, 31));
    let details = draft.details();
    assert_eq!(details.from_company, "Asha Traders");
    assert_eq!(details.tax_type, TaxType::Igst);
    assert_eq!(details.tax_rate, dec!(12));
    assert_eq!(details.year, "25-26");
    assert!(details.line_items.is_empty());
    assert_eq!(draft.totals().grand_total, Decimal::ZERO);
}

#[test]
fn for_today_uses_current_financial_year() {
    let draft = InvoiceDraft::for_today(&SellerProfile::default());
    let expected = FinancialYear::containing(draft.details().date).label();
    assert_eq!(draft.details().year, expected);
}

#[test]
fn line_item_limit() {
    let mut draft = InvoiceDraft::new(&SellerProfile::default(), date(2025, 6, 15));
    for _ in 1..MAX_LINE_ITEMS {
        draft.add_line_item().unwrap();
    }
    assert_eq!(draft.line_items().len(), MAX_LINE_ITEMS);
    let err = draft.add_line_item().unwrap_err();
    assert!(matches!(err, BeejakError::Draft(_)));
}

// --- Snapshot & session ---

#[test]
fn snapshot_ignores_later_draft_edits() {
    let mut draft = painting_draft();
    let invoice = draft.generate();
    draft.set_tax_rate(dec!(28)).unwrap();
    draft.set_bill_number("102");
    draft.add_line_item().unwrap();

    assert_eq!(invoice.details().bill_number, "101");
    assert_eq!(invoice.details().line_items.len(), 2);
    assert_eq!(invoice.totals().grand_total, dec!(4130.59));
    assert_eq!(invoice.bill_number_display(), "101/25-26");
}

#[test]
fn generate_twice_is_identical() {
    let draft = painting_draft();
    assert_eq!(draft.generate(), draft.generate());
}

#[test]
fn session_round_trip() {
    let mut session = InvoiceSession::new(painting_draft());
    let words = amount_to_words(session.generate().totals().grand_total).unwrap();
    assert_eq!(
        words,
        "Four Thousand One Hundred Thirty Rupees and Fifty Nine Paise"
    );

    session.close_preview().unwrap();
    assert!(!session.is_previewing());
    assert_eq!(session.draft().details().project, "Lake View Apartments");
    assert_eq!(session.draft().line_items().len(), 2);

    session
        .draft_mut()
        .update_line_item(1, LineItemEdit::Amount(dec!(3000)))
        .unwrap();
    let second = session.generate();
    assert_eq!(second.totals().subtotal, dec!(4000));
    assert_eq!(second.totals().grand_total, dec!(4720));
}

#[test]
fn details_survive_resume() {
    let invoice = painting_draft().generate();
    let resumed = InvoiceDraft::from_details(invoice.to_details(), &SellerProfile::default()).unwrap();
    assert_eq!(resumed.details(), invoice.details());
    assert_eq!(resumed.generate(), invoice);
}
