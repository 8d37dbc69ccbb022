use beejak::core::*;
use chrono::NaiveDate;

const FORM: &str = r#"{
    "billNumber": "12",
    "date": "2026-01-20",
    "toCompany": "Shree Constructions",
    "toGSTIN": "29ABCDE1234F1Z5",
    "lineItems": [
        {"description": "RA 02 Bill for Painting work", "sacCode": "995473", "amount": "45000"},
        {"description": "Touch-up", "amount": 2750.25}
    ],
    "taxType": "CGST+SGST",
    "taxRate": "12"
}"#;

fn main() -> Result<(), BeejakError> {
    let today = NaiveDate::from_ymd_opt(2026, 1, 20).unwrap();
    let profile = SellerProfile::from_json(r#"{"company": "Vedant Enterprises"}"#)?;

    let draft = InvoiceDraft::from_json(FORM, &profile, today)?;
    println!("Draft as stored:\n{}", draft.to_json()?);

    let invoice = draft.generate();
    println!("Generated invoice:\n{}", invoice.to_json()?);
    println!("In words: {}", amount_to_words(invoice.totals().grand_total)?);

    Ok(())
}
