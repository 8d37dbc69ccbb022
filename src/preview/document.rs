use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::{BeejakError, InvoiceSnapshot, amount_to_words};

use super::format::{format_amount, format_date, format_rate, format_rupees};

pub const TITLE: &str = "TAX INVOICE";

/// Column width of the description in the text preview.
const DESCRIPTION_WIDTH: usize = 40;

/// A row of the items table, ready to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewRow {
    /// 1-based position; blank for rows without a description.
    pub serial: Option<usize>,
    pub description: String,
    pub sac_code: String,
    /// Blank unless the amount is positive.
    pub amount: Option<String>,
}

/// A summary line such as `("CGST 9%", "₹315.05")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub label: String,
    pub amount: String,
}

/// Every string printed on the invoice, formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewDocument {
    pub to_company: String,
    pub to_address_lines: Vec<String>,
    pub to_gstin: String,
    pub from_company: String,
    pub date: String,
    pub bill_number: String,
    pub from_gst: String,
    pub project: Option<String>,
    pub rows: Vec<PreviewRow>,
    pub total: String,
    pub tax_lines: Vec<SummaryLine>,
    pub grand_total: String,
    pub amount_in_words: String,
}

impl PreviewDocument {
    /// Format a snapshot for display.
    ///
    /// Fails with [`BeejakError::InvalidAmount`] when the grand total is
    /// negative, since it cannot be written in words.
    pub fn from_snapshot(snapshot: &InvoiceSnapshot) -> Result<Self, BeejakError> {
        let details = snapshot.details();
        let totals = snapshot.totals();

        let rows = details
            .line_items
            .iter()
            .enumerate()
            .map(|(i, item)| PreviewRow {
                serial: (!item.description.is_empty()).then_some(i + 1),
                description: item.description.clone(),
                sac_code: item.sac_code.clone(),
                amount: (item.amount > Decimal::ZERO).then(|| format_amount(item.amount)),
            })
            .collect();

        let tax_lines = snapshot
            .tax_components()
            .into_iter()
            .map(|c| SummaryLine {
                label: format!("{} {}%", c.label, format_rate(c.rate)),
                amount: format_rupees(c.amount),
            })
            .collect();

        Ok(Self {
            to_company: details.to_company.clone(),
            to_address_lines: details.to_address.lines().map(str::to_string).collect(),
            to_gstin: details.to_gstin.clone(),
            from_company: details.from_company.clone(),
            date: format_date(details.date),
            bill_number: snapshot.bill_number_display(),
            from_gst: details.from_gst.clone(),
            project: (!details.project.is_empty()).then(|| details.project.clone()),
            rows,
            total: format_rupees(totals.subtotal),
            tax_lines,
            grand_total: format_rupees(totals.grand_total),
            amount_in_words: amount_to_words(totals.grand_total)?,
        })
    }

    /// Plain-text rendering, one field per line.
    pub fn to_text(&self) -> String {
        let mut out = vec![TITLE.to_string(), String::new()];

        out.push(format!("To: {}", self.to_company));
        out.extend(self.to_address_lines.iter().map(|l| format!("    {l}")));
        out.push(format!("GSTIN: {}", self.to_gstin));
        out.push(String::new());

        out.push(format!("From: {}", self.from_company));
        out.push(format!("Date: {}", self.date));
        out.push(format!("Bill No.: {}", self.bill_number));
        out.push(format!("GST: {}", self.from_gst));

        if let Some(project) = &self.project {
            out.push(String::new());
            out.push(format!("Project: {project}"));
        }

        out.push(String::new());
        out.push(table_row("Sn", "Description", "SAC Code", "Amount"));
        for row in &self.rows {
            let serial = row.serial.map(|n| n.to_string()).unwrap_or_default();
            let mut description = wrap(&row.description, DESCRIPTION_WIDTH).into_iter();
            out.push(table_row(
                &serial,
                &description.next().unwrap_or_default(),
                &row.sac_code,
                row.amount.as_deref().unwrap_or_default(),
            ));
            out.extend(description.map(|line| table_row("", &line, "", "")));
        }

        out.push(String::new());
        out.push(summary_row("Total:", &self.total));
        for line in &self.tax_lines {
            out.push(summary_row(&format!("{}:", line.label), &line.amount));
        }
        out.push(summary_row("Grand Total:", &self.grand_total));

        out.push(String::new());
        out.push(format!("Amount in word: {}", self.amount_in_words));
        out.push(String::new());
        out.push(format!("For: {}", self.from_company));
        out.push("Proprietor".to_string());

        out.iter()
            .map(|l| l.trim_end())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn table_row(serial: &str, description: &str, sac: &str, amount: &str) -> String {
    format!("{serial:<4}{description:<40}  {sac:<10}{amount:>14}")
}

/// Greedy word wrap; words longer than `width` are split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            lines.push(word.drain(..width).collect());
        }
        if word.is_empty() {
            continue;
        }
        let needed = word.len() + usize::from(!current.is_empty());
        if current.chars().count() + needed > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn summary_row(label: &str, amount: &str) -> String {
    format!("{label:<20}{amount:>14}")
}
