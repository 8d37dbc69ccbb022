use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::io::Cursor;

use crate::core::BeejakError;

use super::document::{PreviewDocument, TITLE};

pub type HtmlResult = Result<String, BeejakError>;

const PRINT_CSS: &str = "body{font-family:Arial,sans-serif;font-size:13px;margin:0}\
.invoice{max-width:800px;margin:0 auto;padding:24px}\
.letterhead{height:80px;border-bottom:2px solid #ccc;margin-bottom:16px}\
h1{text-align:center;font-size:22px}\
.parties{display:flex;gap:16px;margin-bottom:16px}\
.parties div.to,.parties div.from{flex:1}\
.from{text-align:right}\
.label{font-weight:bold}\
table{width:100%;border-collapse:collapse}\
th,td{border:1px solid #999;padding:4px 8px}\
td.amount,th.amount{text-align:right}\
td.sn{text-align:center}\
table.summary{width:300px;margin:12px 0 12px auto}\
tr.grand td{font-weight:bold;border-top:2px solid #999}\
.signature{margin-top:48px;text-align:right}\
@media print{.letterhead{height:112px}}";

fn html_io(e: std::io::Error) -> BeejakError {
    BeejakError::Render(format!("HTML write error: {e}"))
}

/// Thin element-oriented wrapper over a quick-xml writer. All text is
/// escaped, so user-entered names and addresses cannot inject markup.
pub struct HtmlWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl HtmlWriter {
    pub fn new() -> Result<Self, BeejakError> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
        writer
            .write_event(Event::DocType(BytesText::from_escaped("html")))
            .map_err(html_io)?;
        Ok(Self { writer })
    }

    pub fn into_string(self) -> HtmlResult {
        let buf = self.writer.into_inner().into_inner();
        String::from_utf8(buf).map_err(|e| BeejakError::Render(format!("HTML UTF-8 error: {e}")))
    }

    pub fn start_element(&mut self, name: &str) -> Result<&mut Self, BeejakError> {
        self.start_element_with_attrs(name, &[])
    }

    pub fn start_element_with_attrs(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
    ) -> Result<&mut Self, BeejakError> {
        let mut elem = BytesStart::new(name);
        for (k, v) in attrs {
            elem.push_attribute((*k, *v));
        }
        self.writer
            .write_event(Event::Start(elem))
            .map_err(html_io)?;
        Ok(self)
    }

    pub fn end_element(&mut self, name: &str) -> Result<&mut Self, BeejakError> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(html_io)?;
        Ok(self)
    }

    /// Self-closing element such as `<br/>` or `<meta .../>`.
    pub fn empty_element(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<&mut Self, BeejakError> {
        let mut elem = BytesStart::new(name);
        for (k, v) in attrs {
            elem.push_attribute((*k, *v));
        }
        self.writer
            .write_event(Event::Empty(elem))
            .map_err(html_io)?;
        Ok(self)
    }

    pub fn text(&mut self, text: &str) -> Result<&mut Self, BeejakError> {
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(html_io)?;
        Ok(self)
    }

    pub fn text_element(&mut self, name: &str, text: &str) -> Result<&mut Self, BeejakError> {
        self.text_element_with_attrs(name, text, &[])
    }

    pub fn text_element_with_attrs(
        &mut self,
        name: &str,
        text: &str,
        attrs: &[(&str, &str)],
    ) -> Result<&mut Self, BeejakError> {
        self.start_element_with_attrs(name, attrs)?;
        self.text(text)?;
        self.end_element(name)
    }

    /// `<span class="label">{label}</span> {value}` inside a `<div>`.
    pub fn labelled(&mut self, label: &str, value: &str) -> Result<&mut Self, BeejakError> {
        self.start_element("div")?;
        self.text_element_with_attrs("span", label, &[("class", "label")])?;
        self.text(&format!(" {value}"))?;
        self.end_element("div")
    }

    fn style(&mut self, css: &str) -> Result<&mut Self, BeejakError> {
        self.start_element("style")?;
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(css)))
            .map_err(html_io)?;
        self.end_element("style")
    }
}

/// Render a preview as a self-contained printable HTML page.
pub fn render_html(doc: &PreviewDocument) -> HtmlResult {
    let mut w = HtmlWriter::new()?;
    w.start_element_with_attrs("html", &[("lang", "en")])?;

    w.start_element("head")?;
    w.empty_element("meta", &[("charset", "utf-8")])?;
    w.text_element("title", &format!("Tax Invoice {}", doc.bill_number))?;
    w.style(PRINT_CSS)?;
    w.end_element("head")?;

    w.start_element("body")?;
    w.start_element_with_attrs("div", &[("class", "invoice")])?;
    w.start_element_with_attrs("div", &[("class", "letterhead")])?;
    w.end_element("div")?;
    w.text_element("h1", TITLE)?;

    write_parties(&mut w, doc)?;

    if let Some(project) = &doc.project {
        w.text_element_with_attrs("div", &format!("Project: {project}"), &[("class", "project label")])?;
    }

    write_items(&mut w, doc)?;
    write_summary(&mut w, doc)?;

    w.start_element_with_attrs("p", &[("class", "words")])?;
    w.text_element_with_attrs("span", "Amount in word:", &[("class", "label")])?;
    w.text(&format!(" {}", doc.amount_in_words))?;
    w.end_element("p")?;

    w.start_element_with_attrs("div", &[("class", "signature")])?;
    w.text_element_with_attrs("div", &format!("For: {}", doc.from_company), &[("class", "label")])?;
    w.text_element_with_attrs("div", "Proprietor", &[("class", "label")])?;
    w.end_element("div")?;

    w.end_element("div")?;
    w.end_element("body")?;
    w.end_element("html")?;
    w.into_string()
}

fn write_parties(w: &mut HtmlWriter, doc: &PreviewDocument) -> Result<(), BeejakError> {
    w.start_element_with_attrs("div", &[("class", "parties")])?;

    w.start_element_with_attrs("div", &[("class", "to")])?;
    w.text_element_with_attrs("div", "To:", &[("class", "label")])?;
    w.text_element_with_attrs("div", &doc.to_company, &[("class", "company")])?;
    w.start_element_with_attrs("div", &[("class", "address")])?;
    for (i, line) in doc.to_address_lines.iter().enumerate() {
        if i > 0 {
            w.empty_element("br", &[])?;
        }
        w.text(line)?;
    }
    w.end_element("div")?;
    w.labelled("GSTIN:", &doc.to_gstin)?;
    w.end_element("div")?;

    w.start_element_with_attrs("div", &[("class", "from")])?;
    w.labelled("From:", &doc.from_company)?;
    w.labelled("Date:", &doc.date)?;
    w.labelled("Bill No.:", &doc.bill_number)?;
    w.labelled("GST:", &doc.from_gst)?;
    w.end_element("div")?;

    w.end_element("div")?;
    Ok(())
}

fn write_items(w: &mut HtmlWriter, doc: &PreviewDocument) -> Result<(), BeejakError> {
    w.start_element_with_attrs("table", &[("class", "items")])?;
    w.start_element("thead")?;
    w.start_element("tr")?;
    w.text_element("th", "Sn")?;
    w.text_element("th", "Description")?;
    w.text_element("th", "SAC Code")?;
    w.text_element_with_attrs("th", "Amount", &[("class", "amount")])?;
    w.end_element("tr")?;
    w.end_element("thead")?;

    w.start_element("tbody")?;
    for row in &doc.rows {
        let serial = row.serial.map(|n| n.to_string()).unwrap_or_default();
        w.start_element("tr")?;
        w.text_element_with_attrs("td", &serial, &[("class", "sn")])?;
        w.text_element("td", &row.description)?;
        w.text_element("td", &row.sac_code)?;
        w.text_element_with_attrs(
            "td",
            row.amount.as_deref().unwrap_or_default(),
            &[("class", "amount")],
        )?;
        w.end_element("tr")?;
    }
    w.end_element("tbody")?;
    w.end_element("table")?;
    Ok(())
}

fn write_summary(w: &mut HtmlWriter, doc: &PreviewDocument) -> Result<(), BeejakError> {
    w.start_element_with_attrs("table", &[("class", "summary")])?;
    summary_row(w, "Total:", &doc.total, None)?;
    for line in &doc.tax_lines {
        summary_row(w, &format!("{}:", line.label), &line.amount, None)?;
    }
    summary_row(w, "Grand Total:", &doc.grand_total, Some("grand"))?;
    w.end_element("table")?;
    Ok(())
}

fn summary_row(
    w: &mut HtmlWriter,
    label: &str,
    amount: &str,
    class: Option<&str>,
) -> Result<(), BeejakError> {
    match class {
        Some(class) => w.start_element_with_attrs("tr", &[("class", class)])?,
        None => w.start_element("tr")?,
    };
    w.text_element_with_attrs("td", label, &[("class", "label")])?;
    w.text_element_with_attrs("td", amount, &[("class", "amount")])?;
    w.end_element("tr")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{InvoiceDraft, LineItemEdit, SellerProfile};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn doc() -> PreviewDocument {
        let mut d = InvoiceDraft::new(
            &SellerProfile::default(),
            NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
        );
        d.set_bill_number("101");
        d.set_to_company("Rao & Sons <Builders>");
        d.set_to_address("Line one\nLine two");
        d.update_line_item(0, LineItemEdit::Amount(dec!(1000))).unwrap();
        PreviewDocument::from_snapshot(&d.generate()).unwrap()
    }

    #[test]
    fn html_has_document_structure() {
        let html = render_html(&doc()).unwrap();
        assert!(html.trim_start().starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Tax Invoice 101/25-26</title>"));
        assert!(html.contains("<h1>TAX INVOICE</h1>"));
        assert!(html.contains("CGST 9%:"));
        assert!(html.contains("₹1,180.00"));
        assert!(html.contains("One Thousand One Hundred Eighty Rupees"));
        assert!(html.contains("Proprietor"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn user_text_is_escaped() {
        let html = render_html(&doc()).unwrap();
        assert!(html.contains("Rao &amp; Sons &lt;Builders&gt;"));
        assert!(!html.contains("<Builders>"));
    }

    #[test]
    fn address_lines_are_separated_by_breaks() {
        let html = render_html(&doc()).unwrap();
        assert!(html.contains("<br/>"));
        assert!(html.contains("Line one"));
        assert!(html.contains("Line two"));
    }

    #[test]
    fn css_is_not_escaped() {
        let html = render_html(&doc()).unwrap();
        assert!(html.contains("@media print{.letterhead{height:112px}}"));
    }
}
