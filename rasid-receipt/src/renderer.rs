//! Receipt renderer
//!
//! Lays out a [`ReceiptData`] as fixed-width printable text. All
//! amount formatting goes through rasid-words so digits and words stay
//! consistent on the page.

use chrono::{Local, NaiveDate};
use rasid_words::format_digits;

use crate::model::ReceiptData;
use crate::text::TextBuilder;

pub struct ReceiptRenderer<'a> {
    receipt: &'a ReceiptData,
    width: usize,
}

impl<'a> ReceiptRenderer<'a> {
    pub fn new(receipt: &'a ReceiptData, width: usize) -> Self {
        Self { receipt, width }
    }

    /// Render with today's date stamp
    pub fn render(&self) -> String {
        self.render_at(Local::now().date_naive())
    }

    /// Render with an explicit date stamp
    pub fn render_at(&self, date: NaiveDate) -> String {
        let mut b = TextBuilder::new(self.width);

        b.center_line("PAYMENT RECEIPT");
        b.eq_sep();
        b.line_lr("Date:", &date.format("%d/%m/%Y").to_string());
        b.blank_line();

        // ── Customer block ──
        b.write_line(&format!("To: {}", placeholder(&self.receipt.customer_name)));
        b.write_line(placeholder(&self.receipt.customer_address));
        b.blank_line();

        // ── Amount table ──
        b.line_lr("DESCRIPTION", "TOTAL");
        b.dash_sep();
        b.line_lr(&self.receipt.line_item(), &inr(self.receipt.total_amount));
        if let Some(loan) = self.receipt.loan_amount {
            b.line_lr("Loan Amount", &inr(loan));
        }
        if let Some(margin) = self.receipt.margin_amount {
            b.line_lr("Margin Money", &inr(margin));
        }
        b.dash_sep();
        b.line_lr("TOTAL", &inr(self.receipt.total_amount));
        b.blank_line();

        // ── Fee message ──
        b.wrapped(&self.receipt.fees_message());
        b.blank_line();
        b.blank_line();

        // ── Signature block ──
        b.line_lr("", "Authorised Signatory");
        b.eq_sep();

        b.finalize()
    }
}

fn placeholder(s: &str) -> &str {
    let trimmed = s.trim();
    if trimmed.is_empty() { "—" } else { trimmed }
}

fn inr(amount: f64) -> String {
    format!("₹{}", format_digits(Some(amount)))
}
